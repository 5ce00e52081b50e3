//! Normalization and semantic validation for `Config`.

use super::config_struct::Config;
use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};

/// Largest accepted `selection_padding`, in pixels
pub const MAX_SELECTION_PADDING: u32 = 512;

impl Config {
    /// Replace blank or out-of-shape values with their defaults
    pub fn normalize(&mut self) {
        if self.output_dir.trim().is_empty() {
            log::debug!("Blank output_dir, using default");
            self.output_dir = crate::defaults::output_dir();
        }
        if self.file_timestamp_format.trim().is_empty() {
            log::debug!("Blank file_timestamp_format, using default");
            self.file_timestamp_format = crate::defaults::file_timestamp_format();
        }
    }

    /// Check field values that serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_tab_size == 0 {
            return Err(ConfigError::Validation(
                "default_tab_size must be at least 1".to_string(),
            ));
        }

        if self.selection_padding > MAX_SELECTION_PADDING {
            return Err(ConfigError::Validation(format!(
                "selection_padding {} exceeds maximum of {MAX_SELECTION_PADDING}",
                self.selection_padding
            )));
        }

        let fmt = &self.file_timestamp_format;
        if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Validation(format!(
                "file_timestamp_format {fmt:?} is not a valid strftime pattern"
            )));
        }
        if fmt.contains('/') || fmt.contains('\\') {
            return Err(ConfigError::Validation(format!(
                "file_timestamp_format {fmt:?} must not contain path separators"
            )));
        }

        Ok(())
    }
}
