//! Core `Config` struct definition.
//!
//! Fields are grouped by section comment. Every field carries a serde default
//! so partial YAML files load cleanly and new fields never break old files.

mod diff_colors;

pub use diff_colors::DiffColors;

use crate::types::LogLevel;
use serde::{Deserialize, Serialize};

/// Screenshot engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Capture
    // ========================================================================
    /// Capture the gutter (line numbers, markers) next to the content
    #[serde(default = "crate::defaults::bool_true")]
    pub include_gutter: bool,

    /// Horizontal padding in pixels added to selection captures
    #[serde(default = "crate::defaults::selection_padding")]
    pub selection_padding: u32,

    /// Remove the shared leading indentation of the selected lines
    #[serde(default = "crate::defaults::bool_true")]
    pub trim_indent: bool,

    /// Tab size used when the host view does not report one
    #[serde(default = "crate::defaults::default_tab_size")]
    pub default_tab_size: usize,

    // ========================================================================
    // Diff
    // ========================================================================
    /// Draw change bands and folding separators on the diff divider
    #[serde(default = "crate::defaults::bool_true")]
    pub diff_divider_overlay: bool,

    #[serde(default)]
    pub diff_colors: DiffColors,

    // ========================================================================
    // Delivery
    // ========================================================================
    /// Copy the finished image to the system clipboard
    #[serde(default = "crate::defaults::bool_true")]
    pub clipboard: bool,

    /// Save the finished image as PNG into `output_dir`
    #[serde(default = "crate::defaults::bool_true")]
    pub save: bool,

    /// Destination directory. `~` and allow-listed `${VAR}` references are
    /// expanded by [`Config::resolved_output_dir`].
    #[serde(default = "crate::defaults::output_dir")]
    pub output_dir: String,

    /// chrono format string for the file name timestamp
    #[serde(default = "crate::defaults::file_timestamp_format")]
    pub file_timestamp_format: String,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_gutter: crate::defaults::bool_true(),
            selection_padding: crate::defaults::selection_padding(),
            trim_indent: crate::defaults::bool_true(),
            default_tab_size: crate::defaults::default_tab_size(),
            diff_divider_overlay: crate::defaults::bool_true(),
            diff_colors: DiffColors::default(),
            clipboard: crate::defaults::bool_true(),
            save: crate::defaults::bool_true(),
            output_dir: crate::defaults::output_dir(),
            file_timestamp_format: crate::defaults::file_timestamp_format(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_gutter(mut self, include_gutter: bool) -> Self {
        self.include_gutter = include_gutter;
        self
    }

    pub fn with_clipboard(mut self, clipboard: bool) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_selection_padding(mut self, padding: u32) -> Self {
        self.selection_padding = padding;
        self
    }

    pub fn with_trim_indent(mut self, trim_indent: bool) -> Self {
        self.trim_indent = trim_indent;
        self
    }

    pub fn with_default_tab_size(mut self, tab_size: usize) -> Self {
        self.default_tab_size = tab_size;
        self
    }

    pub fn with_diff_divider_overlay(mut self, overlay: bool) -> Self {
        self.diff_divider_overlay = overlay;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
