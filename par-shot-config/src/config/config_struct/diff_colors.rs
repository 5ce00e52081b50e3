//! Colors used when painting the diff divider.

use serde::{Deserialize, Serialize};

/// Divider palette: one color per change kind plus background and separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffColors {
    #[serde(default = "crate::defaults::diff_inserted_color")]
    pub inserted: [u8; 3],

    #[serde(default = "crate::defaults::diff_deleted_color")]
    pub deleted: [u8; 3],

    #[serde(default = "crate::defaults::diff_modified_color")]
    pub modified: [u8; 3],

    #[serde(default = "crate::defaults::diff_conflict_color")]
    pub conflict: [u8; 3],

    /// Fill for the divider strip; used when the viewer reports none
    #[serde(default = "crate::defaults::divider_background_color")]
    pub divider_background: [u8; 3],

    /// Folding separator line color
    #[serde(default = "crate::defaults::divider_separator_color")]
    pub separator: [u8; 3],
}

impl Default for DiffColors {
    fn default() -> Self {
        Self {
            inserted: crate::defaults::diff_inserted_color(),
            deleted: crate::defaults::diff_deleted_color(),
            modified: crate::defaults::diff_modified_color(),
            conflict: crate::defaults::diff_conflict_color(),
            divider_background: crate::defaults::divider_background_color(),
            separator: crate::defaults::divider_separator_color(),
        }
    }
}
