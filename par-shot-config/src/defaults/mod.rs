//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.
//! Everything is re-exported from this module.

mod capture;
mod colors;

// ── Capture & delivery ─────────────────────────────────────────────────────
pub use capture::{
    bool_false, bool_true, default_tab_size, file_timestamp_format, output_dir, selection_padding,
};

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{
    diff_conflict_color, diff_deleted_color, diff_inserted_color, diff_modified_color,
    divider_background_color, divider_separator_color,
};
