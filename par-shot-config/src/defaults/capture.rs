//! Default values for capture geometry and delivery settings.

pub fn bool_true() -> bool {
    true
}

pub fn bool_false() -> bool {
    false
}

/// Horizontal padding (pixels) appended to selection captures
pub fn selection_padding() -> u32 {
    24
}

/// Tab size used when the host view cannot report one
pub fn default_tab_size() -> usize {
    4
}

/// Screenshot output directory, expanded at use time
pub fn output_dir() -> String {
    "~/Downloads/screenshot".to_string()
}

/// chrono format for the timestamp suffix of saved files
pub fn file_timestamp_format() -> String {
    "%Y%m%d%H%M%S".to_string()
}
