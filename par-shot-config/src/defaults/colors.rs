//! Default values for diff divider colors.

pub fn diff_inserted_color() -> [u8; 3] {
    [73, 156, 84] // Muted green
}

pub fn diff_deleted_color() -> [u8; 3] {
    [112, 112, 112] // Gray
}

pub fn diff_modified_color() -> [u8; 3] {
    [56, 117, 215] // Blue
}

pub fn diff_conflict_color() -> [u8; 3] {
    [199, 84, 80] // Red
}

pub fn divider_background_color() -> [u8; 3] {
    [43, 43, 43] // Dark gray, slightly lighter than editor background
}

pub fn divider_separator_color() -> [u8; 3] {
    [128, 128, 128] // Medium gray
}
