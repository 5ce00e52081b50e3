//! Side-by-side comparison of two [`TextView`]s.

use super::line_diff::diff_lines;
use super::text_view::TextView;
use crate::diff::DiffViewer;
use crate::view::SourceView;
use par_shot_render::{DiffChangeSpan, Rgba, SeparatorMarker};

/// Default gap between the panes, in pixels
pub const DEFAULT_DIVIDER_WIDTH: u32 = 30;

pub struct TextDiffViewer {
    left: TextView,
    right: TextView,
    changes: Vec<DiffChangeSpan>,
    align_changes: bool,
    divider_width: u32,
    separators: Vec<SeparatorMarker>,
    divider_background: Option<Rgba<u8>>,
}

impl TextDiffViewer {
    /// Pair two views; changes are computed from their text
    pub fn new(left: TextView, right: TextView) -> Self {
        let changes = diff_lines(&left.lines().join("\n"), &right.lines().join("\n"));
        log::debug!("Diff viewer with {} change spans", changes.len());
        Self {
            left,
            right,
            changes,
            align_changes: false,
            divider_width: DEFAULT_DIVIDER_WIDTH,
            separators: Vec::new(),
            divider_background: None,
        }
    }

    /// Replace the computed changes
    pub fn with_changes(mut self, changes: Vec<DiffChangeSpan>) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_align_changes(mut self, align: bool) -> Self {
        self.align_changes = align;
        self
    }

    pub fn with_divider_width(mut self, width: u32) -> Self {
        self.divider_width = width;
        self
    }

    pub fn with_folding_separators(mut self, separators: Vec<SeparatorMarker>) -> Self {
        self.separators = separators;
        self
    }

    pub fn with_divider_background(mut self, color: Rgba<u8>) -> Self {
        self.divider_background = Some(color);
        self
    }

    pub fn left_view(&self) -> &TextView {
        &self.left
    }

    pub fn right_view(&self) -> &TextView {
        &self.right
    }
}

impl DiffViewer for TextDiffViewer {
    fn left(&self) -> &dyn SourceView {
        &self.left
    }

    fn right(&self) -> &dyn SourceView {
        &self.right
    }

    fn divider_width(&self) -> u32 {
        self.divider_width
    }

    fn changes(&self) -> Vec<DiffChangeSpan> {
        self.changes.clone()
    }

    fn align_changes(&self) -> bool {
        self.align_changes
    }

    fn folding_separators(&self) -> Vec<SeparatorMarker> {
        self.separators.clone()
    }

    fn divider_background(&self) -> Option<Rgba<u8>> {
        self.divider_background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use par_shot_render::ChangeType;

    #[test]
    fn test_changes_computed_from_text() {
        let viewer = TextDiffViewer::new(TextView::new("a\nb"), TextView::new("a\nb\nc"));
        let changes = viewer.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Inserted);
        assert_eq!(viewer.divider_width(), DEFAULT_DIVIDER_WIDTH);
    }

    #[test]
    fn test_builders_override_defaults() {
        let viewer = TextDiffViewer::new(TextView::new("a"), TextView::new("a"))
            .with_divider_width(0)
            .with_align_changes(true)
            .with_folding_separators(vec![SeparatorMarker {
                left_line: 0,
                right_line: 0,
            }]);
        assert!(viewer.changes().is_empty());
        assert!(viewer.align_changes());
        assert_eq!(viewer.divider_width(), 0);
        assert_eq!(viewer.folding_separators().len(), 1);
    }
}
