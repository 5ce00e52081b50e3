//! Bounding width and shared indentation of a multi-line selection.

use crate::metrics::LineMetricsProbe;
use crate::view::{SelectionSpan, SourceView, ViewError};

/// Horizontal extent of a selection before padding and trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCrop {
    /// Widest visual line end (plus trailing inlays) across covered lines
    pub max_width: i32,
    /// Smallest leading-whitespace column count among sampled rows
    pub minimal_indent_columns: usize,
    /// `minimal_indent_columns` spaces measured in the plain font
    pub minimal_indent_px: i32,
}

impl SelectionCrop {
    /// Walk every line intersecting `span`.
    ///
    /// The last line's segment ends at the selection end. Empty lines are
    /// never sampled for indentation, and a line whose end sits on the same
    /// visual row as the previous sample is coalesced with it.
    /// `tab_size` applies only when the view reports none.
    pub fn compute(
        view: &dyn SourceView,
        span: SelectionSpan,
        tab_size: usize,
    ) -> Result<Self, ViewError> {
        let probe = LineMetricsProbe::new(view, tab_size);
        let (first, last) = probe.line_range(span)?;

        let mut max_width = 0i32;
        let mut last_row_y: Option<i32> = None;
        let mut minimal_indent: Option<usize> = None;

        for line in first..=last {
            let clamp = (line == last).then_some(span.end_offset);
            let end = probe.line_end_point(line, clamp)?;
            let inlay = probe.max_trailing_inlay_width(line);
            max_width = max_width.max(end.x.saturating_add(inlay));

            if last_row_y == Some(end.y) {
                continue;
            }
            last_row_y = Some(end.y);

            if probe.is_empty_line(line)? {
                continue;
            }
            let indent = probe.line_indent_columns(line)?;
            minimal_indent = Some(minimal_indent.map_or(indent, |m| m.min(indent)));
        }

        let minimal_indent_columns = minimal_indent.unwrap_or(0);
        let crop = Self {
            max_width,
            minimal_indent_columns,
            minimal_indent_px: probe.spaces_width(minimal_indent_columns),
        };
        log::debug!(
            "Selection {}..{} over lines {}..={}: {:?}",
            span.start_offset,
            span.end_offset,
            first,
            last,
            crop
        );
        Ok(crop)
    }
}
