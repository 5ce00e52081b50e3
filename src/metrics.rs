//! Read-only per-line metric queries against a source view.

use crate::view::{Point, SelectionSpan, SourceView, ViewError};

/// Leading-whitespace width of `text` in columns.
///
/// A space counts one column, any other whitespace counts `tab_size`.
/// Counting stops at the first non-whitespace character.
pub fn indent_columns(text: &str, tab_size: usize) -> usize {
    text.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == ' ' { 1 } else { tab_size })
        .sum()
}

/// Metric probe bound to one view and an effective tab size.
pub struct LineMetricsProbe<'a> {
    view: &'a dyn SourceView,
    tab_size: usize,
}

impl<'a> LineMetricsProbe<'a> {
    /// `fallback_tab_size` is used when the view reports no (or a zero) tab size
    pub fn new(view: &'a dyn SourceView, fallback_tab_size: usize) -> Self {
        let tab_size = view
            .tab_size()
            .filter(|size| *size > 0)
            .unwrap_or(fallback_tab_size.max(1));
        Self { view, tab_size }
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    pub fn line_height(&self) -> i32 {
        self.view.line_height()
    }

    pub fn point(&self, offset: usize) -> Result<Point, ViewError> {
        self.view.offset_to_point(offset)
    }

    /// Top y of the visual row holding the start of the last line
    pub fn last_line_y(&self) -> Result<i32, ViewError> {
        let count = self.view.line_count();
        if count == 0 {
            return Ok(0);
        }
        let start = self.view.line_start_offset(count - 1)?;
        Ok(self.point(start)?.y)
    }

    /// Visual end of `line`, optionally clamped to an earlier offset
    pub fn line_end_point(&self, line: usize, clamp_to: Option<usize>) -> Result<Point, ViewError> {
        let end = self.view.line_end_offset(line)?;
        let end = clamp_to.map_or(end, |limit| end.min(limit));
        self.point(end)
    }

    /// First and last line intersecting `span`
    pub fn line_range(&self, span: SelectionSpan) -> Result<(usize, usize), ViewError> {
        let first = self.view.line_number(span.start_offset)?;
        let last = self.view.line_number(span.end_offset)?;
        Ok((first, last.max(first)))
    }

    pub fn is_empty_line(&self, line: usize) -> Result<bool, ViewError> {
        Ok(self.view.line_start_offset(line)? == self.view.line_end_offset(line)?)
    }

    pub fn line_indent_columns(&self, line: usize) -> Result<usize, ViewError> {
        Ok(indent_columns(&self.view.line_text(line)?, self.tab_size))
    }

    /// Widest trailing inlay on `line`, 0 when there is none
    pub fn max_trailing_inlay_width(&self, line: usize) -> i32 {
        self.view
            .after_line_end_inlay_widths(line)
            .into_iter()
            .max()
            .unwrap_or(0)
            .max(0)
    }

    /// Pixel width of `columns` spaces in the plain font
    pub fn spaces_width(&self, columns: usize) -> i32 {
        if columns == 0 {
            return 0;
        }
        self.view.plain_string_width(&" ".repeat(columns))
    }
}
