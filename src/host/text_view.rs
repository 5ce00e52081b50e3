//! In-memory monospace source view.

use super::gutter::{GutterRow, TextGutter};
use super::layout::{CellMetrics, GridPos, LineLayout, layout_line, text_columns};
use crate::geometry::GutterSide;
use crate::view::{CaretToggle, GutterView, Point, SelectionSpan, SourceView, ViewError};
use par_shot_render::{Canvas, IRect, Paintable, RenderError, Rgba};
use std::cell::Cell;
use std::collections::HashMap;

/// Colors used when painting a [`TextView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTheme {
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    pub selection: Rgba<u8>,
    pub caret: Rgba<u8>,
    pub inlay: Rgba<u8>,
    pub gutter_background: Rgba<u8>,
    pub gutter_foreground: Rgba<u8>,
}

impl Default for TextTheme {
    fn default() -> Self {
        Self {
            background: Rgba([30, 30, 30, 255]),
            foreground: Rgba([212, 212, 212, 255]),
            selection: Rgba([38, 79, 120, 255]),
            caret: Rgba([255, 255, 255, 255]),
            inlay: Rgba([90, 90, 90, 255]),
            gutter_background: Rgba([37, 37, 38, 255]),
            gutter_foreground: Rgba([133, 133, 133, 255]),
        }
    }
}

/// Which caret switch the view exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretAccess {
    /// Toggle on the view itself
    View,
    /// Toggle on the caret model only
    Model,
    /// No caret switch at all
    None,
}

/// Caret visibility switch with interior mutability
#[derive(Debug)]
pub struct CaretState {
    visible: Cell<bool>,
    readable: bool,
}

impl CaretState {
    fn new() -> Self {
        Self {
            visible: Cell::new(true),
            readable: true,
        }
    }

    /// Current state regardless of whether the host reports it
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl CaretToggle for CaretState {
    fn caret_visible(&self) -> Option<bool> {
        self.readable.then(|| self.visible.get())
    }

    fn set_caret_visible(&self, visible: bool) -> Result<(), ViewError> {
        self.visible.set(visible);
        Ok(())
    }
}

/// A monospace text view holding its whole document in memory.
///
/// Glyphs are painted as solid blocks, one per grapheme, which keeps the
/// raster deterministic without a font stack.
pub struct TextView {
    lines: Vec<String>,
    line_starts: Vec<usize>,
    text_len: usize,
    layouts: Vec<LineLayout>,
    metrics: CellMetrics,
    tab_size: Option<usize>,
    layout_tab_size: usize,
    wrap_columns: Option<usize>,
    inlays: HashMap<usize, Vec<i32>>,
    theme: TextTheme,
    file_name: Option<String>,
    gutter: Option<TextGutter>,
    gutter_side: GutterSide,
    selection: Cell<Option<SelectionSpan>>,
    caret_offset: Cell<usize>,
    caret: CaretState,
    caret_access: CaretAccess,
}

impl TextView {
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let mut line_starts = Vec::with_capacity(lines.len());
        let mut offset = 0usize;
        for line in &lines {
            line_starts.push(offset);
            offset += line.chars().count() + 1;
        }
        let text_len = offset.saturating_sub(1);

        let mut view = Self {
            lines,
            line_starts,
            text_len,
            layouts: Vec::new(),
            metrics: CellMetrics::default(),
            tab_size: Some(4),
            layout_tab_size: 4,
            wrap_columns: None,
            inlays: HashMap::new(),
            theme: TextTheme::default(),
            file_name: None,
            gutter: None,
            gutter_side: GutterSide::Left,
            selection: Cell::new(None),
            caret_offset: Cell::new(0),
            caret: CaretState::new(),
            caret_access: CaretAccess::View,
        };
        view.relayout();
        view
    }

    pub fn with_metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self.relayout();
        self
    }

    /// `None` makes the view report no tab size; layout then uses 4
    pub fn with_tab_size(mut self, tab_size: Option<usize>) -> Self {
        self.tab_size = tab_size;
        self.layout_tab_size = tab_size.filter(|t| *t > 0).unwrap_or(4);
        self.relayout();
        self
    }

    pub fn with_wrap(mut self, columns: Option<usize>) -> Self {
        self.wrap_columns = columns.filter(|c| *c > 0);
        self.relayout();
        self
    }

    pub fn with_inlay(mut self, line: usize, width: i32) -> Self {
        self.inlays.entry(line).or_default().push(width);
        self.relayout();
        self
    }

    pub fn with_theme(mut self, theme: TextTheme) -> Self {
        self.theme = theme;
        self.relayout();
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_gutter(mut self, side: GutterSide) -> Self {
        self.gutter_side = side;
        self.gutter = Some(TextGutter::new(self.metrics, self.theme));
        self.relayout();
        self
    }

    pub fn with_caret_access(mut self, access: CaretAccess) -> Self {
        self.caret_access = access;
        self
    }

    /// Make the caret switch unable to report its state
    pub fn with_unreadable_caret(mut self) -> Self {
        self.caret.readable = false;
        self
    }

    pub fn with_selection(self, start: usize, end: usize) -> Self {
        self.selection.set(Some(SelectionSpan::new(
            start.min(self.text_len),
            end.min(self.text_len),
        )));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn theme(&self) -> &TextTheme {
        &self.theme
    }

    /// Current caret visibility as painted
    pub fn caret_is_visible(&self) -> bool {
        self.caret.is_visible()
    }

    pub fn set_caret_offset(&self, offset: usize) {
        self.caret_offset.set(offset.min(self.text_len));
    }

    /// Total visual rows after wrapping
    pub fn visual_rows(&self) -> usize {
        self.layouts
            .last()
            .map_or(1, |l| l.first_row + l.row_count)
    }

    fn relayout(&mut self) {
        let mut row = 0usize;
        self.layouts = self
            .lines
            .iter()
            .map(|line| {
                let layout = layout_line(line, row, self.layout_tab_size, self.wrap_columns);
                row += layout.row_count;
                layout
            })
            .collect();

        let rows: Vec<GutterRow> = self
            .layouts
            .iter()
            .enumerate()
            .map(|(line, layout)| GutterRow {
                line_number: line + 1,
                y: self.row_y(layout.first_row),
            })
            .collect();
        let content_width = self.content_preferred_width();
        let side = self.gutter_side;
        let metrics = self.metrics;
        let theme = self.theme;
        if let Some(gutter) = self.gutter.as_mut() {
            gutter.update(metrics, theme, rows);
            gutter.set_screen_x(match side {
                GutterSide::Left => 0,
                GutterSide::Right => content_width,
            });
        }
    }

    fn row_y(&self, row: usize) -> i32 {
        row as i32 * self.metrics.line_height
    }

    fn grid_point(&self, pos: GridPos) -> Point {
        Point::new(
            pos.column as i32 * self.metrics.cell_width,
            self.row_y(pos.row),
        )
    }

    fn check_line(&self, line: usize) -> Result<(), ViewError> {
        if line < self.lines.len() {
            Ok(())
        } else {
            Err(ViewError::LineOutOfRange {
                line,
                count: self.lines.len(),
            })
        }
    }

    fn check_offset(&self, offset: usize) -> Result<(), ViewError> {
        if offset <= self.text_len {
            Ok(())
        } else {
            Err(ViewError::OffsetOutOfRange {
                offset,
                len: self.text_len,
            })
        }
    }

    fn max_inlay(&self, line: usize) -> i32 {
        self.inlays
            .get(&line)
            .and_then(|w| w.iter().copied().max())
            .unwrap_or(0)
    }

    fn paint_selection(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        let Some(span) = self.selection.get() else {
            return Ok(());
        };
        let cell = self.metrics.cell_width;
        for offset in span.start_offset..span.end_offset {
            let point = self
                .offset_to_point(offset)
                .map_err(|e| RenderError::paint("content", e))?;
            canvas.fill_rect(
                IRect::new(point.x, point.y, cell, self.metrics.line_height),
                self.theme.selection,
            );
        }
        Ok(())
    }

    fn paint_glyphs(&self, canvas: &mut Canvas) {
        let CellMetrics {
            cell_width,
            line_height,
        } = self.metrics;
        let (inset_x, inset_y) = if cell_width > 2 && line_height > 4 {
            (1, 2)
        } else {
            (0, 0)
        };

        let visible = canvas.user_clip();
        for (line, layout) in self.layouts.iter().enumerate() {
            // Lines outside the clip cannot reach the raster
            let top = self.row_y(layout.first_row);
            let bottom = self.row_y(layout.first_row + layout.row_count.max(1));
            if visible.is_none_or(|clip| bottom <= clip.y || top >= clip.bottom()) {
                continue;
            }
            for glyph in layout.glyphs.iter().filter(|g| !g.blank) {
                let point = self.grid_point(glyph.pos);
                canvas.fill_rect(
                    IRect::new(
                        point.x + inset_x,
                        point.y + inset_y,
                        glyph.columns as i32 * cell_width - 2 * inset_x,
                        line_height - 2 * inset_y,
                    ),
                    self.theme.foreground,
                );
            }

            let end = self.grid_point(layout.end());
            let mut x = end.x;
            for width in self.inlays.get(&line).into_iter().flatten() {
                canvas.fill_rect(
                    IRect::new(x, end.y + inset_y, *width, line_height - 2 * inset_y),
                    self.theme.inlay,
                );
                x += width;
            }
        }
    }

    fn paint_caret(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        if !self.caret.is_visible() {
            return Ok(());
        }
        let point = self
            .offset_to_point(self.caret_offset.get())
            .map_err(|e| RenderError::paint("caret", e))?;
        canvas.fill_rect(
            IRect::new(point.x, point.y, 2, self.metrics.line_height),
            self.theme.caret,
        );
        Ok(())
    }
}

impl Paintable for TextView {
    fn paint(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        crate::debug_trace!("HOST", "Painting {} lines", self.lines.len());
        canvas.fill(self.theme.background);
        self.paint_selection(canvas)?;
        self.paint_glyphs(canvas);
        self.paint_caret(canvas)
    }
}

impl SourceView for TextView {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn text_len(&self) -> usize {
        self.text_len
    }

    fn line_start_offset(&self, line: usize) -> Result<usize, ViewError> {
        self.check_line(line)?;
        Ok(self.line_starts[line])
    }

    fn line_end_offset(&self, line: usize) -> Result<usize, ViewError> {
        self.check_line(line)?;
        Ok(self.line_starts[line] + self.lines[line].chars().count())
    }

    fn line_number(&self, offset: usize) -> Result<usize, ViewError> {
        self.check_offset(offset)?;
        Ok(self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1))
    }

    fn line_text(&self, line: usize) -> Result<String, ViewError> {
        self.check_line(line)?;
        Ok(self.lines[line].clone())
    }

    fn offset_to_point(&self, offset: usize) -> Result<Point, ViewError> {
        let line = self.line_number(offset)?;
        let column_index = offset - self.line_starts[line];
        let pos = self.layouts[line]
            .positions
            .get(column_index)
            .copied()
            .ok_or(ViewError::OffsetOutOfRange {
                offset,
                len: self.text_len,
            })?;
        Ok(self.grid_point(pos))
    }

    fn line_height(&self) -> i32 {
        self.metrics.line_height
    }

    fn plain_string_width(&self, text: &str) -> i32 {
        text_columns(text, self.layout_tab_size) as i32 * self.metrics.cell_width
    }

    fn tab_size(&self) -> Option<usize> {
        self.tab_size
    }

    fn after_line_end_inlay_widths(&self, line: usize) -> Vec<i32> {
        self.inlays.get(&line).cloned().unwrap_or_default()
    }

    fn content_preferred_width(&self) -> i32 {
        let widest = self
            .layouts
            .iter()
            .enumerate()
            .map(|(line, layout)| self.grid_point(layout.end()).x + self.max_inlay(line))
            .max()
            .unwrap_or(0);
        // One spare cell so a caret at the longest line end stays visible
        widest + self.metrics.cell_width
    }

    fn content(&self) -> &dyn Paintable {
        self
    }

    fn content_screen_x(&self) -> i32 {
        match (&self.gutter, self.gutter_side) {
            (Some(gutter), GutterSide::Left) => gutter.preferred_width(),
            _ => 0,
        }
    }

    fn gutter(&self) -> Option<&dyn GutterView> {
        self.gutter.as_ref().map(|g| g as &dyn GutterView)
    }

    fn selection(&self) -> Option<SelectionSpan> {
        self.selection.get()
    }

    fn set_selection(&self, span: SelectionSpan) -> Result<(), ViewError> {
        self.check_offset(span.end_offset)?;
        self.selection.set(Some(span));
        Ok(())
    }

    fn remove_selection(&self) -> Result<(), ViewError> {
        self.selection.set(None);
        Ok(())
    }

    fn caret_toggle(&self) -> Option<&dyn CaretToggle> {
        (self.caret_access == CaretAccess::View).then_some(&self.caret as &dyn CaretToggle)
    }

    fn caret_model_toggle(&self) -> Option<&dyn CaretToggle> {
        (self.caret_access == CaretAccess::Model).then_some(&self.caret as &dyn CaretToggle)
    }

    fn background(&self) -> Rgba<u8> {
        self.theme.background
    }

    fn file_name(&self) -> Option<String> {
        self.file_name.clone()
    }
}
