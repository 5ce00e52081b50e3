//! Line-number gutter for [`TextView`](super::TextView).

use super::layout::CellMetrics;
use super::text_view::TextTheme;
use crate::view::GutterView;
use par_shot_render::{Canvas, IRect, Paintable, RenderError};

/// First visual row of a document line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GutterRow {
    /// One based
    pub line_number: usize,
    pub y: i32,
}

/// Line-number strip painted as digit blocks
#[derive(Debug, Clone)]
pub struct TextGutter {
    metrics: CellMetrics,
    theme: TextTheme,
    rows: Vec<GutterRow>,
    screen_x: i32,
}

impl TextGutter {
    pub(crate) fn new(metrics: CellMetrics, theme: TextTheme) -> Self {
        Self {
            metrics,
            theme,
            rows: Vec::new(),
            screen_x: 0,
        }
    }

    pub(crate) fn update(&mut self, metrics: CellMetrics, theme: TextTheme, rows: Vec<GutterRow>) {
        self.metrics = metrics;
        self.theme = theme;
        self.rows = rows;
    }

    pub(crate) fn set_screen_x(&mut self, x: i32) {
        self.screen_x = x;
    }

    pub fn rows(&self) -> &[GutterRow] {
        &self.rows
    }

    fn digits(&self) -> usize {
        self.rows
            .last()
            .map_or(1, |row| row.line_number.to_string().len())
    }
}

impl GutterView for TextGutter {
    /// Digits plus one cell of margin on each side
    fn preferred_width(&self) -> i32 {
        (self.digits() as i32 + 2) * self.metrics.cell_width
    }

    fn screen_x(&self) -> i32 {
        self.screen_x
    }

    fn paintable(&self) -> &dyn Paintable {
        self
    }
}

impl Paintable for TextGutter {
    fn paint(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        let CellMetrics {
            cell_width,
            line_height,
        } = self.metrics;
        canvas.fill_rect(
            IRect::new(
                0,
                0,
                self.preferred_width(),
                self.rows.last().map_or(line_height, |r| r.y + line_height),
            ),
            self.theme.gutter_background,
        );

        let digits = self.digits() as i32;
        for row in &self.rows {
            // Right aligned, one cell of margin
            let label = row.line_number.to_string();
            let first = 1 + digits - label.len() as i32;
            for index in 0..label.len() as i32 {
                canvas.fill_rect(
                    IRect::new(
                        (first + index) * cell_width + 1,
                        row.y + 3,
                        cell_width - 2,
                        line_height - 6,
                    ),
                    self.theme.gutter_foreground,
                );
            }
        }
        Ok(())
    }
}
