//! Shared integration test helpers for par-shot.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{FailingView, quiet_config};
//! ```
//!
//! The `#![allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use par_shot::host::TextView;
use par_shot::render::{Canvas, Paintable, RenderError, Rgba, RgbaImage};
use par_shot::{CaretToggle, Config, GutterView, Point, SelectionSpan, SourceView, ViewError};
use std::cell::Cell;
use tempfile::TempDir;

/// Default cell size of the reference host
pub const CELL: i32 = 8;
pub const LINE: i32 = 16;

/// A config that neither copies nor saves
pub fn quiet_config() -> Config {
    Config::default().with_clipboard(false).with_save(false)
}

/// A config that saves into a fresh temp directory
pub fn saving_config() -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::default()
        .with_clipboard(false)
        .with_save(true)
        .with_output_dir(temp_dir.path().display().to_string());
    (config, temp_dir)
}

/// Five lines with mixed indentation
pub const SAMPLE: &str = "fn main() {\n    let a = 1;\n\n        let b = 2;\n}";

/// Pixel color at `(x, y)`
pub fn pixel(image: &RgbaImage, x: u32, y: u32) -> Rgba<u8> {
    *image.get_pixel(x, y)
}

/// Count pixels of `color` in the whole image
pub fn count_color(image: &RgbaImage, color: Rgba<u8>) -> usize {
    image.pixels().filter(|p| **p == color).count()
}

struct FailingPaint;

impl Paintable for FailingPaint {
    fn paint(&self, _canvas: &mut Canvas) -> Result<(), RenderError> {
        Err(RenderError::paint("content", "host paint exploded"))
    }
}

/// Wraps a [`TextView`] and injects failures.
///
/// Everything is delegated except the failure points that are switched on.
pub struct FailingView {
    pub inner: TextView,
    pub fail_paint: bool,
    pub fail_metrics: bool,
    /// `set_selection` calls seen, restoring ones included
    pub set_selection_calls: Cell<usize>,
    failing: FailingPaint,
}

impl FailingView {
    pub fn new(inner: TextView) -> Self {
        Self {
            inner,
            fail_paint: false,
            fail_metrics: false,
            set_selection_calls: Cell::new(0),
            failing: FailingPaint,
        }
    }

    pub fn failing_paint(mut self) -> Self {
        self.fail_paint = true;
        self
    }

    pub fn failing_metrics(mut self) -> Self {
        self.fail_metrics = true;
        self
    }
}

impl SourceView for FailingView {
    fn line_count(&self) -> usize {
        self.inner.line_count()
    }

    fn text_len(&self) -> usize {
        self.inner.text_len()
    }

    fn line_start_offset(&self, line: usize) -> Result<usize, ViewError> {
        self.inner.line_start_offset(line)
    }

    fn line_end_offset(&self, line: usize) -> Result<usize, ViewError> {
        self.inner.line_end_offset(line)
    }

    fn line_number(&self, offset: usize) -> Result<usize, ViewError> {
        self.inner.line_number(offset)
    }

    fn line_text(&self, line: usize) -> Result<String, ViewError> {
        self.inner.line_text(line)
    }

    fn offset_to_point(&self, offset: usize) -> Result<Point, ViewError> {
        if self.fail_metrics {
            return Err(ViewError::Host("layout not ready".to_string()));
        }
        self.inner.offset_to_point(offset)
    }

    fn line_height(&self) -> i32 {
        self.inner.line_height()
    }

    fn plain_string_width(&self, text: &str) -> i32 {
        self.inner.plain_string_width(text)
    }

    fn tab_size(&self) -> Option<usize> {
        self.inner.tab_size()
    }

    fn after_line_end_inlay_widths(&self, line: usize) -> Vec<i32> {
        self.inner.after_line_end_inlay_widths(line)
    }

    fn content_preferred_width(&self) -> i32 {
        self.inner.content_preferred_width()
    }

    fn content(&self) -> &dyn Paintable {
        if self.fail_paint {
            &self.failing
        } else {
            self.inner.content()
        }
    }

    fn content_screen_x(&self) -> i32 {
        self.inner.content_screen_x()
    }

    fn gutter(&self) -> Option<&dyn GutterView> {
        self.inner.gutter()
    }

    fn selection(&self) -> Option<SelectionSpan> {
        self.inner.selection()
    }

    fn set_selection(&self, span: SelectionSpan) -> Result<(), ViewError> {
        self.set_selection_calls.set(self.set_selection_calls.get() + 1);
        self.inner.set_selection(span)
    }

    fn remove_selection(&self) -> Result<(), ViewError> {
        self.inner.remove_selection()
    }

    fn caret_toggle(&self) -> Option<&dyn CaretToggle> {
        self.inner.caret_toggle()
    }

    fn caret_model_toggle(&self) -> Option<&dyn CaretToggle> {
        self.inner.caret_model_toggle()
    }

    fn background(&self) -> Rgba<u8> {
        self.inner.background()
    }

    fn file_name(&self) -> Option<String> {
        self.inner.file_name()
    }
}
