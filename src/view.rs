//! Host-facing traits: what the engine needs to know about a source view.
//!
//! All methods take `&self`. Hosts keep selection and caret state behind
//! interior mutability so the engine can clear and restore them while it
//! holds shared borrows of the view.

use par_shot_render::{Paintable, Rgba};
use thiserror::Error;

/// Pixel position in document space (scroll independent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A text selection as character offsets, `start_offset <= end_offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start_offset: usize,
    pub end_offset: usize,
}

impl SelectionSpan {
    /// Build a span, swapping the bounds if given in reverse
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start_offset: start.min(end),
            end_offset: start.max(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }
}

/// Failures reported by host view queries
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Offset {offset} is outside the document (length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Line {line} is outside the document ({count} lines)")]
    LineOutOfRange { line: usize, count: usize },

    #[error("Operation not supported by this view: {0}")]
    Unsupported(&'static str),

    #[error("Host view error: {0}")]
    Host(String),
}

/// Switch for caret rendering, at view or caret-model level.
pub trait CaretToggle {
    /// Current visibility; `None` when the host cannot report it
    fn caret_visible(&self) -> Option<bool>;

    fn set_caret_visible(&self, visible: bool) -> Result<(), ViewError>;
}

/// The line-number/marker strip next to a source view.
pub trait GutterView {
    fn preferred_width(&self) -> i32;

    /// Horizontal on-screen position, used to tell which side it is on
    fn screen_x(&self) -> i32;

    fn paintable(&self) -> &dyn Paintable;
}

/// A live text-editing surface that can be captured.
///
/// Offsets are character offsets into the document. Lines are zero based and
/// exclude their terminating newline.
pub trait SourceView {
    // --- Document ---------------------------------------------------------

    fn line_count(&self) -> usize;

    /// Document length in characters
    fn text_len(&self) -> usize;

    fn line_start_offset(&self, line: usize) -> Result<usize, ViewError>;

    fn line_end_offset(&self, line: usize) -> Result<usize, ViewError>;

    /// Line containing `offset`; the document end belongs to the last line
    fn line_number(&self, offset: usize) -> Result<usize, ViewError>;

    fn line_text(&self, line: usize) -> Result<String, ViewError>;

    // --- Layout -----------------------------------------------------------

    /// Top-left of the visual row holding `offset`, in document space
    fn offset_to_point(&self, offset: usize) -> Result<Point, ViewError>;

    fn line_height(&self) -> i32;

    /// Width of `text` in the plain editor font
    fn plain_string_width(&self, text: &str) -> i32;

    /// Configured tab size, if the host exposes one
    fn tab_size(&self) -> Option<usize>;

    /// Widths of inline decorations drawn after the end of `line`
    fn after_line_end_inlay_widths(&self, line: usize) -> Vec<i32>;

    fn content_preferred_width(&self) -> i32;

    fn content(&self) -> &dyn Paintable;

    fn content_screen_x(&self) -> i32;

    fn gutter(&self) -> Option<&dyn GutterView>;

    // --- Transient state --------------------------------------------------

    fn selection(&self) -> Option<SelectionSpan>;

    fn set_selection(&self, span: SelectionSpan) -> Result<(), ViewError>;

    fn remove_selection(&self) -> Result<(), ViewError>;

    /// View-level caret switch
    fn caret_toggle(&self) -> Option<&dyn CaretToggle> {
        None
    }

    /// Caret-model-level switch, probed when the view has none
    fn caret_model_toggle(&self) -> Option<&dyn CaretToggle> {
        None
    }

    // --- Presentation -----------------------------------------------------

    fn background(&self) -> Rgba<u8>;

    fn file_name(&self) -> Option<String> {
        None
    }
}
