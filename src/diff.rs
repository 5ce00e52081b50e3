//! Two-pane comparison support: the viewer contract and the forced viewport
//! used to map divider lines against full-size pane captures.

use crate::view::{SourceView, ViewError};
use par_shot_render::{
    DiffChangeSpan, IRect, LineLocator, RenderError, Rgba, SeparatorMarker,
};

/// Which pane of a diff viewer holds focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSide {
    Left,
    Right,
}

/// A side-by-side comparison of two source views.
pub trait DiffViewer {
    fn left(&self) -> &dyn SourceView;

    fn right(&self) -> &dyn SourceView;

    /// Width of the strip between the panes, in pixels
    fn divider_width(&self) -> u32;

    fn changes(&self) -> Vec<DiffChangeSpan>;

    /// Straight bands instead of skewed polygons
    fn align_changes(&self) -> bool;

    fn folding_separators(&self) -> Vec<SeparatorMarker> {
        Vec::new()
    }

    /// Host-preferred divider fill; the configured color is used otherwise
    fn divider_background(&self) -> Option<Rgba<u8>> {
        None
    }

    fn view(&self, side: DiffSide) -> &dyn SourceView {
        match side {
            DiffSide::Left => self.left(),
            DiffSide::Right => self.right(),
        }
    }
}

/// A pane as seen through a viewport scrolled to the top and sized to the
/// whole capture, so every captured line maps to its document position.
pub struct ForcedViewport<'a> {
    view: &'a dyn SourceView,
    visible_area: IRect,
}

impl<'a> ForcedViewport<'a> {
    pub fn new(view: &'a dyn SourceView, width: u32, height: u32) -> Self {
        Self {
            view,
            visible_area: IRect::new(0, 0, width as i32, height as i32),
        }
    }

    pub fn vertical_scroll_offset(&self) -> i32 {
        0
    }

    fn document_y(&self, line: usize) -> Result<i32, ViewError> {
        let line_height = self.view.line_height();
        let count = self.view.line_count();
        if count == 0 {
            return Ok(line as i32 * line_height);
        }
        let last = count - 1;
        let anchor = line.min(last);
        let start = self.view.line_start_offset(anchor)?;
        let y = self.view.offset_to_point(start)?.y;
        Ok(y + (line - anchor) as i32 * line_height)
    }
}

impl LineLocator for ForcedViewport<'_> {
    fn line_to_y(&self, line: usize) -> Result<i32, RenderError> {
        self.document_y(line)
            .map(|y| y - self.vertical_scroll_offset())
            .map_err(|e| RenderError::LineLookup {
                line,
                details: e.to_string(),
            })
    }

    fn line_height(&self) -> i32 {
        self.view.line_height()
    }

    fn visible_range(&self) -> (i32, i32) {
        (self.visible_area.y, self.visible_area.bottom())
    }
}
