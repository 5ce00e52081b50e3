//! Diff divider strip: the gap between two panes with change bands and
//! folding separators.

use crate::canvas::{Canvas, IRect};
use crate::error::RenderError;
use image::{Rgba, RgbaImage};
use par_shot_config::DiffColors;

/// Kind of change a span represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Inserted,
    Deleted,
    Modified,
    Conflict,
}

/// A changed block: line ranges on both sides, end lines exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffChangeSpan {
    pub start_line_left: usize,
    pub end_line_left: usize,
    pub start_line_right: usize,
    pub end_line_right: usize,
    pub change_type: ChangeType,
    /// Change the user chose to leave out of the merge result
    pub excluded: bool,
    /// Change already applied or ignored
    pub skipped: bool,
}

impl DiffChangeSpan {
    pub fn new(left: (usize, usize), right: (usize, usize), change_type: ChangeType) -> Self {
        Self {
            start_line_left: left.0,
            end_line_left: left.1,
            start_line_right: right.0,
            end_line_right: right.1,
            change_type,
            excluded: false,
            skipped: false,
        }
    }

    /// Drawn as an outline instead of a filled band when not aligned
    pub fn is_dimmed(&self) -> bool {
        self.excluded || self.skipped
    }
}

/// Folded region marker pairing a left line with a right line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorMarker {
    pub left_line: usize,
    pub right_line: usize,
}

/// Maps document lines of one pane to vertical pixel positions.
pub trait LineLocator {
    /// Top y of `line`. Lines past the end extrapolate by `line_height`.
    fn line_to_y(&self, line: usize) -> Result<i32, RenderError>;

    fn line_height(&self) -> i32;

    /// Vertical pixel range `[top, bottom)` considered visible
    fn visible_range(&self) -> (i32, i32);
}

/// Resolved divider colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffPalette {
    pub inserted: Rgba<u8>,
    pub deleted: Rgba<u8>,
    pub modified: Rgba<u8>,
    pub conflict: Rgba<u8>,
    pub separator: Rgba<u8>,
}

impl DiffPalette {
    pub fn color_for(&self, change_type: ChangeType) -> Rgba<u8> {
        match change_type {
            ChangeType::Inserted => self.inserted,
            ChangeType::Deleted => self.deleted,
            ChangeType::Modified => self.modified,
            ChangeType::Conflict => self.conflict,
        }
    }
}

impl From<&DiffColors> for DiffPalette {
    fn from(colors: &DiffColors) -> Self {
        Self {
            inserted: opaque(colors.inserted),
            deleted: opaque(colors.deleted),
            modified: opaque(colors.modified),
            conflict: opaque(colors.conflict),
            separator: opaque(colors.separator),
        }
    }
}

impl Default for DiffPalette {
    fn default() -> Self {
        Self::from(&DiffColors::default())
    }
}

/// Convert a config `[r, g, b]` triple to an opaque pixel
pub fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

/// Everything needed to paint one divider raster
pub struct DividerRequest<'a> {
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    pub palette: DiffPalette,
    pub changes: &'a [DiffChangeSpan],
    pub separators: &'a [SeparatorMarker],
    pub align_changes: bool,
    /// When false the divider is a plain background strip
    pub overlay: bool,
    pub left: &'a dyn LineLocator,
    pub right: &'a dyn LineLocator,
}

/// Paint the divider strip between two panes.
pub fn paint_divider(request: &DividerRequest<'_>) -> Result<RgbaImage, RenderError> {
    let mut canvas = Canvas::new(request.width, request.height)?;
    canvas.fill(request.background);

    if !request.overlay {
        return Ok(canvas.into_image());
    }

    let width = request.width as i32;
    let mut painted = 0usize;
    for change in request.changes {
        let left = band_edge(request.left, change.start_line_left, change.end_line_left)?;
        let right = band_edge(request.right, change.start_line_right, change.end_line_right)?;

        if !edge_visible(request.left, left) && !edge_visible(request.right, right) {
            log::trace!("Divider: skipping {:?} outside the capture area", change);
            continue;
        }

        let color = request.palette.color_for(change.change_type);
        if request.align_changes {
            let top = left.0.min(right.0);
            let bottom = left.1.max(right.1).max(top + 1);
            canvas.fill_rect(IRect::new(0, top, width, bottom - top), color);
        } else if change.is_dimmed() {
            let dimmed = dim(color, request.background);
            canvas.stroke_polygon(&outline(width, left, right), dimmed);
        } else if left.0 == left.1 && right.0 == right.1 {
            canvas.stroke_line(row_center(0, left.0), row_center(width - 1, right.0), color);
        } else {
            let w = width as f32;
            let polygon = [
                (0.0, left.0 as f32),
                (w, right.0 as f32),
                (w, right.1 as f32),
                (0.0, left.1 as f32),
            ];
            canvas.fill_polygon(&polygon, color);
        }
        painted += 1;
    }

    for separator in request.separators {
        let left_y = request.left.line_to_y(separator.left_line)?;
        let right_y = request.right.line_to_y(separator.right_line)?;
        canvas.stroke_line(
            row_center(0, left_y),
            row_center(width - 1, right_y),
            request.palette.separator,
        );
    }

    log::debug!(
        "Divider {}x{}: {} band(s), {} separator(s)",
        request.width,
        request.height,
        painted,
        request.separators.len()
    );
    Ok(canvas.into_image())
}

/// Pixel rows `[top, bottom)` covered by a line range on one side
fn band_edge(
    locator: &dyn LineLocator,
    start_line: usize,
    end_line: usize,
) -> Result<(i32, i32), RenderError> {
    let top = locator.line_to_y(start_line)?;
    let bottom = locator.line_to_y(end_line.max(start_line))?;
    Ok((top, bottom))
}

fn edge_visible(locator: &dyn LineLocator, (top, bottom): (i32, i32)) -> bool {
    let (visible_top, visible_bottom) = locator.visible_range();
    // Empty ranges still mark a position between two lines
    let bottom = bottom.max(top + 1);
    top < visible_bottom && bottom > visible_top
}

/// Center of pixel `(x, y)`
fn row_center(x: i32, y: i32) -> (f32, f32) {
    (x as f32 + 0.5, y as f32 + 0.5)
}

/// Band outline through the centers of its edge pixels, so the one-pixel
/// stroke stays inside the area the filled band would cover
fn outline(width: i32, left: (i32, i32), right: (i32, i32)) -> [(f32, f32); 4] {
    [
        row_center(0, left.0),
        row_center(width - 1, right.0),
        row_center(width - 1, (right.1 - 1).max(right.0)),
        row_center(0, (left.1 - 1).max(left.0)),
    ]
}

/// Halfway blend between a band color and the background
fn dim(color: Rgba<u8>, background: Rgba<u8>) -> Rgba<u8> {
    let mix = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
    Rgba([
        mix(color[0], background[0]),
        mix(color[1], background[1]),
        mix(color[2], background[2]),
        255,
    ])
}
