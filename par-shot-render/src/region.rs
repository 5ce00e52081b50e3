//! Visual regions: a placed geometry plus the capability that paints it.

use crate::canvas::{Canvas, IRect};
use crate::error::RenderError;

/// Something that can draw itself onto a canvas in its own coordinates.
///
/// The compositor has already applied the clip and translation when
/// `paint` is called.
pub trait Paintable {
    fn paint(&self, canvas: &mut Canvas) -> Result<(), RenderError>;
}

/// Placement of one capturable area inside the destination raster.
///
/// `x`/`y`/`width`/`height` is the destination clip rectangle. `translate_x`
/// and `translate_y` are the absolute offsets applied to the paint source,
/// so content at source `(0, 0)` lands at `(translate_x, translate_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub translate_x: i32,
    pub translate_y: i32,
    pub visible: bool,
}

impl RegionGeometry {
    /// A visible region at the origin with no translation
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            visible: true,
            ..Self::default()
        }
    }

    /// An invisible region; reports zero size
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn clip_rect(&self) -> IRect {
        IRect::new(self.x, self.y, self.width, self.height)
    }

    /// Width and height as the compositor counts them (zero when invisible)
    pub fn extent(&self) -> (u32, u32) {
        if self.visible {
            (self.width.max(0) as u32, self.height.max(0) as u32)
        } else {
            (0, 0)
        }
    }

    /// Force the size invariants: non-negative sizes, zero when hidden
    pub fn normalized(mut self) -> Self {
        self.width = self.width.max(0);
        self.height = self.height.max(0);
        if !self.visible {
            self.width = 0;
            self.height = 0;
        }
        self
    }
}

/// A geometry bound to the source that paints it.
#[derive(Clone, Copy)]
pub struct VisualRegion<'a> {
    pub name: &'static str,
    pub geometry: RegionGeometry,
    pub source: &'a dyn Paintable,
}

impl<'a> VisualRegion<'a> {
    pub fn new(name: &'static str, geometry: RegionGeometry, source: &'a dyn Paintable) -> Self {
        Self {
            name,
            geometry: geometry.normalized(),
            source,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.geometry.visible
    }
}

impl std::fmt::Debug for VisualRegion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualRegion")
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}
