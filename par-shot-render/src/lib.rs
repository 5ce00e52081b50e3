//! CPU raster compositor for the par-shot code screenshot engine.
//!
//! This crate provides the pixel side of a capture:
//!
//! - [`Canvas`]: a `tiny_skia` pixmap with clip and translation state
//! - [`VisualRegion`] / [`RegionGeometry`]: placed, paintable areas
//! - [`Compositor`]: paints ordered regions into one raster
//! - [`merge_horizontal`]: joins rasters side by side over a background
//! - [`paint_divider`]: the diff divider strip with change bands

pub mod canvas;
pub mod compositor;
pub mod divider;
pub mod error;
pub mod region;

// Re-export main public types
pub use canvas::{Canvas, IRect};
pub use compositor::{Compositor, merge_horizontal};
pub use divider::{
    ChangeType, DiffChangeSpan, DiffPalette, DividerRequest, LineLocator, SeparatorMarker, opaque,
    paint_divider,
};
pub use error::RenderError;
pub use region::{Paintable, RegionGeometry, VisualRegion};

// Re-export the raster types so hosts need not name `image` directly
pub use image::{Rgba, RgbaImage};
