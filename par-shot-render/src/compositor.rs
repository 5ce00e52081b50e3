//! Paints ordered visual regions into one raster and merges rasters side by side.
//!
//! Both run on a [`Canvas`]; finished rasters leave as `image::RgbaImage`
//! for PNG encoding and the clipboard.

use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::region::VisualRegion;
use image::{Rgba, RgbaImage};

/// Composes visual regions into a single raster.
///
/// Each visible region is painted under its own clip and translation.
/// Paint failures propagate unchanged to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    background: Option<Rgba<u8>>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the raster before any region paints
    pub fn with_background(mut self, background: Rgba<u8>) -> Self {
        self.background = Some(background);
        self
    }

    /// Destination size: sum of visible widths by max of visible heights
    pub fn raster_size(regions: &[VisualRegion<'_>]) -> (u32, u32) {
        regions
            .iter()
            .map(|r| r.geometry.extent())
            .fold((0u32, 0u32), |(w, h), (rw, rh)| {
                (w.saturating_add(rw), h.max(rh))
            })
    }

    pub fn paint(&self, regions: &[VisualRegion<'_>]) -> Result<RgbaImage, RenderError> {
        let (width, height) = Self::raster_size(regions);
        log::debug!(
            "Compositing {} region(s) into {}x{} raster",
            regions.len(),
            width,
            height
        );
        let mut canvas = Canvas::new(width, height)?;

        if let Some(background) = self.background {
            canvas.fill(background);
        }

        for region in regions.iter().filter(|r| r.is_visible()) {
            let g = region.geometry;
            log::trace!(
                "Painting {} at ({}, {}) size {}x{} translate ({}, {})",
                region.name,
                g.x,
                g.y,
                g.width,
                g.height,
                g.translate_x,
                g.translate_y
            );
            canvas.set_clip(g.clip_rect());
            canvas.set_translation(g.translate_x, g.translate_y);
            let result = region.source.paint(&mut canvas);
            canvas.reset_transform();
            result?;
        }

        Ok(canvas.into_image())
    }
}

/// Merge rasters left to right, top aligned, over a background fill.
pub fn merge_horizontal(
    background: Rgba<u8>,
    rasters: &[&RgbaImage],
) -> Result<RgbaImage, RenderError> {
    let width = rasters
        .iter()
        .fold(0u64, |acc, r| acc + u64::from(r.width()));
    let height = rasters.iter().map(|r| r.height()).max().unwrap_or(0);
    if width > u64::from(u32::MAX) {
        return Err(RenderError::RasterTooLarge {
            width,
            height: u64::from(height),
        });
    }
    let width = width as u32;
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyRaster { width, height });
    }

    let mut canvas = Canvas::new(width, height)?;
    canvas.fill(background);
    let mut x = 0i32;
    for raster in rasters {
        canvas.blit(raster, x, 0)?;
        x = x.saturating_add(raster.width() as i32);
    }
    Ok(canvas.into_image())
}
