//! Drawing surface with a clip rectangle and a translation.
//!
//! Backed by a `tiny_skia::Pixmap`. Paint callbacks draw in their own
//! coordinate space; the canvas applies the current translation as a
//! `Transform` and the clip rectangle as a `Mask`. The clip is kept in
//! device (raster) coordinates and is not affected by later translation
//! changes.
//!
//! Drawing is not anti-aliased: integer rectangles cover exactly their
//! pixels. Rasters leave the canvas as `image::RgbaImage`.

use crate::error::RenderError;
use image::{Rgba, RgbaImage};
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, LineCap, Mask, Paint, Path, PathBuilder, Pixmap,
    PixmapPaint, Rect, Stroke, Transform,
};

/// Integer rectangle. Widths and heights are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Overlapping area of two rectangles, or `None` when they do not overlap
    pub fn intersect(&self, other: &IRect) -> Option<IRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(IRect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }

    fn to_rect(self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Rect::from_xywh(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

/// Device clip: the clip rectangle limited to the raster, plus its mask
struct Clip {
    rect: Option<IRect>,
    mask: Option<Mask>,
}

/// Pixmap plus the clip/translate state used while painting regions.
pub struct Canvas {
    pixmap: Pixmap,
    clip: Option<Clip>,
    transform: Transform,
}

impl Canvas {
    /// Create a transparent canvas. Zero-sized canvases are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyRaster { width, height });
        }
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::RasterTooLarge {
            width: u64::from(width),
            height: u64::from(height),
        })?;
        Ok(Self {
            pixmap,
            clip: None,
            transform: Transform::identity(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn bounds(&self) -> IRect {
        IRect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Replace the clip rectangle (device coordinates)
    pub fn set_clip(&mut self, rect: IRect) {
        let rect = rect.intersect(&self.bounds());
        let mask = rect.and_then(|r| self.clip_mask(r));
        self.clip = Some(Clip { rect, mask });
    }

    fn clip_mask(&self, rect: IRect) -> Option<Mask> {
        let mut mask = Mask::new(self.width(), self.height())?;
        let path = PathBuilder::from_rect(rect.to_rect()?);
        mask.fill_path(&path, FillRule::Winding, false, Transform::identity());
        Some(mask)
    }

    /// Effective device-space clip, `None` when nothing can be drawn
    pub fn clip(&self) -> Option<IRect> {
        match &self.clip {
            Some(clip) => clip.rect,
            None => Some(self.bounds()),
        }
    }

    /// Clip rectangle expressed in the current user coordinates
    pub fn user_clip(&self) -> Option<IRect> {
        let (dx, dy) = self.translation();
        self.clip().map(|c| c.translated(-dx, -dy))
    }

    pub fn set_translation(&mut self, dx: i32, dy: i32) {
        self.transform = Transform::from_translate(dx as f32, dy as f32);
    }

    pub fn translation(&self) -> (i32, i32) {
        (self.transform.tx as i32, self.transform.ty as i32)
    }

    /// Drop both the translation and the clip
    pub fn reset_transform(&mut self) {
        self.transform = Transform::identity();
        self.clip = None;
    }

    /// Pixmap, mask and transform to draw with, or `None` when the clip is empty
    fn target(&mut self) -> Option<(&mut Pixmap, Option<&Mask>, Transform)> {
        let mask = match &self.clip {
            None => None,
            Some(Clip { rect: None, .. }) => return None,
            Some(Clip { mask, .. }) => mask.as_ref(),
        };
        Some((&mut self.pixmap, mask, self.transform))
    }

    /// Fill the whole clip area
    pub fn fill(&mut self, color: Rgba<u8>) {
        match &self.clip {
            None => self.pixmap.fill(tiny_skia::Color::from_rgba8(
                color[0], color[1], color[2], color[3],
            )),
            Some(clip) => {
                if let Some(rect) = clip.rect.and_then(IRect::to_rect) {
                    self.pixmap
                        .fill_rect(rect, &solid(color), Transform::identity(), None);
                }
            }
        }
    }

    /// Fill a rectangle given in user coordinates
    pub fn fill_rect(&mut self, rect: IRect, color: Rgba<u8>) {
        let Some(rect) = rect.to_rect() else {
            return;
        };
        if let Some((pixmap, mask, transform)) = self.target() {
            pixmap.fill_rect(rect, &solid(color), transform, mask);
        }
    }

    /// Fill a closed polygon given in user coordinates (even-odd rule)
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba<u8>) {
        let Some(path) = polygon_path(points, true) else {
            return;
        };
        self.fill_path(&path, color);
    }

    /// Stroke a one-pixel line between two user-space points
    ///
    /// Coordinates are pixel centers, so `(0.5, 3.5)` to `(9.5, 3.5)` with
    /// square caps covers row 3 from column 0 through 9.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba<u8>) {
        let Some(path) = polygon_path(&[from, to], false) else {
            return;
        };
        self.stroke_path(&path, LineCap::Square, color);
    }

    /// Outline a closed polygon through pixel centers
    pub fn stroke_polygon(&mut self, points: &[(f32, f32)], color: Rgba<u8>) {
        let Some(path) = polygon_path(points, true) else {
            return;
        };
        self.stroke_path(&path, LineCap::Butt, color);
    }

    fn fill_path(&mut self, path: &Path, color: Rgba<u8>) {
        if let Some((pixmap, mask, transform)) = self.target() {
            pixmap.fill_path(path, &solid(color), FillRule::EvenOdd, transform, mask);
        }
    }

    fn stroke_path(&mut self, path: &Path, line_cap: LineCap, color: Rgba<u8>) {
        let stroke = Stroke {
            width: 1.0,
            line_cap,
            ..Stroke::default()
        };
        if let Some((pixmap, mask, transform)) = self.target() {
            pixmap.stroke_path(path, &solid(color), &stroke, transform, mask);
        }
    }

    /// Composite another raster at a user-space position, honoring the clip
    pub fn blit(&mut self, source: &RgbaImage, x: i32, y: i32) -> Result<(), RenderError> {
        let source = pixmap_from_image(source)?;
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        if let Some((pixmap, mask, transform)) = self.target() {
            pixmap.draw_pixmap(x, y, source.as_ref(), &paint, transform, mask);
        }
        Ok(())
    }

    /// Copy the current pixels out as a straight-alpha image
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width(), self.height());
        for (pixel, premultiplied) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let color = premultiplied.demultiply();
            *pixel = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        image
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }
}

fn solid(color: Rgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = false;
    paint
}

fn polygon_path(points: &[(f32, f32)], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = PathBuilder::new();
    builder.move_to(first.0, first.1);
    for point in rest {
        builder.line_to(point.0, point.1);
    }
    if close {
        builder.close();
    }
    builder.finish()
}

fn pixmap_from_image(image: &RgbaImage) -> Result<Pixmap, RenderError> {
    let mut pixmap =
        Pixmap::new(image.width(), image.height()).ok_or(RenderError::EmptyRaster {
            width: image.width(),
            height: image.height(),
        })?;
    for (target, pixel) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = pixel.0;
        *target = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}
