//! CPU drawing context built on top of `tiny-skia`.

use crate::convert;
use crate::error::{RenderError, RenderResult};
use crate::flood;
use image::RgbaImage;
use kurbo::{BezPath, Point, Rect, Stroke};
use peniko::Color;
use sketchkit_core::{Backend, DrawContext, Paint, SketchResult};
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, Mask, MaskType, Pixmap, PixmapPaint, Transform,
};

/// A drawing context that rasterizes into a `tiny-skia` pixmap.
#[derive(Clone, PartialEq)]
pub struct PixmapContext {
    pixmap: Pixmap,
}

impl std::fmt::Debug for PixmapContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapContext")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl PixmapContext {
    /// Allocate a transparent context.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
        Ok(Self { pixmap })
    }

    /// Wrap a straight-alpha image.
    pub fn from_image(image: &RgbaImage) -> RenderResult<Self> {
        Ok(Self {
            pixmap: convert::image_to_pixmap(image)?,
        })
    }

    /// The backing pixmap (premultiplied alpha).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Export as a straight-alpha image.
    pub fn to_rgba_image(&self) -> RenderResult<RgbaImage> {
        convert::pixmap_to_image(&self.pixmap)
    }

    fn skia_paint(paint: &Paint) -> tiny_skia::Paint<'static> {
        let mut skia = tiny_skia::Paint {
            anti_alias: true,
            blend_mode: convert::blend_mode(paint.blend),
            ..Default::default()
        };
        skia.set_color(convert::color(paint.color));
        skia
    }

    /// Draw `image` scaled into `dest` on `target`.
    fn blit(target: &mut Pixmap, image: &RgbaImage, dest: Rect, opacity: f32) {
        if !(dest.width() > 0.0 && dest.height() > 0.0) {
            log::debug!("skipping image with empty destination {dest:?}");
            return;
        }
        let source = match convert::image_to_pixmap(image) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("skipping image: {err}");
                return;
            }
        };
        let paint = PixmapPaint {
            opacity: opacity.clamp(0.0, 1.0),
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };
        let transform = convert::placement(source.width(), source.height(), dest);
        target.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    }
}

impl DrawContext for PixmapContext {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) {
        let Some(path) = convert::path(path) else {
            log::debug!("skipping fill of degenerate path");
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::skia_paint(paint),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &Paint) {
        let Some(path) = convert::path(path) else {
            log::debug!("skipping stroke of degenerate path");
            return;
        };
        self.pixmap.stroke_path(
            &path,
            &Self::skia_paint(paint),
            &convert::stroke(stroke),
            Transform::identity(),
            None,
        );
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect, opacity: f32) {
        Self::blit(&mut self.pixmap, image, dest, opacity);
    }

    fn flood_fill(&mut self, seed: Point, color: Color, tolerance: u8) -> usize {
        if !(seed.x >= 0.0 && seed.y >= 0.0) {
            return 0;
        }
        let rgba = color.to_rgba8();
        let fill = ColorU8::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a).premultiply();
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        flood::flood_fill(
            self.pixmap.pixels_mut(),
            width,
            height,
            (seed.x.floor() as u32, seed.y.floor() as u32),
            fill,
            tolerance,
        )
    }

    fn apply_mask(&mut self, mask: &RgbaImage, dest: Rect) {
        let Some(mut layer) = Pixmap::new(self.pixmap.width(), self.pixmap.height()) else {
            log::warn!("skipping mask: cannot allocate mask layer");
            return;
        };
        Self::blit(&mut layer, mask, dest, 1.0);
        let mask = Mask::from_pixmap(layer.as_ref(), MaskType::Alpha);
        self.pixmap.apply_mask(&mask);
    }
}

impl Backend for PixmapContext {
    fn blank(width: u32, height: u32) -> SketchResult<Self> {
        Ok(Self::new(width, height)?)
    }
}
