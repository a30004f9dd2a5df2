//! Conversions between kurbo/peniko/image types and tiny-skia.

use crate::error::{RenderError, RenderResult};
use image::RgbaImage;
use kurbo::{BezPath, Cap, Join, PathEl, Rect};
use peniko::Color;
use sketchkit_core::BlendMode;
use tiny_skia::{ColorU8, IntSize, LineCap, LineJoin, Path, PathBuilder, Pixmap, Transform};

/// Build a tiny-skia path. Returns `None` for empty or degenerate paths.
pub fn path(bez: &BezPath) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for el in bez.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

pub fn color(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

pub fn stroke(stroke: &kurbo::Stroke) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width: stroke.width as f32,
        miter_limit: stroke.miter_limit as f32,
        line_cap: match stroke.start_cap {
            Cap::Butt => LineCap::Butt,
            Cap::Square => LineCap::Square,
            Cap::Round => LineCap::Round,
        },
        line_join: match stroke.join {
            Join::Bevel => LineJoin::Bevel,
            Join::Miter => LineJoin::Miter,
            Join::Round => LineJoin::Round,
        },
        dash: None,
    }
}

pub fn blend_mode(blend: BlendMode) -> tiny_skia::BlendMode {
    match blend {
        BlendMode::SourceOver => tiny_skia::BlendMode::SourceOver,
        BlendMode::Clear => tiny_skia::BlendMode::Clear,
    }
}

/// Transform mapping an image of `width` x `height` pixels onto `dest`.
pub fn placement(width: u32, height: u32, dest: Rect) -> Transform {
    Transform::from_row(
        (dest.width() / f64::from(width)) as f32,
        0.0,
        0.0,
        (dest.height() / f64::from(height)) as f32,
        dest.x0 as f32,
        dest.y0 as f32,
    )
}

/// Copy a straight-alpha image into a premultiplied pixmap.
pub fn image_to_pixmap(image: &RgbaImage) -> RenderResult<Pixmap> {
    let (width, height) = image.dimensions();
    let size = IntSize::from_wh(width, height).ok_or(RenderError::Allocation { width, height })?;

    let mut data = Vec::with_capacity(image.as_raw().len());
    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        let pm = ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[pm.red(), pm.green(), pm.blue(), pm.alpha()]);
    }
    Pixmap::from_vec(data, size).ok_or(RenderError::ImageBuffer { width, height })
}

/// Copy a premultiplied pixmap into a straight-alpha image.
pub fn pixmap_to_image(pixmap: &Pixmap) -> RenderResult<RgbaImage> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(width, height, data).ok_or(RenderError::ImageBuffer { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_empty_path_is_none() {
        assert!(path(&BezPath::new()).is_none());
    }

    #[test]
    fn test_path_keeps_bounds() {
        let mut bez = BezPath::new();
        bez.move_to(Point::new(1.0, 2.0));
        bez.quad_to(Point::new(5.0, 9.0), Point::new(10.0, 2.0));
        bez.line_to(Point::new(10.0, 0.0));
        bez.close_path();
        let path = path(&bez).unwrap();
        let bounds = path.bounds();
        assert_eq!((bounds.left(), bounds.right()), (1.0, 10.0));
        assert_eq!(bounds.top(), 0.0);
    }

    #[test]
    fn test_stroke_settings() {
        let stroke = stroke(
            &kurbo::Stroke::new(4.0)
                .with_caps(Cap::Round)
                .with_join(Join::Miter),
        );
        assert_eq!(stroke.width, 4.0);
        assert_eq!(stroke.line_cap, LineCap::Round);
        assert_eq!(stroke.line_join, LineJoin::Miter);
    }

    #[test]
    fn test_image_pixmap_round_trip() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, image::Rgba([0, 0, 0, 0]));
        let pixmap = image_to_pixmap(&image).unwrap();
        assert_eq!(pixmap_to_image(&pixmap).unwrap(), image);
    }

    #[test]
    fn test_zero_sized_image_fails() {
        assert!(matches!(
            image_to_pixmap(&RgbaImage::new(0, 3)),
            Err(RenderError::Allocation { width: 0, height: 3 })
        ));
    }
}
