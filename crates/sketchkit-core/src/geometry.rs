//! Placement and sizing helpers.

use crate::error::{SketchError, SketchResult};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// How the background image is laid out inside the surface bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Drawn at its intrinsic size, anchored to the top-left corner.
    #[default]
    Original,
    /// Stretched to fill the bounds.
    Scale,
    /// Uniformly scaled to fit and centered.
    AspectFit,
}

fn check_size(size: Size, what: &str) -> SketchResult<()> {
    let valid = size.width.is_finite()
        && size.height.is_finite()
        && size.width > 0.0
        && size.height > 0.0;
    if valid {
        Ok(())
    } else {
        Err(SketchError::InvalidGeometry(format!(
            "{what} size must be positive, got {}x{}",
            size.width, size.height
        )))
    }
}

/// Largest size with the aspect ratio of `source` that fits inside `target`.
pub fn aspect_fit_size(source: Size, target: Size) -> SketchResult<Size> {
    check_size(source, "source")?;
    check_size(target, "target")?;

    let aspect = source.width / source.height;
    if target.width / aspect <= target.height {
        Ok(Size::new(target.width, target.width / aspect))
    } else {
        Ok(Size::new(target.height * aspect, target.height))
    }
}

/// The aspect-fit size of `source`, centered in a `target` frame at the origin.
pub fn aspect_fit_rect(source: Size, target: Size) -> SketchResult<Rect> {
    let fitted = aspect_fit_size(source, target)?;
    let origin = Point::new(
        (target.width - fitted.width) / 2.0,
        (target.height - fitted.height) / 2.0,
    );
    Ok(Rect::from_origin_size(origin, fitted))
}

/// Where an image of `source` size lands inside `bounds` for a render mode.
pub fn placement_rect(mode: RenderMode, source: Size, bounds: Size) -> SketchResult<Rect> {
    check_size(source, "image")?;
    match mode {
        RenderMode::Original => Ok(Rect::from_origin_size(Point::ZERO, source)),
        RenderMode::Scale => {
            check_size(bounds, "surface")?;
            Ok(Rect::from_origin_size(Point::ZERO, bounds))
        }
        RenderMode::AspectFit => aspect_fit_rect(source, bounds),
    }
}

/// Bounding box of `points` grown by half of `width` on every side and
/// rounded outward to whole pixels.
pub fn segment_dirty_rect(points: &[Point], width: f64) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    let bounds = points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p));
    let half = width.max(0.0) / 2.0;
    bounds.inflate(half, half).expand()
}

/// Size of a bitmap in kurbo units.
pub fn image_size(image: &image::RgbaImage) -> Size {
    Size::new(f64::from(image.width()), f64::from(image.height()))
}
