//! Drawing context abstraction.
//!
//! The core never touches pixels directly. Tools and the surface describe
//! their output through [`DrawContext`], and a raster backend (see the
//! `sketchkit-render` crate) turns those calls into pixels.

use crate::error::SketchResult;
use crate::style::StyleColor;
use image::RgbaImage;
use kurbo::{BezPath, Point, Rect, Stroke};
use peniko::Color;

/// How source pixels combine with the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Paint over existing content.
    #[default]
    SourceOver,
    /// Remove existing content under the covered area.
    Clear,
}

/// Color and blend mode for a fill or stroke.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub color: Color,
    pub blend: BlendMode,
}

impl Paint {
    /// Paint with normal source-over blending.
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            blend: BlendMode::SourceOver,
        }
    }

    /// Paint that erases whatever it covers.
    pub fn eraser() -> Self {
        Self {
            color: StyleColor::transparent().into(),
            blend: BlendMode::Clear,
        }
    }
}

/// A 2D raster target tools can draw into.
///
/// Coordinates are in surface pixels with the origin at the top-left.
pub trait DrawContext {
    /// Width of the target in pixels.
    fn width(&self) -> u32;

    /// Height of the target in pixels.
    fn height(&self) -> u32;

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Fill the interior of a path.
    fn fill_path(&mut self, path: &BezPath, paint: &Paint);

    /// Stroke the outline of a path.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &Paint);

    /// Draw an image scaled into `dest`.
    fn draw_image(&mut self, image: &RgbaImage, dest: Rect, opacity: f32);

    /// Replace the 4-connected region of pixels matching the color at `seed`
    /// (within `tolerance` per channel) with `color`.
    ///
    /// Returns the number of pixels changed.
    fn flood_fill(&mut self, seed: Point, color: Color, tolerance: u8) -> usize;

    /// Multiply every pixel by the alpha of `mask` placed at `dest`.
    /// Pixels outside `dest` become transparent.
    fn apply_mask(&mut self, mask: &RgbaImage, dest: Rect);
}

/// A drawing context that can be created blank and duplicated.
///
/// The surface keeps its cached composite in a backend value and rebuilds it
/// from a cleared copy, so a failed or partial rebuild never leaks into the
/// visible cache.
pub trait Backend: DrawContext + Clone {
    /// Allocate a transparent target of the given size.
    fn blank(width: u32, height: u32) -> SketchResult<Self>;
}
