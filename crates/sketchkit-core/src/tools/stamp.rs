//! Stamp tool: places a shared bitmap at the pointer.

use super::DrawingTool;
use crate::context::DrawContext;
use crate::geometry::image_size;
use image::RgbaImage;
use kurbo::{Point, Rect};
use std::sync::Arc;

/// Draws its image at intrinsic size, centered on the latest point.
///
/// Color, width and alpha do not apply. With no image the stamp draws nothing.
#[derive(Debug, Clone)]
pub struct Stamp {
    image: Option<Arc<RgbaImage>>,
    position: Point,
}

impl Stamp {
    pub fn new(image: Option<Arc<RgbaImage>>) -> Self {
        Self {
            image,
            position: Point::ZERO,
        }
    }

    pub fn image(&self) -> Option<&Arc<RgbaImage>> {
        self.image.as_ref()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Where the image lands, if there is one.
    pub fn dest(&self) -> Option<Rect> {
        let image = self.image.as_ref()?;
        Some(Rect::from_center_size(self.position, image_size(image)))
    }
}

impl DrawingTool for Stamp {
    fn set_initial_point(&mut self, point: Point) {
        self.position = point;
    }

    fn move_to(&mut self, _from: Point, to: Point) {
        self.position = to;
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        let (Some(image), Some(dest)) = (self.image.as_deref(), self.dest()) else {
            return;
        };
        ctx.draw_image(image, dest, 1.0);
    }

    fn bounds(&self) -> Rect {
        self.dest()
            .map(|dest| dest.expand())
            .unwrap_or_else(|| Rect::from_points(self.position, self.position))
    }
}
