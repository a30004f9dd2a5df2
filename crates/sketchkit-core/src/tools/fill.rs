//! Flood fill tool.

use super::DrawingTool;
use crate::context::DrawContext;
use crate::style::ToolStyle;
use kurbo::{Point, Rect};

/// Fills the region connected to the gesture's initial point.
///
/// The result depends on whatever is already in the target, so a fill must be
/// replayed in its original position among the other committed tools.
#[derive(Debug, Clone)]
pub struct Fill {
    style: ToolStyle,
    seed: Point,
    tolerance: u8,
}

impl Fill {
    pub fn new(style: ToolStyle, tolerance: u8) -> Self {
        Self {
            style,
            seed: Point::ZERO,
            tolerance,
        }
    }

    pub fn seed(&self) -> Point {
        self.seed
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }
}

impl DrawingTool for Fill {
    fn set_initial_point(&mut self, point: Point) {
        self.seed = point;
    }

    fn move_to(&mut self, _from: Point, _to: Point) {}

    fn render(&self, ctx: &mut dyn DrawContext) {
        let changed = ctx.flood_fill(self.seed, self.style.color_with_alpha(), self.tolerance);
        log::trace!("flood fill at {:?} changed {changed} pixels", self.seed);
    }

    fn bounds(&self) -> Rect {
        // A fill may reach any pixel.
        Rect::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Backend;
    use crate::style::StyleColor;
    use crate::testing::{DrawOp, Recorder};

    #[test]
    fn test_seed_stays_at_initial_point() {
        let style = ToolStyle::new(StyleColor::new(255, 0, 0, 255), 1.0, 1.0).unwrap();
        let mut fill = Fill::new(style, 4);
        fill.set_initial_point(Point::new(5.0, 5.0));
        fill.move_to(Point::new(5.0, 5.0), Point::new(9.0, 9.0));

        let mut ctx = Recorder::blank(10, 10).unwrap();
        fill.render(&mut ctx);
        assert_eq!(
            ctx.ops,
            vec![DrawOp::Flood {
                seed: Point::new(5.0, 5.0),
                rgba: [255, 0, 0, 255],
                tolerance: 4,
            }]
        );
    }
}
