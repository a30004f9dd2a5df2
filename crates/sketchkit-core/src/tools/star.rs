//! Five-pointed star tool.

use super::{DrawingTool, Span, outline};
use crate::context::{DrawContext, Paint};
use crate::style::ToolStyle;
use kurbo::{BezPath, Join, Point, Rect};
use std::f64::consts::{FRAC_PI_2, PI};

const POINTS: usize = 5;
/// Inner vertex radius relative to the outer one.
const INNER_RATIO: f64 = 0.382;

/// A star polygon inscribed in the rectangle spanned by the gesture.
#[derive(Debug, Clone)]
pub struct Star {
    style: ToolStyle,
    span: Span,
}

impl Star {
    pub fn new(style: ToolStyle) -> Self {
        Self {
            style,
            span: Span::default(),
        }
    }

    /// Alternating outer and inner vertices, starting at the top point.
    pub fn vertices(&self) -> Vec<Point> {
        let rect = self.span.rect();
        let center = rect.center();
        let (rx, ry) = (rect.width() / 2.0, rect.height() / 2.0);

        (0..POINTS * 2)
            .map(|i| {
                let angle = -FRAC_PI_2 + i as f64 * PI / POINTS as f64;
                let scale = if i % 2 == 0 { 1.0 } else { INNER_RATIO };
                Point::new(
                    center.x + rx * scale * angle.cos(),
                    center.y + ry * scale * angle.sin(),
                )
            })
            .collect()
    }

    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut vertices = self.vertices().into_iter();
        if let Some(first) = vertices.next() {
            path.move_to(first);
            for vertex in vertices {
                path.line_to(vertex);
            }
            path.close_path();
        }
        path
    }
}

impl DrawingTool for Star {
    fn set_initial_point(&mut self, point: Point) {
        self.span.reset(point);
    }

    fn move_to(&mut self, _from: Point, to: Point) {
        self.span.end = to;
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.stroke_path(
            &self.path(),
            &outline(&self.style, Join::Miter),
            &Paint::solid(self.style.color_with_alpha()),
        );
    }

    fn bounds(&self) -> Rect {
        // Miter spikes can reach past half the width at the sharp tips.
        let pad = self.style.width * 2.0;
        self.span.rect().inflate(pad, pad).expand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(from: Point, to: Point) -> Star {
        let mut star = Star::new(ToolStyle::default());
        star.set_initial_point(from);
        star.move_to(from, to);
        star
    }

    #[test]
    fn test_ten_vertices_inside_span() {
        let star = star(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let vertices = star.vertices();
        assert_eq!(vertices.len(), 10);

        let span = Rect::new(0.0, 0.0, 100.0, 100.0).inflate(1e-9, 1e-9);
        assert!(vertices.iter().all(|v| span.contains(*v)));
    }

    #[test]
    fn test_first_point_is_top_center() {
        let star = star(Point::new(0.0, 0.0), Point::new(100.0, 60.0));
        let top = star.vertices()[0];
        assert!((top.x - 50.0).abs() < 1e-9);
        assert!(top.y.abs() < 1e-9);
    }

    #[test]
    fn test_inner_vertices_are_closer_to_center() {
        let star = star(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let center = Point::new(50.0, 50.0);
        for (i, v) in star.vertices().iter().enumerate() {
            let expected = if i % 2 == 0 { 50.0 } else { 50.0 * INNER_RATIO };
            assert!((v.distance(center) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_path_is_closed() {
        let star = star(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let path = star.path();
        assert!(matches!(
            path.elements().last(),
            Some(kurbo::PathEl::ClosePath)
        ));
    }
}
