//! Arrow tool: a line with an open head at the latest point.

use super::{DrawingTool, Span, outline};
use crate::context::{DrawContext, Paint};
use crate::geometry::segment_dirty_rect;
use crate::style::ToolStyle;
use kurbo::{BezPath, Join, Point, Rect, Vec2};

/// Smallest arrowhead length in pixels.
const MIN_HEAD_SIZE: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct Arrow {
    style: ToolStyle,
    span: Span,
}

impl Arrow {
    pub fn new(style: ToolStyle) -> Self {
        Self {
            style,
            span: Span::default(),
        }
    }

    /// Length of each head stroke, scaled with the line width.
    pub fn head_size(&self) -> f64 {
        (self.style.width * 3.0).max(MIN_HEAD_SIZE)
    }

    /// The two outer points of the head, or `None` while the shaft has no
    /// direction yet.
    pub fn head_points(&self) -> Option<(Point, Point)> {
        let Span { start, end } = self.span;
        let delta = end - start;
        let length = delta.hypot();
        if length < f64::EPSILON {
            return None;
        }

        let dir = delta / length;
        let perp = Vec2::new(-dir.y, dir.x);
        let size = self.head_size();
        let head_back = end - dir * size;
        Some((
            head_back + perp * size * 0.5,
            head_back - perp * size * 0.5,
        ))
    }

    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.span.start);
        path.line_to(self.span.end);

        if let Some((left, right)) = self.head_points() {
            path.move_to(left);
            path.line_to(self.span.end);
            path.line_to(right);
        }
        path
    }
}

impl DrawingTool for Arrow {
    fn set_initial_point(&mut self, point: Point) {
        self.span.reset(point);
    }

    fn move_to(&mut self, _from: Point, to: Point) {
        self.span.end = to;
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.stroke_path(
            &self.path(),
            &outline(&self.style, Join::Round),
            &Paint::solid(self.style.color_with_alpha()),
        );
    }

    fn bounds(&self) -> Rect {
        let mut points = vec![self.span.start, self.span.end];
        if let Some((left, right)) = self.head_points() {
            points.extend([left, right]);
        }
        segment_dirty_rect(&points, self.style.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow(width: f64, start: Point, end: Point) -> Arrow {
        let style = ToolStyle {
            width,
            ..ToolStyle::default()
        };
        let mut arrow = Arrow::new(style);
        arrow.set_initial_point(start);
        arrow.move_to(start, end);
        arrow
    }

    #[test]
    fn test_head_scales_with_width() {
        assert_eq!(arrow(1.0, Point::ZERO, Point::new(50.0, 0.0)).head_size(), 10.0);
        assert_eq!(arrow(8.0, Point::ZERO, Point::new(50.0, 0.0)).head_size(), 24.0);
    }

    #[test]
    fn test_head_points_back_along_the_shaft() {
        let arrow = arrow(2.0, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let (left, right) = arrow.head_points().unwrap();
        assert_eq!(left, Point::new(90.0, 5.0));
        assert_eq!(right, Point::new(90.0, -5.0));
    }

    #[test]
    fn test_no_head_without_direction() {
        let arrow = arrow(2.0, Point::new(4.0, 4.0), Point::new(4.0, 4.0));
        assert!(arrow.head_points().is_none());
        // Shaft only.
        assert_eq!(arrow.path().elements().len(), 2);
    }

    #[test]
    fn test_bounds_contain_head() {
        let arrow = arrow(2.0, Point::new(0.0, 50.0), Point::new(100.0, 50.0));
        let bounds = arrow.bounds();
        let (left, right) = arrow.head_points().unwrap();
        assert!(bounds.contains(left) && bounds.contains(right));
    }
}
