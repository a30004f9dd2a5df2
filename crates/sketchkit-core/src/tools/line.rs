//! Straight line tool.

use super::{DrawingTool, Span, outline};
use crate::context::{DrawContext, Paint};
use crate::geometry::segment_dirty_rect;
use crate::style::ToolStyle;
use kurbo::{BezPath, Join, Point, Rect};

/// A straight segment from the gesture start to the latest point.
#[derive(Debug, Clone)]
pub struct Line {
    style: ToolStyle,
    span: Span,
}

impl Line {
    pub fn new(style: ToolStyle) -> Self {
        Self {
            style,
            span: Span::default(),
        }
    }

    pub fn start(&self) -> Point {
        self.span.start
    }

    pub fn end(&self) -> Point {
        self.span.end
    }

    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.span.start);
        path.line_to(self.span.end);
        path
    }
}

impl DrawingTool for Line {
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
        segment_dirty_rect(&[self.span.start, self.span.end], self.style.width)
    }
}
