//! Rectangle tool.

use super::{DrawingTool, Span, outline};
use crate::context::{DrawContext, Paint};
use crate::style::ToolStyle;
use kurbo::{BezPath, Join, Point, Rect, Shape};

/// An axis-aligned rectangle spanned by the gesture start and latest point.
#[derive(Debug, Clone)]
pub struct Rectangle {
    style: ToolStyle,
    span: Span,
    is_fill: bool,
}

impl Rectangle {
    pub fn new(style: ToolStyle, is_fill: bool) -> Self {
        Self {
            style,
            span: Span::default(),
            is_fill,
        }
    }

    pub fn is_fill(&self) -> bool {
        self.is_fill
    }

    /// The spanned rectangle, normalized.
    pub fn as_rect(&self) -> Rect {
        self.span.rect()
    }

    pub fn path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}

impl DrawingTool for Rectangle {
    fn set_initial_point(&mut self, point: Point) {
        self.span.reset(point);
    }

    fn move_to(&mut self, _from: Point, to: Point) {
        self.span.end = to;
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        let paint = Paint::solid(self.style.color_with_alpha());
        if self.is_fill {
            ctx.fill_path(&self.path(), &paint);
        } else {
            ctx.stroke_path(&self.path(), &outline(&self.style, Join::Miter), &paint);
        }
    }

    fn bounds(&self) -> Rect {
        if self.is_fill {
            self.as_rect().expand()
        } else {
            let half = self.style.width / 2.0;
            self.as_rect().inflate(half, half).expand()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Backend;
    use crate::testing::{DrawOp, Recorder};

    fn dragged(is_fill: bool) -> Rectangle {
        let mut rect = Rectangle::new(ToolStyle::default(), is_fill);
        rect.set_initial_point(Point::new(40.0, 30.0));
        rect.move_to(Point::new(40.0, 30.0), Point::new(10.0, 10.0));
        rect
    }

    #[test]
    fn test_rect_is_normalized() {
        assert_eq!(dragged(false).as_rect(), Rect::new(10.0, 10.0, 40.0, 30.0));
    }

    #[test]
    fn test_fill_and_stroke_variants() {
        let mut ctx = Recorder::blank(64, 64).unwrap();
        dragged(true).render(&mut ctx);
        dragged(false).render(&mut ctx);
        assert!(matches!(ctx.ops[0], DrawOp::Fill { bounds, .. } if bounds == Rect::new(10.0, 10.0, 40.0, 30.0)));
        assert!(matches!(ctx.ops[1], DrawOp::Stroke { width, .. } if width == 10.0));
    }

    #[test]
    fn test_stroke_bounds_grow_by_half_width() {
        assert_eq!(dragged(false).bounds(), Rect::new(5.0, 5.0, 45.0, 35.0));
        assert_eq!(dragged(true).bounds(), Rect::new(10.0, 10.0, 40.0, 30.0));
    }
}
