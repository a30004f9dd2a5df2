//! Ellipse tool.

use super::{DrawingTool, Span, outline};
use crate::context::{DrawContext, Paint};
use crate::style::ToolStyle;
use kurbo::{BezPath, Ellipse as KurboEllipse, Join, Point, Rect, Shape};

/// An ellipse inscribed in the rectangle spanned by the gesture.
#[derive(Debug, Clone)]
pub struct Ellipse {
    style: ToolStyle,
    span: Span,
    is_fill: bool,
}

impl Ellipse {
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

    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::from_rect(self.span.rect())
    }

    pub fn path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}

impl DrawingTool for Ellipse {
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
            ctx.stroke_path(&self.path(), &outline(&self.style, Join::Round), &paint);
        }
    }

    fn bounds(&self) -> Rect {
        let rect = self.span.rect();
        if self.is_fill {
            rect.expand()
        } else {
            let half = self.style.width / 2.0;
            rect.inflate(half, half).expand()
        }
    }
}
