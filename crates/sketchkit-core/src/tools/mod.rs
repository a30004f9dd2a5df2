//! Drawing tools.
//!
//! A [`Tool`] is created at gesture start with the style in effect at that
//! moment, consumes pointer samples while the gesture runs, and renders itself
//! into a [`DrawContext`]. Once committed to the history it is never mutated.

mod arrow;
mod ellipse;
mod fill;
mod line;
mod pen;
mod rectangle;
mod stamp;
mod star;

pub use arrow::Arrow;
pub use ellipse::Ellipse;
pub use fill::Fill;
pub use line::Line;
pub use pen::{Eraser, Pen, PenOptions, PenSegment};
pub use rectangle::Rectangle;
pub use stamp::Stamp;
pub use star::Star;

use crate::context::DrawContext;
use crate::error::SketchError;
use crate::style::ToolStyle;
use image::RgbaImage;
use kurbo::{Cap, Join, Point, Rect, Stroke};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for a tool instance.
pub type ToolId = Uuid;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Stamp,
    Line,
    Arrow,
    RectangleStroke,
    RectangleFill,
    EllipseStroke,
    EllipseFill,
    Star,
    Fill,
}

impl ToolKind {
    /// Every tool, in palette order.
    pub const ALL: [ToolKind; 11] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Stamp,
        ToolKind::Line,
        ToolKind::Arrow,
        ToolKind::RectangleStroke,
        ToolKind::RectangleFill,
        ToolKind::EllipseStroke,
        ToolKind::EllipseFill,
        ToolKind::Star,
        ToolKind::Fill,
    ];

    /// Stable name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Eraser => "eraser",
            ToolKind::Stamp => "stamp",
            ToolKind::Line => "line",
            ToolKind::Arrow => "arrow",
            ToolKind::RectangleStroke => "rectangle_stroke",
            ToolKind::RectangleFill => "rectangle_fill",
            ToolKind::EllipseStroke => "ellipse_stroke",
            ToolKind::EllipseFill => "ellipse_fill",
            ToolKind::Star => "star",
            ToolKind::Fill => "fill",
        }
    }

    /// Whether this tool accumulates every sample into a smoothed path.
    pub fn is_freehand(self) -> bool {
        matches!(self, ToolKind::Pen | ToolKind::Eraser)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SketchError::UnsupportedTool(s.to_string()))
    }
}

/// Settings the factory consults besides the style.
#[derive(Debug, Clone, Default)]
pub struct ToolOptions {
    /// Freehand behavior for pen and eraser.
    pub pen: PenOptions,
    /// Image placed by the stamp tool.
    pub stamp_image: Option<Arc<RgbaImage>>,
    /// Per-channel color tolerance for flood fill (0 = exact match).
    pub fill_tolerance: u8,
}

/// Common behavior of every tool variant.
pub trait DrawingTool {
    /// Record the gesture's starting point, resetting any accumulated input.
    fn set_initial_point(&mut self, point: Point);

    /// Consume a move sample.
    fn move_to(&mut self, from: Point, to: Point);

    /// Draw the current state into `ctx`.
    fn render(&self, ctx: &mut dyn DrawContext);

    /// Region touched by the most recent sample, when smaller than the whole
    /// tool. `None` means the caller should redraw everything.
    fn dirty_region(&self) -> Option<Rect> {
        None
    }

    /// Full extent of the tool's geometry, including stroke width.
    fn bounds(&self) -> Rect;
}

/// Variant-specific state of a tool.
#[derive(Debug, Clone)]
pub enum ToolVariant {
    Pen(Pen),
    Eraser(Eraser),
    Stamp(Stamp),
    Line(Line),
    Arrow(Arrow),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Star(Star),
    Fill(Fill),
}

/// A drawing tool instance with its captured style.
#[derive(Debug, Clone)]
pub struct Tool {
    id: ToolId,
    kind: ToolKind,
    style: ToolStyle,
    variant: ToolVariant,
}

impl Tool {
    /// Create the tool matching `kind`, capturing `style` by value.
    pub fn new(kind: ToolKind, style: ToolStyle, options: &ToolOptions) -> Self {
        let variant = match kind {
            ToolKind::Pen => ToolVariant::Pen(Pen::new(style, options.pen)),
            ToolKind::Eraser => ToolVariant::Eraser(Eraser::new(style, options.pen)),
            ToolKind::Stamp => ToolVariant::Stamp(Stamp::new(options.stamp_image.clone())),
            ToolKind::Line => ToolVariant::Line(Line::new(style)),
            ToolKind::Arrow => ToolVariant::Arrow(Arrow::new(style)),
            ToolKind::RectangleStroke => ToolVariant::Rectangle(Rectangle::new(style, false)),
            ToolKind::RectangleFill => ToolVariant::Rectangle(Rectangle::new(style, true)),
            ToolKind::EllipseStroke => ToolVariant::Ellipse(Ellipse::new(style, false)),
            ToolKind::EllipseFill => ToolVariant::Ellipse(Ellipse::new(style, true)),
            ToolKind::Star => ToolVariant::Star(Star::new(style)),
            ToolKind::Fill => ToolVariant::Fill(Fill::new(style, options.fill_tolerance)),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            style,
            variant,
        }
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Style captured when the tool was created.
    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn variant(&self) -> &ToolVariant {
        &self.variant
    }

    fn as_dyn(&self) -> &dyn DrawingTool {
        match &self.variant {
            ToolVariant::Pen(t) => t,
            ToolVariant::Eraser(t) => t,
            ToolVariant::Stamp(t) => t,
            ToolVariant::Line(t) => t,
            ToolVariant::Arrow(t) => t,
            ToolVariant::Rectangle(t) => t,
            ToolVariant::Ellipse(t) => t,
            ToolVariant::Star(t) => t,
            ToolVariant::Fill(t) => t,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn DrawingTool {
        match &mut self.variant {
            ToolVariant::Pen(t) => t,
            ToolVariant::Eraser(t) => t,
            ToolVariant::Stamp(t) => t,
            ToolVariant::Line(t) => t,
            ToolVariant::Arrow(t) => t,
            ToolVariant::Rectangle(t) => t,
            ToolVariant::Ellipse(t) => t,
            ToolVariant::Star(t) => t,
            ToolVariant::Fill(t) => t,
        }
    }
}

impl DrawingTool for Tool {
    fn set_initial_point(&mut self, point: Point) {
        self.as_dyn_mut().set_initial_point(point);
    }

    fn move_to(&mut self, from: Point, to: Point) {
        self.as_dyn_mut().move_to(from, to);
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        self.as_dyn().render(ctx);
    }

    fn dirty_region(&self) -> Option<Rect> {
        self.as_dyn().dirty_region()
    }

    fn bounds(&self) -> Rect {
        self.as_dyn().bounds()
    }
}

/// Two points spanning a shape: where the gesture started and where it is now.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    pub fn reset(&mut self, point: Point) {
        self.start = point;
        self.end = point;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

/// Stroke settings for outlined shapes.
pub(crate) fn outline(style: &ToolStyle, join: Join) -> Stroke {
    Stroke::new(style.width).with_caps(Cap::Round).with_join(join)
}
