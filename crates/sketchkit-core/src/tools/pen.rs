//! Freehand pen and eraser.

use super::DrawingTool;
use crate::context::{DrawContext, Paint};
use crate::geometry::segment_dirty_rect;
use crate::style::ToolStyle;
use kurbo::{BezPath, Cap, Circle, Join, Point, Rect, Shape, Stroke, StrokeOpts};
use serde::{Deserialize, Serialize};

/// Sample travel (in pixels) that maps to one unit of simulated speed.
const PRESSURE_TRAVEL_SCALE: f64 = 13.0;
/// Weight of the newest sample in the pressure moving average.
const PRESSURE_SMOOTHING: f64 = 0.3;
const MIN_PRESSURE: f64 = 0.2;

/// Freehand behavior shared by pen and eraser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PenOptions {
    /// Vary the line width with drawing speed (fast = thin).
    #[serde(default)]
    pub pressure_simulation: bool,
}

fn round_stroke(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

/// One smoothed piece of a freehand stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenSegment {
    pub start: Point,
    pub control: Point,
    pub end: Point,
    /// Line width used for this piece.
    pub width: f64,
}

impl PenSegment {
    fn points(&self) -> [Point; 3] {
        [self.start, self.control, self.end]
    }

    fn dirty_rect(&self) -> Rect {
        segment_dirty_rect(&self.points(), self.width)
    }
}

/// A freehand stroke smoothed with midpoint quadratics.
#[derive(Debug, Clone)]
pub struct Pen {
    style: ToolStyle,
    options: PenOptions,
    origin: Point,
    two_back: Point,
    one_back: Point,
    current: Point,
    segments: Vec<PenSegment>,
    pressure: f64,
}

impl Pen {
    pub fn new(style: ToolStyle, options: PenOptions) -> Self {
        Self {
            style,
            options,
            origin: Point::ZERO,
            two_back: Point::ZERO,
            one_back: Point::ZERO,
            current: Point::ZERO,
            segments: Vec::new(),
            pressure: 1.0,
        }
    }

    /// Smoothed segments accumulated so far.
    pub fn segments(&self) -> &[PenSegment] {
        &self.segments
    }

    pub fn options(&self) -> PenOptions {
        self.options
    }

    /// The whole stroke as one continuous path.
    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.segments.first() else {
            return path;
        };
        path.move_to(first.start);
        for segment in &self.segments {
            path.quad_to(segment.control, segment.end);
        }
        path
    }

    fn segment_width(&mut self, from: Point, to: Point) -> f64 {
        if !self.options.pressure_simulation {
            return self.style.width;
        }
        let travel = (from.distance(to) / PRESSURE_TRAVEL_SCALE).min(3.0);
        let raw = (-travel).exp().clamp(MIN_PRESSURE, 1.0);
        self.pressure = self.pressure * (1.0 - PRESSURE_SMOOTHING) + raw * PRESSURE_SMOOTHING;
        self.style.width * self.pressure
    }

    /// Outline of the whole stroke with per-segment widths, as one path.
    /// All pieces wind the same way; a nonzero fill covers overlaps once.
    fn variable_outline(&self) -> BezPath {
        let opts = StrokeOpts::default();
        let mut outline = BezPath::new();
        for segment in &self.segments {
            let mut piece = BezPath::new();
            piece.move_to(segment.start);
            piece.quad_to(segment.control, segment.end);
            let style = round_stroke(segment.width);
            let expanded = kurbo::stroke(piece.elements().iter().copied(), &style, &opts, 0.1);
            outline.extend(expanded.elements().iter().copied());
        }
        outline
    }

    fn is_dot(&self) -> bool {
        self.segments
            .iter()
            .all(|s| s.start == self.origin && s.control == self.origin && s.end == self.origin)
    }

    fn draw(&self, ctx: &mut dyn DrawContext, paint: &Paint) {
        if self.is_dot() {
            // A tap with no travel still leaves a round mark.
            let dot = Circle::new(self.origin, self.style.width / 2.0).to_path(0.1);
            ctx.fill_path(&dot, paint);
            return;
        }

        if self.options.pressure_simulation {
            ctx.fill_path(&self.variable_outline(), paint);
        } else {
            ctx.stroke_path(&self.path(), &round_stroke(self.style.width), paint);
        }
    }
}

impl DrawingTool for Pen {
    fn set_initial_point(&mut self, point: Point) {
        self.origin = point;
        self.two_back = point;
        self.one_back = point;
        self.current = point;
        self.segments.clear();
        self.pressure = 1.0;
    }

    fn move_to(&mut self, from: Point, to: Point) {
        self.two_back = self.one_back;
        self.one_back = self.current;
        self.current = to;

        let width = self.segment_width(from, to);
        self.segments.push(PenSegment {
            start: self.two_back.midpoint(self.one_back),
            control: self.one_back,
            end: self.one_back.midpoint(self.current),
            width,
        });
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        self.draw(ctx, &Paint::solid(self.style.color_with_alpha()));
    }

    fn dirty_region(&self) -> Option<Rect> {
        self.segments.last().map(PenSegment::dirty_rect)
    }

    fn bounds(&self) -> Rect {
        let start = segment_dirty_rect(&[self.origin], self.style.width);
        self.segments
            .iter()
            .fold(start, |acc, segment| acc.union(segment.dirty_rect()))
    }
}

/// A pen that removes pixels instead of painting them.
#[derive(Debug, Clone)]
pub struct Eraser(Pen);

impl Eraser {
    pub fn new(style: ToolStyle, options: PenOptions) -> Self {
        Self(Pen::new(style, options))
    }

    pub fn pen(&self) -> &Pen {
        &self.0
    }
}

impl DrawingTool for Eraser {
    fn set_initial_point(&mut self, point: Point) {
        self.0.set_initial_point(point);
    }

    fn move_to(&mut self, from: Point, to: Point) {
        self.0.move_to(from, to);
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        self.0.draw(ctx, &Paint::eraser());
    }

    fn dirty_region(&self) -> Option<Rect> {
        self.0.dirty_region()
    }

    fn bounds(&self) -> Rect {
        self.0.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Backend, BlendMode};
    use crate::testing::{DrawOp, Recorder};

    fn drawn(points: &[Point], options: PenOptions) -> Pen {
        let mut pen = Pen::new(ToolStyle::default(), options);
        pen.set_initial_point(points[0]);
        for pair in points.windows(2) {
            pen.move_to(pair[0], pair[1]);
        }
        pen
    }

    #[test]
    fn test_segments_join_at_midpoints() {
        let pen = drawn(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 10.0),
            ],
            PenOptions::default(),
        );
        let segments = pen.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Point::new(0.0, 0.0));
        assert_eq!(segments[0].end, Point::new(5.0, 0.0));
        assert_eq!(segments[1].start, segments[0].end);
        assert_eq!(segments[1].control, Point::new(10.0, 0.0));
        assert_eq!(segments[1].end, Point::new(15.0, 5.0));
    }

    #[test]
    fn test_dirty_region_covers_latest_segment() {
        let pen = drawn(
            &[
                Point::new(10.0, 20.0),
                Point::new(20.0, 20.0),
                Point::new(30.0, 20.0),
            ],
            PenOptions::default(),
        );
        let dirty = pen.dirty_region().unwrap();
        // mid1 = (15, 20), control = (20, 20), mid2 = (25, 20), half width 5.
        assert_eq!(dirty, Rect::new(10.0, 15.0, 30.0, 25.0));
        let last = pen.segments().last().unwrap();
        for p in [last.start, last.control, last.end] {
            assert!(dirty.contains(p));
        }
    }

    #[test]
    fn test_no_dirty_region_before_moving() {
        let mut pen = Pen::new(ToolStyle::default(), PenOptions::default());
        pen.set_initial_point(Point::new(3.0, 3.0));
        assert_eq!(pen.dirty_region(), None);
    }

    #[test]
    fn test_initial_point_resets_stroke() {
        let mut pen = drawn(
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            PenOptions::default(),
        );
        pen.set_initial_point(Point::new(50.0, 50.0));
        assert!(pen.segments().is_empty());
        assert!(pen.path().elements().is_empty());
    }

    #[test]
    fn test_renders_single_round_stroke() {
        let pen = drawn(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 0.0),
            ],
            PenOptions::default(),
        );
        let mut ctx = Recorder::blank(32, 32).unwrap();
        pen.render(&mut ctx);
        assert_eq!(ctx.ops.len(), 1);
        assert!(matches!(
            ctx.ops[0],
            DrawOp::Stroke { width, rgba: [0, 0, 0, 255], blend: BlendMode::SourceOver, .. } if width == 10.0
        ));
    }

    #[test]
    fn test_tap_leaves_a_dot() {
        let origin = Point::new(8.0, 8.0);
        let pen = drawn(&[origin, origin], PenOptions::default());
        let mut ctx = Recorder::blank(32, 32).unwrap();
        pen.render(&mut ctx);
        assert!(matches!(
            ctx.ops.as_slice(),
            [DrawOp::Fill { bounds, .. }] if bounds.contains(origin)
        ));
    }

    #[test]
    fn test_pressure_thins_fast_strokes() {
        let options = PenOptions {
            pressure_simulation: true,
        };
        let slow = drawn(
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 0.0),
            ],
            options,
        );
        let fast = drawn(
            &[
                Point::new(0.0, 0.0),
                Point::new(60.0, 0.0),
                Point::new(120.0, 0.0),
                Point::new(180.0, 0.0),
            ],
            options,
        );
        let slow_width = slow.segments().last().unwrap().width;
        let fast_width = fast.segments().last().unwrap().width;
        assert!(fast_width < slow_width);
        assert!(fast_width >= 10.0 * MIN_PRESSURE);
        assert!(slow_width <= 10.0);

        // The whole variable-width stroke is one fill, not a stroke per piece.
        let mut ctx = Recorder::blank(200, 10).unwrap();
        fast.render(&mut ctx);
        assert_eq!(ctx.ops.len(), 1);
        let DrawOp::Fill { bounds, .. } = ctx.ops[0] else {
            panic!("expected a fill, got {:?}", ctx.ops[0]);
        };
        assert!(bounds.x0 < 31.0 && bounds.x1 > 149.0);
        assert!(bounds.height() <= 10.5);
    }

    #[test]
    fn test_eraser_clears_instead_of_painting() {
        let mut eraser = Eraser::new(ToolStyle::default(), PenOptions::default());
        eraser.set_initial_point(Point::new(0.0, 0.0));
        eraser.move_to(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let mut ctx = Recorder::blank(16, 16).unwrap();
        eraser.render(&mut ctx);
        assert!(matches!(
            ctx.ops[0],
            DrawOp::Stroke {
                blend: BlendMode::Clear,
                rgba: [0, 0, 0, 0],
                ..
            }
        ));
        assert_eq!(eraser.dirty_region(), eraser.pen().dirty_region());
    }

    #[test]
    fn test_bounds_cover_every_segment() {
        let pen = drawn(
            &[
                Point::new(5.0, 5.0),
                Point::new(40.0, 5.0),
                Point::new(40.0, 40.0),
            ],
            PenOptions::default(),
        );
        let bounds = pen.bounds();
        for segment in pen.segments() {
            assert_eq!(bounds.union(segment.dirty_rect()), bounds);
        }
    }
}
