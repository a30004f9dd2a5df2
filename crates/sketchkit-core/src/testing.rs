//! Recording drawing context used by unit tests.

use crate::context::{Backend, BlendMode, DrawContext, Paint};
use crate::error::{SketchError, SketchResult};
use image::RgbaImage;
use kurbo::{BezPath, Point, Rect, Shape, Stroke};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill { bounds: Rect, rgba: [u8; 4], blend: BlendMode },
    Stroke { bounds: Rect, width: f64, rgba: [u8; 4], blend: BlendMode },
    Image { dest: Rect, opacity: f32 },
    Flood { seed: Point, rgba: [u8; 4], tolerance: u8 },
    Mask { dest: Rect },
}

fn rgba(paint: &Paint) -> [u8; 4] {
    let c = paint.color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

/// Backend that records calls instead of rasterizing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl DrawContext for Recorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) {
        self.ops.push(DrawOp::Fill {
            bounds: path.bounding_box(),
            rgba: rgba(paint),
            blend: paint.blend,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &Paint) {
        self.ops.push(DrawOp::Stroke {
            bounds: path.bounding_box(),
            width: stroke.width,
            rgba: rgba(paint),
            blend: paint.blend,
        });
    }

    fn draw_image(&mut self, _image: &RgbaImage, dest: Rect, opacity: f32) {
        self.ops.push(DrawOp::Image { dest, opacity });
    }

    fn flood_fill(&mut self, seed: Point, color: peniko::Color, tolerance: u8) -> usize {
        let c = color.to_rgba8();
        self.ops.push(DrawOp::Flood {
            seed,
            rgba: [c.r, c.g, c.b, c.a],
            tolerance,
        });
        0
    }

    fn apply_mask(&mut self, _mask: &RgbaImage, dest: Rect) {
        self.ops.push(DrawOp::Mask { dest });
    }
}

impl Backend for Recorder {
    fn blank(width: u32, height: u32) -> SketchResult<Self> {
        if width == 0 || height == 0 {
            return Err(SketchError::Backend(format!(
                "cannot allocate a {width}x{height} recorder"
            )));
        }
        Ok(Self {
            width,
            height,
            ops: Vec::new(),
        })
    }
}
