//! SketchKit Render Library
//!
//! CPU raster backend for the SketchKit drawing surface, built on `tiny-skia`.

mod convert;
mod error;
mod flood;
mod pixmap;

pub use error::{RenderError, RenderResult};
pub use pixmap::PixmapContext;

/// A sketch surface rasterized on the CPU.
pub type PixmapSurface = sketchkit_core::SketchSurface<PixmapContext>;
