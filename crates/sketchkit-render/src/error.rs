//! Render error types.

use sketchkit_core::SketchError;
use thiserror::Error;

/// Errors raised by the raster backend.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot allocate a {width}x{height} pixmap")]
    Allocation { width: u32, height: u32 },
    #[error("Image buffer does not match {width}x{height}")]
    ImageBuffer { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

impl From<RenderError> for SketchError {
    fn from(err: RenderError) -> Self {
        SketchError::Backend(err.to_string())
    }
}
