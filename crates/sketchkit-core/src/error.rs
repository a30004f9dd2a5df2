//! Error types shared across the core crate.

use thiserror::Error;

/// Errors produced by the drawing core.
///
/// Undo/redo on an empty stack is not an error; those operations report
/// `false` instead.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Unsupported tool: {0}")]
    UnsupportedTool(String),
    #[error("Invalid style: {0}")]
    InvalidStyle(String),
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type SketchResult<T> = Result<T, SketchError>;
