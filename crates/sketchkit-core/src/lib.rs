//! SketchKit Core Library
//!
//! Platform-agnostic drawing surface: tools, undo/redo history and a cached
//! composite rendered through an abstract drawing context.

pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod history;
pub mod listener;
pub mod style;
pub mod surface;
pub mod tools;

#[cfg(test)]
mod testing;

pub use config::SketchConfig;
pub use context::{Backend, BlendMode, DrawContext, Paint};
pub use error::{SketchError, SketchResult};
pub use geometry::{RenderMode, aspect_fit_rect, aspect_fit_size, placement_rect};
pub use history::History;
pub use listener::{DrawSource, NoopListener, SketchListener};
pub use style::{StyleColor, ToolStyle};
pub use surface::{Redraw, SketchSurface};
pub use tools::{DrawingTool, PenOptions, Tool, ToolId, ToolKind, ToolOptions, ToolVariant};

// Re-export the geometry and color types used throughout the API.
pub use image;
pub use kurbo;
pub use peniko;
