//! Drawing lifecycle notifications.

use crate::tools::{ToolId, ToolKind};

/// What triggered a draw notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// A pointer gesture using the given tool.
    Gesture { id: ToolId, kind: ToolKind },
    Undo,
    Redo,
}

/// Observer of surface activity. Every method defaults to a no-op and is
/// invoked synchronously from the surface call that caused it.
pub trait SketchListener {
    /// A tool is about to start drawing, or an undo/redo is about to apply.
    fn will_begin_draw(&mut self, _source: DrawSource) {}

    /// A tool was committed, or an undo/redo finished.
    fn did_end_draw(&mut self, _source: DrawSource) {}

    /// Undo or redo availability may have changed.
    fn history_changed(&mut self, _can_undo: bool, _can_redo: bool) {}
}

/// Listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl SketchListener for NoopListener {}
