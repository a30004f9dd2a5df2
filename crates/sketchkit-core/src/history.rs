//! Undo/redo stacks of committed drawing operations.

use crate::tools::Tool;

/// Committed and undone tools, oldest first.
///
/// Undo moves the newest committed item onto the undone stack, redo moves it
/// back. A fresh commit discards everything undone.
#[derive(Debug, Clone)]
pub struct History<T = Tool> {
    committed: Vec<T>,
    undone: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            committed: Vec::new(),
            undone: Vec::new(),
        }
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished operation and clear the redo stack.
    pub fn commit(&mut self, item: T) {
        self.committed.push(item);
        self.undone.clear();
    }

    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(item) => {
                self.undone.push(item);
                true
            }
            None => false,
        }
    }

    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(item) => {
                self.committed.push(item);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    /// Committed operations in replay order.
    pub fn committed(&self) -> &[T] {
        &self.committed
    }

    /// Undone operations; the last one is redone first.
    pub fn undone(&self) -> &[T] {
        &self.undone
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
