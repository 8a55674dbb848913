//! Linear undo/redo history of whole-collection snapshots.
//!
//! The history is a stack of immutable snapshots plus a cursor. Recording
//! drops everything after the cursor, so once a new change lands after an
//! undo, the undone states are gone for good. Undo and redo only move the
//! cursor.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::trace;

use crate::doc::Shape;

/// An immutable copy of the whole shape collection at one point in time.
pub type Snapshot = Vec<Shape>;

/// Undo/redo stack. Always holds at least one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    stack: Vec<Snapshot>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self { stack: vec![Snapshot::new()], index: 0 }
    }
}

impl History {
    /// A history holding a single empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `snapshot` after the cursor, discarding any redo tail.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.stack.truncate(self.index + 1);
        self.stack.push(snapshot);
        self.index = self.stack.len() - 1;
    }

    /// Step back one snapshot. Returns `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.index == 0 {
            trace!("undo at start of history; ignoring");
            return None;
        }
        self.index -= 1;
        self.stack.get(self.index)
    }

    /// Step forward one snapshot. Returns `None` when already at the newest.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.index + 1 >= self.stack.len() {
            trace!("redo at end of history; ignoring");
            return None;
        }
        self.index += 1;
        self.stack.get(self.index)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.stack.len()
    }

    /// Cursor position; `0` is the initial empty snapshot.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of snapshots, including the initial one.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }
}
