//! Stroke list with bounded undo/redo snapshot stacks
//!
//! Snapshots are structural deep copies of the whole stroke list: mutating
//! the live list after a snapshot never alters what undo/redo will
//! restore. Committing any new edit clears the redo stack.

use crate::domain::{Point, Stroke};

#[derive(Clone, Debug)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
    undo_stack: Vec<Vec<Stroke>>,
    redo_stack: Vec<Vec<Stroke>>,
    limit: usize,
}

impl StrokeHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            strokes: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Snapshot the current list, clear redo, and open a new empty stroke
    pub fn begin_stroke(&mut self) {
        self.push_undo_snapshot();
        self.redo_stack.clear();
        self.strokes.push(Stroke::new());
    }

    /// Append a point to the stroke opened by [`begin_stroke`].
    /// No-op when no stroke exists.
    ///
    /// [`begin_stroke`]: Self::begin_stroke
    pub fn extend_active(&mut self, point: Point) {
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(point);
        }
    }

    /// Restore the most recent undo snapshot. No-op when the stack is empty.
    pub fn undo(&mut self) {
        let Some(snapshot) = self.undo_stack.pop() else {
            return;
        };
        self.redo_stack.push(self.strokes.clone());
        self.strokes = snapshot;
    }

    /// Restore the most recent redo snapshot. No-op when the stack is empty.
    pub fn redo(&mut self) {
        let Some(snapshot) = self.redo_stack.pop() else {
            return;
        };
        self.undo_stack.push(self.strokes.clone());
        self.strokes = snapshot;
    }

    /// Empty the stroke list, keeping one undo snapshot of it.
    /// No-op when already empty.
    pub fn clear(&mut self) {
        if self.strokes.is_empty() {
            return;
        }
        self.push_undo_snapshot();
        self.strokes.clear();
        self.redo_stack.clear();
    }

    /// Replace the working list wholesale (shot switch). Undo/redo never
    /// crosses surfaces, so both stacks are dropped.
    pub fn load(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo_snapshot(&mut self) {
        if self.undo_stack.len() >= self.limit {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(self.strokes.clone());
    }
}
