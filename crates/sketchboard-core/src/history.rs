//! Committed shapes and the undo/redo discipline.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Vec2};

/// Ordered list of committed shapes plus a redo buffer.
///
/// History is append-only except for undo (pop from the end) and redo
/// (push back the most recently undone shape). Any new commit clears the
/// redo buffer. At most one shape is selected at a time.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Committed shapes in insertion order (back to front).
    shapes: Vec<Shape>,
    /// Undone shapes; the last element is redone first.
    redo_stack: Vec<Shape>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and clear the redo buffer.
    ///
    /// Degenerate shapes (both path points identical) are dropped silently.
    /// Returns true if the shape was committed.
    pub fn commit(&mut self, shape: Shape) -> bool {
        if shape.is_degenerate() {
            log::debug!("Dropping degenerate {:?} at {:?}", shape.kind, shape.path[0]);
            return false;
        }
        if shape.selected {
            self.clear_selection();
        }
        log::debug!("Committed {:?} {}", shape.kind, shape.id());
        self.shapes.push(shape);
        self.redo_stack.clear();
        true
    }

    /// Undo the last commit.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(mut shape) = self.shapes.pop() {
            shape.selected = false;
            self.redo_stack.push(shape);
            true
        } else {
            false
        }
    }

    /// Redo the last undone commit.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(shape) = self.redo_stack.pop() {
            self.shapes.push(shape);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop everything in the redo buffer.
    pub fn invalidate_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Select exactly one shape, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<ShapeId>) {
        for shape in &mut self.shapes {
            shape.selected = Some(shape.id()) == id;
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.select(None);
    }

    /// Get the selected shape, if any.
    pub fn selected(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.selected)
    }

    /// Translate a shape's path in place.
    /// Returns false if no shape with that id is in history.
    pub fn mutate_path(&mut self, id: ShapeId, delta: Vec2) -> bool {
        match self.get_mut(id) {
            Some(shape) => {
                shape.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Find the first shape (oldest first) containing the point.
    ///
    /// Overlapping shapes resolve to the earliest-drawn one.
    pub fn find_at(&self, point: Point) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.contains(point))
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Committed shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Undone shapes; the last element is the next one to be redone.
    pub fn redo_shapes(&self) -> &[Shape] {
        &self.redo_stack
    }

    /// Check if history is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
