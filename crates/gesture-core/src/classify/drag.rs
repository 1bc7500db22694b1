//! Ephemeral drag-session state for the pointer channel.
//!
//! A [`DragSession`] spans one pointer-down/pointer-up interaction.  It is
//! created on drag-begin, updated on every move, and consumed on drag-end;
//! the classifier holds at most one at a time.

use crate::domain::{TiltFeedback, Vec2};

/// State of one in-flight pointer drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at drag-begin.
    start: Vec2,
    /// Most recent pointer position.
    last: Vec2,
}

impl DragSession {
    /// Opens a session anchored at the drag-begin position.
    pub fn new(start: Vec2) -> Self {
        Self { start, last: start }
    }

    /// Records a pointer-move and returns the tilt hint for the current
    /// displacement: vertical tilt when `|delta.y|` strictly dominates,
    /// horizontal otherwise.
    pub fn update(&mut self, position: Vec2) -> TiltFeedback {
        self.last = position;
        let delta = self.delta();
        if delta.y.abs() > delta.x.abs() {
            TiltFeedback::Vertical(delta.y)
        } else {
            TiltFeedback::Horizontal(delta.x)
        }
    }

    /// Net displacement since drag-begin.
    pub fn delta(&self) -> Vec2 {
        self.last - self.start
    }

    /// Consumes the session with the final pointer position and returns the
    /// final displacement.
    pub fn finish(mut self, position: Vec2) -> Vec2 {
        self.last = position;
        self.delta()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
