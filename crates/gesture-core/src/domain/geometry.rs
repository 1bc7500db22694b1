//! Minimal 2-D vector type for pointer positions and drag deltas.
//!
//! Pointer coordinates use the conventions of the embedding UI framework:
//! positive `x` is right, positive `y` is up.  Swipe thresholds compare
//! per-axis magnitudes, so no length/normalisation helpers are needed.

use std::ops::Sub;

/// A 2-D position or displacement in pointer-space units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    /// Component-wise subtraction; `end - start` yields a drag delta.
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
