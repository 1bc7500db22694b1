//! Local input seam: pointer drags and polled key triggers.
//!
//! Local gestures already arrive on the consumer thread, so unlike the
//! remote channel they need no queue; the consumer loop polls a
//! [`LocalInputSource`] once per scheduling tick and feeds the result
//! straight into the application layer.
//!
//! The concrete source is owned by the embedding application (a scene
//! framework, a windowing library, a test script).  This module ships two
//! implementations: [`IdleInputSource`] for the standalone binary and a
//! scripted source for tests.

pub mod mock;

use gesture_core::{InputSample, Vec2};

pub use mock::ScriptedInputSource;

/// One pointer event observed on the consumer thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down; opens a drag session at this position.
    Began(Vec2),
    /// Pointer moved while down.
    Moved(Vec2),
    /// Pointer went up; closes the drag session at this position.
    Ended(Vec2),
}

/// Everything the local input produced since the previous tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Pointer events, in the order the consumer context observed them.
    pub pointer: Vec<PointerEvent>,
    /// Snapshot of the three discrete key-trigger signals.
    pub discrete: InputSample,
}

/// Source of local input, sampled once per scheduling tick.
pub trait LocalInputSource: Send {
    /// Returns the input observed since the previous poll.
    fn poll(&mut self) -> InputFrame;
}

/// A source that never produces input.
///
/// Used by the standalone binary, where all gestures come from the remote
/// transport; an embedding UI replaces this with a real adapter.
#[derive(Debug, Default)]
pub struct IdleInputSource;

impl LocalInputSource for IdleInputSource {
    fn poll(&mut self) -> InputFrame {
        InputFrame::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_source_produces_empty_frames() {
        let mut source = IdleInputSource;
        let frame = source.poll();
        assert!(frame.pointer.is_empty());
        assert_eq!(frame.discrete, InputSample::default());
    }
}
