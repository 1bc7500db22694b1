//! Scripted input source for tests.
//!
//! Plays back a pre-built sequence of input frames, one per poll, so test
//! code can drive the consumer loop deterministically without a real
//! pointer or keyboard.

use std::collections::VecDeque;

use gesture_core::{InputSample, Vec2};

use super::{InputFrame, LocalInputSource, PointerEvent};

/// Input source that replays a fixed script.
///
/// Each call to [`poll`](LocalInputSource::poll) pops the next frame;
/// once the script is exhausted it returns idle frames forever.
#[derive(Debug, Default)]
pub struct ScriptedInputSource {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInputSource {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame to the script.
    pub fn push_frame(&mut self, frame: InputFrame) -> &mut Self {
        self.frames.push_back(frame);
        self
    }

    /// Appends a complete drag (begin, one move, end) as three frames.
    pub fn push_drag(&mut self, start: Vec2, end: Vec2) -> &mut Self {
        self.push_frame(InputFrame {
            pointer: vec![PointerEvent::Began(start)],
            ..Default::default()
        })
        .push_frame(InputFrame {
            pointer: vec![PointerEvent::Moved(end)],
            ..Default::default()
        })
        .push_frame(InputFrame {
            pointer: vec![PointerEvent::Ended(end)],
            ..Default::default()
        })
    }

    /// Appends a frame with only discrete signals set.
    pub fn push_keys(&mut self, discrete: InputSample) -> &mut Self {
        self.push_frame(InputFrame {
            discrete,
            ..Default::default()
        })
    }

    /// Frames left in the script.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LocalInputSource for ScriptedInputSource {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or_default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
