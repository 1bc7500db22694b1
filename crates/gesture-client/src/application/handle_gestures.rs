//! HandleGesturesUseCase: runs the classification+routing pipeline.
//!
//! This use case is the single place where both gesture channels meet the
//! UI collaborator.  It owns the stateful [`GestureClassifier`] and the
//! [`ActionRouter`]; the transport reaches it through queued callbacks,
//! the consumer loop calls it directly for local input.  Everything here
//! executes on the consumer context, one call at a time.
//!
//! It depends only on gesture-core types and the [`UiActions`] trait, so
//! it is fully unit-testable with a recording collaborator.

use std::sync::Arc;
use std::time::Duration;

use gesture_core::{
    ActionRouter, GestureClassifier, GestureToken, InputSample, TiltFeedback, UiActions,
};

use crate::infrastructure::local_input::{InputFrame, PointerEvent};

/// Turns tokens, pointer events, and discrete key samples into
/// collaborator calls.
pub struct HandleGesturesUseCase {
    classifier: GestureClassifier,
    router: ActionRouter,
}

impl HandleGesturesUseCase {
    /// Creates the pipeline bound to the given collaborator.
    pub fn new(ui: Arc<dyn UiActions>) -> Self {
        Self {
            classifier: GestureClassifier::new(),
            router: ActionRouter::new(ui),
        }
    }

    /// Handles one remote token (invoked via the dispatch queue).
    pub fn handle_token(&mut self, token: &GestureToken) {
        if let Some(action) = self.classifier.classify_token(token) {
            self.router.dispatch(action);
        }
    }

    /// Handles one local pointer event.  `now` is the elapsed process
    /// time supplied by the consumer loop.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Duration) {
        match event {
            PointerEvent::Began(position) => self.classifier.drag_begin(position),
            PointerEvent::Moved(position) => {
                let tilt = self.classifier.drag_move(position);
                self.router.tilt(tilt);
            }
            PointerEvent::Ended(position) => {
                if let Some(action) = self.classifier.drag_end(position, now) {
                    self.router.dispatch(action);
                }
                // The tilt hint always returns to neutral when a drag ends,
                // whether or not it classified as a swipe.
                self.router.tilt(TiltFeedback::Neutral);
            }
        }
    }

    /// Handles one tick's discrete key sample.
    pub fn handle_keys(&mut self, now: Duration, sample: InputSample) {
        for action in self.classifier.tick(now, sample) {
            self.router.dispatch(action);
        }
    }

    /// Convenience entry point for a whole polled input frame.
    pub fn handle_frame(&mut self, now: Duration, frame: InputFrame) {
        for event in frame.pointer {
            self.handle_pointer(event, now);
        }
        self.handle_keys(now, frame.discrete);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
