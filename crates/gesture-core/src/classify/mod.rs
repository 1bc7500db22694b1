//! Stateful gesture classification.
//!
//! The [`GestureClassifier`] converts raw inputs from two independent
//! channels into the fixed [`GestureAction`] vocabulary:
//!
//! - **Remote tokens** – a trivial lookup over the wire vocabulary.
//!   Unrecognized tokens are logged and dropped, never surfaced as errors.
//! - **Local pointer drags** – net displacement over a drag session,
//!   classified against a 100-unit threshold with a 0.5 s double-swipe-up
//!   debounce window.
//! - **Discrete key triggers** – polled once per tick; confirm, the held
//!   adjust control, and the double-tap toggle with its 0.7 s window.
//!
//! # Time
//!
//! The classifier never reads a clock.  Every time-dependent entry point
//! takes the caller's elapsed process time (`Duration` since consumer-loop
//! start), which keeps the debounce rules deterministic and directly
//! testable.
//!
//! # Threading
//!
//! The classifier is single-threaded by construction: remote tokens reach
//! it only after the dispatch queue has moved them onto the consumer
//! context, and local input is produced on that context in the first place.

pub mod discrete;
pub mod drag;
pub mod token;

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{GestureAction, GestureToken, TiltFeedback, Vec2};
use drag::DragSession;

pub use discrete::InputSample;

/// Minimum net displacement, in pointer units, for a drag to count as a
/// swipe.  A delta of exactly this magnitude is *not* a swipe.
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// Window within which a second qualifying swipe-up becomes a double swipe.
pub const DOUBLE_SWIPE_WINDOW: Duration = Duration::from_millis(500);

/// Window within which a second toggle press becomes a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(700);

/// Rate at which the held adjust control sweeps: the triangle wave input is
/// `elapsed_seconds * ADJUST_RATE`.
pub const ADJUST_RATE: f32 = 0.2;

/// Stateful classifier for both gesture input channels.
///
/// Owns the ephemeral drag session, the swipe-up and tap debounce timers,
/// and the current dark-mode flag (shared between the OPEN_PALM/FIST tokens
/// and the double-tap toggle so both channels agree on "current").
#[derive(Debug, Default)]
pub struct GestureClassifier {
    /// In-flight drag, if any.  At most one exists at a time.
    drag: Option<DragSession>,
    /// Elapsed time of the last qualifying swipe-up, for double-swipe
    /// detection.  `None` means no window is armed.
    last_swipe_up: Option<Duration>,
    /// Elapsed time of the last lone toggle press, for double-tap detection.
    last_tap: Option<Duration>,
    /// Current dark-mode state as last emitted toward the UI.
    dark_mode: bool,
}

impl GestureClassifier {
    /// Creates a classifier with no armed timers and dark mode off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dark-mode flag as last emitted.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    // ── Remote-token channel ──────────────────────────────────────────────

    /// Classifies a remote token.
    ///
    /// Known tokens map through the fixed lookup; an unrecognized token is
    /// dropped with exactly one diagnostic log entry and yields no action.
    pub fn classify_token(&mut self, token: &GestureToken) -> Option<GestureAction> {
        match token::token_action(token.as_str()) {
            Some(action) => {
                if let GestureAction::SetDarkMode(dark) = action {
                    self.dark_mode = dark;
                }
                Some(action)
            }
            None => {
                warn!(%token, "dropping unrecognized gesture token");
                None
            }
        }
    }

    // ── Pointer-drag channel ──────────────────────────────────────────────

    /// Opens a drag session at `position`.
    ///
    /// If a session is already open it is stale (the matching end event was
    /// lost) and is discarded first; this is a defensive reset, not an error.
    pub fn drag_begin(&mut self, position: Vec2) {
        if self.drag.is_some() {
            debug!("discarding stale drag session on new drag-begin");
        }
        self.drag = Some(DragSession::new(position));
    }

    /// Records a pointer move and returns the tilt hint for the current
    /// displacement.  Moves without an open session are ignored.
    pub fn drag_move(&mut self, position: Vec2) -> TiltFeedback {
        match self.drag.as_mut() {
            Some(session) => session.update(position),
            None => TiltFeedback::Neutral,
        }
    }

    /// Closes the drag session and classifies its net displacement.
    ///
    /// Vertical wins the dominance tie (`|delta.y| >= |delta.x|`); within
    /// the dominant axis the displacement must strictly exceed
    /// [`SWIPE_THRESHOLD`], so the exact-threshold case produces no action.
    /// The caller is responsible for resetting tilt feedback to neutral.
    pub fn drag_end(&mut self, position: Vec2, now: Duration) -> Option<GestureAction> {
        let delta = self.drag.take()?.finish(position);

        if delta.y.abs() >= delta.x.abs() {
            if delta.y > SWIPE_THRESHOLD {
                Some(self.evaluate_swipe_up(now))
            } else if delta.y < -SWIPE_THRESHOLD {
                Some(GestureAction::ShowHome)
            } else {
                None
            }
        } else if delta.x < -SWIPE_THRESHOLD {
            Some(GestureAction::ShowSettings)
        } else if delta.x > SWIPE_THRESHOLD {
            Some(GestureAction::ShowNotifications)
        } else {
            None
        }
    }

    /// Double-swipe-up debounce: a second qualifying swipe within the
    /// window becomes quick actions and *disarms* the timer, so a third
    /// rapid swipe starts a fresh pair rather than chaining combos.
    fn evaluate_swipe_up(&mut self, now: Duration) -> GestureAction {
        match self.last_swipe_up {
            Some(last) if now.saturating_sub(last) < DOUBLE_SWIPE_WINDOW => {
                self.last_swipe_up = None;
                GestureAction::ShowQuickActions
            }
            _ => {
                self.last_swipe_up = Some(now);
                GestureAction::ShowMessages
            }
        }
    }

    // ── Discrete key-trigger channel ──────────────────────────────────────

    /// Processes one tick's worth of discrete input signals.
    ///
    /// May emit several actions in one tick (e.g. confirm pressed while
    /// adjust is held); they are returned in a fixed order and must all be
    /// dispatched, never merged or skipped.
    pub fn tick(&mut self, now: Duration, sample: InputSample) -> Vec<GestureAction> {
        let mut actions = Vec::new();
        if sample.confirm_pressed {
            actions.push(GestureAction::ConfirmSelection);
        }
        if sample.adjust_held {
            let amount = discrete::ping_pong(now.as_secs_f32() * ADJUST_RATE, 1.0);
            actions.push(GestureAction::AdjustControl(amount));
        }
        if sample.toggle_pressed {
            actions.push(self.evaluate_tap(now));
        }
        actions
    }

    /// Double-tap evaluator: a second press within the window toggles dark
    /// mode and disarms the timer; a lone press arms the timer and emits
    /// the "tap again" hint.
    fn evaluate_tap(&mut self, now: Duration) -> GestureAction {
        match self.last_tap {
            Some(last) if now.saturating_sub(last) < DOUBLE_TAP_WINDOW => {
                self.last_tap = None;
                self.dark_mode = !self.dark_mode;
                GestureAction::SetDarkMode(self.dark_mode)
            }
            _ => {
                self.last_tap = Some(now);
                GestureAction::HandleDoubleTap
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    /// Drives a complete drag from the origin to `end`, returning the
    /// classification.
    fn drag(classifier: &mut GestureClassifier, end: Vec2, now: Duration) -> Option<GestureAction> {
        classifier.drag_begin(Vec2::new(0.0, 0.0));
        classifier.drag_move(end);
        classifier.drag_end(end, now)
    }

    // ── Token channel ─────────────────────────────────────────────────────

    #[test]
    fn test_known_token_classifies_to_action() {
        let mut c = GestureClassifier::new();
        let action = c.classify_token(&GestureToken::new("SWIPE_LEFT"));
        assert_eq!(action, Some(GestureAction::ShowSettings));
    }

    #[test]
    fn test_unknown_token_is_dropped() {
        let mut c = GestureClassifier::new();
        assert_eq!(c.classify_token(&GestureToken::new("WAVE")), None);
    }

    #[test]
    fn test_open_palm_token_updates_dark_mode_state() {
        // Arrange
        let mut c = GestureClassifier::new();
        assert!(!c.dark_mode());

        // Act
        c.classify_token(&GestureToken::new("OPEN_PALM"));

        // Assert
        assert!(c.dark_mode());
    }

    // ── Drag channel ──────────────────────────────────────────────────────

    #[test]
    fn test_swipe_up_emits_show_messages() {
        let mut c = GestureClassifier::new();
        let action = drag(&mut c, Vec2::new(10.0, 150.0), secs(1.0));
        assert_eq!(action, Some(GestureAction::ShowMessages));
    }

    #[test]
    fn test_swipe_down_emits_show_home() {
        let mut c = GestureClassifier::new();
        let action = drag(&mut c, Vec2::new(-20.0, -180.0), secs(1.0));
        assert_eq!(action, Some(GestureAction::ShowHome));
    }

    #[test]
    fn test_swipe_left_emits_show_settings() {
        let mut c = GestureClassifier::new();
        let action = drag(&mut c, Vec2::new(-140.0, 30.0), secs(1.0));
        assert_eq!(action, Some(GestureAction::ShowSettings));
    }

    #[test]
    fn test_swipe_right_emits_show_notifications() {
        let mut c = GestureClassifier::new();
        let action = drag(&mut c, Vec2::new(120.0, -5.0), secs(1.0));
        assert_eq!(action, Some(GestureAction::ShowNotifications));
    }

    #[test]
    fn test_sub_threshold_drag_emits_nothing() {
        let mut c = GestureClassifier::new();
        assert_eq!(drag(&mut c, Vec2::new(99.0, 40.0), secs(1.0)), None);
        assert_eq!(drag(&mut c, Vec2::new(-60.0, 100.0), secs(2.0)), None);
    }

    #[test]
    fn test_exact_threshold_is_not_a_swipe() {
        // Magnitude exactly 100 on the dominant axis: no action.
        let mut c = GestureClassifier::new();
        assert_eq!(drag(&mut c, Vec2::new(0.0, 100.0), secs(1.0)), None);
        assert_eq!(drag(&mut c, Vec2::new(100.0, 0.0), secs(2.0)), None);
        assert_eq!(drag(&mut c, Vec2::new(0.0, -100.0), secs(3.0)), None);
    }

    #[test]
    fn test_axis_dominance_tie_goes_vertical() {
        // |dx| == |dy|, both past threshold: classified on the vertical axis.
        let mut c = GestureClassifier::new();
        let action = drag(&mut c, Vec2::new(150.0, 150.0), secs(1.0));
        assert_eq!(action, Some(GestureAction::ShowMessages));
    }

    #[test]
    fn test_double_swipe_up_within_window_emits_quick_actions() {
        // Arrange
        let mut c = GestureClassifier::new();

        // Act: two qualifying swipe-ups 0.3 s apart
        let first = drag(&mut c, Vec2::new(0.0, 150.0), secs(1.0));
        let second = drag(&mut c, Vec2::new(0.0, 150.0), secs(1.3));

        // Assert
        assert_eq!(first, Some(GestureAction::ShowMessages));
        assert_eq!(second, Some(GestureAction::ShowQuickActions));
    }

    #[test]
    fn test_double_swipe_combo_does_not_chain() {
        // A third rapid swipe-up after a combo must start a fresh pair.
        let mut c = GestureClassifier::new();
        drag(&mut c, Vec2::new(0.0, 150.0), secs(1.0));
        drag(&mut c, Vec2::new(0.0, 150.0), secs(1.3));
        let third = drag(&mut c, Vec2::new(0.0, 150.0), secs(1.5));
        assert_eq!(third, Some(GestureAction::ShowMessages));
    }

    #[test]
    fn test_slow_second_swipe_up_is_a_fresh_show_messages() {
        let mut c = GestureClassifier::new();
        drag(&mut c, Vec2::new(0.0, 150.0), secs(1.0));
        let second = drag(&mut c, Vec2::new(0.0, 150.0), secs(1.6));
        assert_eq!(second, Some(GestureAction::ShowMessages));
    }

    #[test]
    fn test_drag_move_without_session_is_neutral() {
        let mut c = GestureClassifier::new();
        assert_eq!(c.drag_move(Vec2::new(50.0, 50.0)), TiltFeedback::Neutral);
    }

    #[test]
    fn test_drag_end_without_session_is_no_action() {
        let mut c = GestureClassifier::new();
        assert_eq!(c.drag_end(Vec2::new(0.0, 500.0), secs(1.0)), None);
    }

    #[test]
    fn test_second_begin_discards_stale_session() {
        // Arrange: a session that would classify as a huge swipe up
        let mut c = GestureClassifier::new();
        c.drag_begin(Vec2::new(0.0, -500.0));

        // Act: a new begin re-anchors the session
        c.drag_begin(Vec2::new(0.0, 0.0));
        let action = c.drag_end(Vec2::new(0.0, 10.0), secs(1.0));

        // Assert: classified against the new anchor, not the stale one
        assert_eq!(action, None);
    }

    // ── Discrete channel ──────────────────────────────────────────────────

    #[test]
    fn test_confirm_press_emits_confirm_selection() {
        let mut c = GestureClassifier::new();
        let sample = InputSample { confirm_pressed: true, ..Default::default() };
        assert_eq!(c.tick(secs(0.1), sample), vec![GestureAction::ConfirmSelection]);
    }

    #[test]
    fn test_idle_sample_emits_nothing() {
        let mut c = GestureClassifier::new();
        assert!(c.tick(secs(0.1), InputSample::default()).is_empty());
    }

    #[test]
    fn test_adjust_held_emits_triangle_wave_value() {
        let mut c = GestureClassifier::new();
        let sample = InputSample { adjust_held: true, ..Default::default() };

        // elapsed 2.5 s * rate 0.2 = 0.5 on the rising edge of the wave
        let actions = c.tick(secs(2.5), sample);
        assert_eq!(actions, vec![GestureAction::AdjustControl(0.5)]);

        // elapsed 5 s * 0.2 = 1.0, the peak
        let actions = c.tick(secs(5.0), sample);
        assert_eq!(actions, vec![GestureAction::AdjustControl(1.0)]);
    }

    #[test]
    fn test_double_tap_within_window_toggles_once() {
        // Arrange
        let mut c = GestureClassifier::new();
        let sample = InputSample { toggle_pressed: true, ..Default::default() };

        // Act: two presses 0.3 s apart
        let first = c.tick(secs(1.0), sample);
        let second = c.tick(secs(1.3), sample);

        // Assert: one hint, then exactly one toggle to dark
        assert_eq!(first, vec![GestureAction::HandleDoubleTap]);
        assert_eq!(second, vec![GestureAction::SetDarkMode(true)]);
        assert!(c.dark_mode());
    }

    #[test]
    fn test_slow_taps_emit_two_hints_and_no_toggle() {
        let mut c = GestureClassifier::new();
        let sample = InputSample { toggle_pressed: true, ..Default::default() };

        let first = c.tick(secs(1.0), sample);
        let second = c.tick(secs(2.0), sample);

        assert_eq!(first, vec![GestureAction::HandleDoubleTap]);
        assert_eq!(second, vec![GestureAction::HandleDoubleTap]);
        assert!(!c.dark_mode());
    }

    #[test]
    fn test_completed_double_tap_disarms_the_timer() {
        // A third rapid press after a toggle is a fresh lone tap.
        let mut c = GestureClassifier::new();
        let sample = InputSample { toggle_pressed: true, ..Default::default() };
        c.tick(secs(1.0), sample);
        c.tick(secs(1.3), sample); // toggles to dark
        let third = c.tick(secs(1.5), sample);
        assert_eq!(third, vec![GestureAction::HandleDoubleTap]);
        assert!(c.dark_mode(), "lone tap must not revert the toggle");
    }

    #[test]
    fn test_double_tap_respects_token_driven_dark_mode() {
        // OPEN_PALM sets dark mode; the next double tap must toggle it off.
        let mut c = GestureClassifier::new();
        c.classify_token(&GestureToken::new("OPEN_PALM"));
        let sample = InputSample { toggle_pressed: true, ..Default::default() };
        c.tick(secs(1.0), sample);
        let second = c.tick(secs(1.2), sample);
        assert_eq!(second, vec![GestureAction::SetDarkMode(false)]);
    }

    #[test]
    fn test_simultaneous_triggers_emit_all_actions_in_order() {
        let mut c = GestureClassifier::new();
        let sample = InputSample {
            confirm_pressed: true,
            adjust_held: true,
            toggle_pressed: true,
        };

        let actions = c.tick(secs(0.0), sample);

        assert_eq!(
            actions,
            vec![
                GestureAction::ConfirmSelection,
                GestureAction::AdjustControl(0.0),
                GestureAction::HandleDoubleTap,
            ]
        );
    }
}
