//! Stand-in implementations of the UI collaborator trait.
//!
//! The real presentation layer (tweening, on-screen text, audio) lives in
//! the embedding application; the core only ever talks to it through
//! [`UiActions`].  This module provides the two adapters the client crate
//! itself needs:
//!
//! - [`LoggingUi`] - logs every action; used by the standalone binary so
//!   the client is runnable and observable without a scene framework.
//! - [`RecordingUi`] - records every action; used by tests to assert on
//!   exactly what reached the collaborator, and in what order.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use gesture_core::{GestureAction, TiltFeedback, UiActions};

// ── Logging adapter ───────────────────────────────────────────────────────────

/// Collaborator that narrates actions to the log.
#[derive(Debug, Default)]
pub struct LoggingUi;

impl LoggingUi {
    pub fn new() -> Self {
        Self
    }
}

impl UiActions for LoggingUi {
    fn show_messages(&self) {
        info!("screen: Messages");
    }
    fn show_home(&self) {
        info!("screen: Home");
    }
    fn show_settings(&self) {
        info!("screen: Settings");
    }
    fn show_notifications(&self) {
        info!("screen: Notifications");
    }
    fn show_quick_actions(&self) {
        info!("screen: Quick Actions");
    }
    fn confirm_selection(&self) {
        info!("confirmed");
    }
    fn set_dark_mode(&self, dark: bool) {
        info!("{} mode", if dark { "dark" } else { "light" });
    }
    fn adjust_control(&self, amount: f32) {
        info!("brightness: {amount:.2}");
    }
    fn handle_double_tap(&self) {
        info!("tap again...");
    }
    fn tilt_feedback(&self, _tilt: TiltFeedback) {
        // Continuous hint, far too chatty for the log.
    }
}

// ── Recording adapter ─────────────────────────────────────────────────────────

/// Collaborator that records calls for assertions.
///
/// Actions and tilt hints are recorded separately because tilt is a
/// continuous side channel, not part of the discrete action stream.
#[derive(Debug, Default)]
pub struct RecordingUi {
    actions: Mutex<Vec<GestureAction>>,
    tilts: Mutex<Vec<TiltFeedback>>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discrete actions received so far, in order.
    pub fn actions(&self) -> Vec<GestureAction> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Tilt hints received so far, in order.
    pub fn tilts(&self) -> Vec<TiltFeedback> {
        self.tilts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, action: GestureAction) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }
}

impl UiActions for RecordingUi {
    fn show_messages(&self) {
        self.push(GestureAction::ShowMessages);
    }
    fn show_home(&self) {
        self.push(GestureAction::ShowHome);
    }
    fn show_settings(&self) {
        self.push(GestureAction::ShowSettings);
    }
    fn show_notifications(&self) {
        self.push(GestureAction::ShowNotifications);
    }
    fn show_quick_actions(&self) {
        self.push(GestureAction::ShowQuickActions);
    }
    fn confirm_selection(&self) {
        self.push(GestureAction::ConfirmSelection);
    }
    fn set_dark_mode(&self, dark: bool) {
        self.push(GestureAction::SetDarkMode(dark));
    }
    fn adjust_control(&self, amount: f32) {
        self.push(GestureAction::AdjustControl(amount));
    }
    fn handle_double_tap(&self) {
        self.push(GestureAction::HandleDoubleTap);
    }
    fn tilt_feedback(&self, tilt: TiltFeedback) {
        self.tilts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tilt);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
