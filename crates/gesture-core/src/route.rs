//! Stateless routing from actions to the UI collaborator.
//!
//! The router exists purely to decouple the classifier from the concrete
//! presentation type: the classifier produces [`GestureAction`] values, and
//! this module turns each one into exactly one call on the injected
//! [`UiActions`] implementation.  No branching logic beyond the direct
//! dispatch, no state of its own.

use std::sync::Arc;

use crate::domain::{GestureAction, TiltFeedback, UiActions};

/// Maps every [`GestureAction`] onto one collaborator call.
pub struct ActionRouter {
    ui: Arc<dyn UiActions>,
}

impl ActionRouter {
    /// Creates a router bound to the given collaborator.
    pub fn new(ui: Arc<dyn UiActions>) -> Self {
        Self { ui }
    }

    /// Dispatches one action.  Total over the vocabulary: every variant
    /// has exactly one target call.
    pub fn dispatch(&self, action: GestureAction) {
        match action {
            GestureAction::ShowMessages => self.ui.show_messages(),
            GestureAction::ShowHome => self.ui.show_home(),
            GestureAction::ShowSettings => self.ui.show_settings(),
            GestureAction::ShowNotifications => self.ui.show_notifications(),
            GestureAction::ShowQuickActions => self.ui.show_quick_actions(),
            GestureAction::ConfirmSelection => self.ui.confirm_selection(),
            GestureAction::SetDarkMode(dark) => self.ui.set_dark_mode(dark),
            GestureAction::AdjustControl(amount) => self.ui.adjust_control(amount),
            GestureAction::HandleDoubleTap => self.ui.handle_double_tap(),
        }
    }

    /// Forwards a tilt hint on the side channel.
    pub fn tilt(&self, tilt: TiltFeedback) {
        self.ui.tilt_feedback(tilt);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
