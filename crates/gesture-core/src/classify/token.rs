//! Fixed lookup from remote gesture tokens to application actions.

use crate::domain::GestureAction;

/// Maps a trimmed token string to its action, or `None` for anything
/// outside the fixed vocabulary.
///
/// This is a pure function: the same token always yields the same action.
/// The stateful wrapper lives on [`GestureClassifier`], which additionally
/// tracks the dark-mode flag and logs dropped tokens.
///
/// [`GestureClassifier`]: crate::classify::GestureClassifier
pub fn token_action(token: &str) -> Option<GestureAction> {
    match token {
        // directional swipes
        "SWIPE_UP" => Some(GestureAction::ShowMessages),
        "SWIPE_DOWN" => Some(GestureAction::ShowHome),
        "SWIPE_LEFT" => Some(GestureAction::ShowSettings),
        "SWIPE_RIGHT" => Some(GestureAction::ShowNotifications),
        // hand shapes
        "PINCH" => Some(GestureAction::ConfirmSelection),
        "OPEN_PALM" => Some(GestureAction::SetDarkMode(true)),
        "FIST" => Some(GestureAction::SetDarkMode(false)),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
