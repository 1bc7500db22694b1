//! The application-action vocabulary and the UI collaborator trait.
//!
//! [`GestureAction`] is the sole contract surface toward the presentation
//! layer: every gesture, regardless of whether it arrived over the wire or
//! from local input, is normalised into one of these variants before it
//! reaches the UI.  The core never inspects collaborator state; it only
//! invokes side-effecting calls on [`UiActions`].

/// A discrete application action produced by the gesture classifier.
///
/// The vocabulary is fixed: the classifier never invents new actions, and
/// unrecognized inputs produce *no* action rather than an error variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Directional swipe up: open the messages screen.
    ShowMessages,
    /// Directional swipe down: return to the home screen.
    ShowHome,
    /// Directional swipe left: open the settings screen.
    ShowSettings,
    /// Directional swipe right: open the notifications screen.
    ShowNotifications,
    /// Double swipe up within the debounce window: open quick actions.
    ShowQuickActions,
    /// Pinch (remote) or the confirm trigger (local).
    ConfirmSelection,
    /// Explicit dark/light mode selection, or the double-tap toggle result.
    SetDarkMode(bool),
    /// Continuous control value in `[0, 1]`, recomputed every tick while the
    /// adjust trigger is held.
    AdjustControl(f32),
    /// A lone toggle press: the UI shows a "tap again" hint while the tap
    /// timer is armed.
    HandleDoubleTap,
}

/// Continuous tilt-feedback hint reported while a drag is in progress.
///
/// This is a side channel, not a discrete action: it carries the raw
/// dominant-axis drag delta so the presentation layer can tilt whatever it
/// wants by however much it wants.  It is reset to [`Neutral`] when the
/// drag ends.
///
/// [`Neutral`]: TiltFeedback::Neutral
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltFeedback {
    /// No drag in progress (or the drag just ended).
    Neutral,
    /// Vertical-dominant drag; carries `delta.y`.
    Vertical(f32),
    /// Horizontal-dominant drag; carries `delta.x`.
    Horizontal(f32),
}

/// The external UI collaborator interface.
///
/// One method per [`GestureAction`] variant plus the tilt side channel.
/// All methods are side-effecting calls with no return value; the concrete
/// implementation (scene framework, terminal logger, test recorder) is
/// injected where the [`ActionRouter`] is constructed.
///
/// `Send + Sync` is required because the router is shared with callbacks
/// that are created on the transport's background task.
///
/// [`ActionRouter`]: crate::route::ActionRouter
pub trait UiActions: Send + Sync {
    fn show_messages(&self);
    fn show_home(&self);
    fn show_settings(&self);
    fn show_notifications(&self);
    fn show_quick_actions(&self);
    fn confirm_selection(&self);
    fn set_dark_mode(&self, dark: bool);
    fn adjust_control(&self, amount: f32);
    fn handle_double_tap(&self);

    /// Continuous tilt hint while a drag is in progress.  Implementations
    /// that have no tilt affordance may ignore this.
    fn tilt_feedback(&self, tilt: TiltFeedback);
}
