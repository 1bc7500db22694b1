//! # gesture-core
//!
//! Shared library for the gesture stream client containing the gesture
//! classification logic, the action routing layer, and the cross-thread
//! dispatch queue.
//!
//! This crate is pure logic: it has zero dependencies on OS APIs, UI
//! frameworks, or network sockets.  The `gesture-client` application crate
//! wires it to a real WebSocket transport and a real presentation layer.
//!
//! # Architecture overview
//!
//! Gestures arrive from two independent channels and converge on a single
//! fixed vocabulary of application actions:
//!
//! ```text
//! remote transport ──> GestureToken ──> DispatchQueue ──┐
//!                                                       ├──> GestureClassifier ──> ActionRouter ──> UiActions
//! local pointer/keys ──────────────────────────────────┘
//! ```
//!
//! - **`domain`** – The data model: 2-D vectors, gesture tokens, the
//!   [`GestureAction`] vocabulary, and the [`UiActions`] collaborator trait
//!   that is the sole contract surface toward the presentation layer.
//!
//! - **`classify`** – The stateful [`GestureClassifier`]: converts raw
//!   pointer-drag vectors and raw transport tokens into discrete actions,
//!   applying the 100-unit swipe threshold and the time-window debounce
//!   rules for double-swipe and double-tap.
//!
//! - **`dispatch`** – The [`DispatchQueue`]: a thread-safe, single-consumer
//!   hand-off structure that moves work from the transport's background
//!   task onto the consumer tick loop in strict FIFO order.
//!
//! - **`route`** – The stateless [`ActionRouter`]: maps every action onto
//!   one call on the collaborator trait, decoupling the classifier from
//!   the concrete presentation type.

pub mod classify;
pub mod dispatch;
pub mod domain;
pub mod route;

// Re-export the most-used types at the crate root so callers can write
// `gesture_core::GestureClassifier` instead of the full module path.
pub use classify::{GestureClassifier, InputSample, DOUBLE_SWIPE_WINDOW, DOUBLE_TAP_WINDOW, SWIPE_THRESHOLD};
pub use dispatch::DispatchQueue;
pub use domain::{GestureAction, GestureToken, TiltFeedback, UiActions, Vec2};
pub use route::ActionRouter;
