//! Domain data model shared by both gesture input channels.
//!
//! Everything in this module is a plain value type or a trait: no clocks,
//! no sockets, no interior mutability.  The classifier and router operate
//! exclusively on these types.

pub mod action;
pub mod geometry;
pub mod token;

pub use action::{GestureAction, TiltFeedback, UiActions};
pub use geometry::Vec2;
pub use token::GestureToken;
