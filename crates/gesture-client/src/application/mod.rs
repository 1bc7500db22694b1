//! Application layer: use cases for the gesture client.

pub mod handle_gestures;

pub use handle_gestures::HandleGesturesUseCase;
