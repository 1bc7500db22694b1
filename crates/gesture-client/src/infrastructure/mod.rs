//! Infrastructure adapters for the gesture client.
//!
//! - `network` - the resilient WebSocket connection to the gesture server.
//! - `local_input` - the polled local pointer/keyboard input seam.
//! - `ui_bridge` - stand-in collaborator implementations of `UiActions`.

pub mod local_input;
pub mod network;
pub mod ui_bridge;
