//! gesture-client library entry point.
//!
//! Re-exports the public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does gesture-client do?
//!
//! The client connects to a local gesture-detection server over a
//! WebSocket and turns the discrete gesture tokens it receives - together
//! with local pointer drags and key triggers - into application actions:
//!
//! 1. A background task owns the WebSocket connection and survives
//!    network flakiness with a connect-timeout/retry state machine.
//! 2. Received tokens are handed to a dispatch queue, never to the UI
//!    directly, because the receive loop runs off the consumer thread.
//! 3. A consumer tick loop drains the queue, polls local input, and runs
//!    the classifier and router from `gesture-core` on a single thread.

/// Application layer: use cases wiring the core pipeline to adapters.
pub mod application;

/// Infrastructure layer: network transport, local input, and UI bridge.
pub mod infrastructure;
