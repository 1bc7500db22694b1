//! Network infrastructure: the resilient WebSocket client.
//!
//! Owns the single outbound duplex connection to the gesture server and
//! survives network flakiness without ever blocking or corrupting the
//! consumer context.
//!
//! Architecture:
//! - [`GestureTransport`] runs a connect/receive/retry state machine on a
//!   background Tokio task.
//! - Each received text frame is trimmed into a [`GestureToken`] and
//!   enqueued on the shared [`DispatchQueue`] bound to the
//!   classification+routing callback; the receive loop never calls into
//!   the UI itself.
//! - [`ConnectionState`] transitions are published on a `watch` channel;
//!   only the background task writes them, everyone else reads.
//!
//! # Reconnect state machine
//!
//! ```text
//! Disconnected ──connect (5 s timeout)──> Connected ──receive loop──┐
//!      ^                                                            │
//!      └───────────── 1 s retry delay <── clean close / error <─────┘
//! ```
//!
//! Shutdown is cooperative: the `watch` shutdown signal is observed at
//! every suspension point (connect wait, receive wait, retry delay), so
//! [`TransportHandle::stop`] unwinds the loop within one suspension's
//! bound.  The WebSocket stream is owned by the receive loop and dropped
//! on whichever exit path is taken, so the connection resource is
//! released exactly once.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, timeout};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, Message as WsMessage},
    MaybeTlsStream, WebSocketStream,
};
use tracing::{debug, error, info, warn};

use gesture_core::{DispatchQueue, GestureToken};

/// The established client-side WebSocket stream type.
type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// The classification+routing callback the transport binds each token to.
///
/// Invoked on the consumer context when the queue is drained, never on
/// the transport's background task.
pub type TokenSink = Arc<dyn Fn(GestureToken) + Send + Sync>;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Configuration for the connection to the gesture server.
///
/// Plain struct, no global state; `Default` is suitable for local
/// development against the bundled detection server.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// WebSocket URL of the gesture server.
    pub server_url: String,
    /// Bound on each connect attempt.
    pub connect_timeout: Duration,
    /// Fixed delay between reconnect attempts.
    pub retry_delay: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            server_url: "ws://127.0.0.1:8765/".to_string(),
            connect_timeout: Duration::from_secs(5),
            retry_delay: Duration::from_secs(1),
        }
    }
}

// ── States, errors, and outcomes ──────────────────────────────────────────────

/// Lifecycle state of the transport connection.
///
/// Mutated only by the background task; observable everywhere through
/// [`TransportHandle::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection; idle or waiting out the retry delay.
    Disconnected,
    /// A connect attempt is in flight.
    Connecting,
    /// Connection established; the receive loop is running.
    Connected,
    /// Shutdown requested; the loop is unwinding.
    Closing,
}

/// Errors raised inside the transport.  All of them are transient: they
/// are logged and feed the retry path, never terminate the process.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The WebSocket connect (TCP + upgrade handshake) failed.
    #[error("failed to connect to gesture server at {url}: {source}")]
    ConnectFailed {
        url: String,
        #[source]
        source: WsError,
    },
    /// The connect attempt exceeded the configured bound.
    #[error("connect to gesture server at {url} timed out after {timeout:?}")]
    ConnectTimeout { url: String, timeout: Duration },
    /// The established connection failed mid-receive.
    #[error("websocket receive error: {0}")]
    Receive(#[source] WsError),
}

/// Outcome of one connect attempt.
///
/// An explicit value instead of exception-style signalling so the outer
/// loop can distinguish transient-retry causes from a shutdown request.
enum ConnectOutcome {
    /// Handshake completed; the stream is live.
    Connected(Box<WsStream>),
    /// Transient failure or timeout; retry after the delay.
    Failed(TransportError),
    /// Shutdown was requested during the attempt.
    Cancelled,
}

/// Outcome of one receive-loop run, for the same reason.
enum ReceiveExit {
    /// The server initiated a close; not an error.
    ServerClosed,
    /// A read failed; transient, triggers reconnect.
    TransportFault,
    /// Shutdown was requested while waiting for a frame.
    Cancelled,
}

// ── Transport ─────────────────────────────────────────────────────────────────

/// The resilient duplex-connection client.
///
/// At most one instance is active per process; [`start`](Self::start)
/// consumes the transport, so connect attempts are strictly sequential
/// inside the single background task.
pub struct GestureTransport {
    config: TransportConfig,
    queue: Arc<DispatchQueue>,
    sink: TokenSink,
}

impl GestureTransport {
    /// Creates a transport bound to the shared queue and token callback.
    pub fn new(config: TransportConfig, queue: Arc<DispatchQueue>, sink: TokenSink) -> Self {
        Self { config, queue, sink }
    }

    /// Begins the background reconnection loop.
    ///
    /// Returns immediately; all connection work happens on the spawned
    /// task.  Use the returned handle to observe [`ConnectionState`] and
    /// to request shutdown.
    pub fn start(self) -> TransportHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (state_tx, state_rx) = watch::channel(ConnectionState::Disconnected);
        let task = tokio::spawn(self.run(shutdown_rx, state_tx));
        TransportHandle {
            shutdown: shutdown_tx,
            state: state_rx,
            task,
        }
    }

    /// The reconnect state machine.  Runs until shutdown is requested.
    async fn run(self, mut shutdown: watch::Receiver<bool>, state: watch::Sender<ConnectionState>) {
        loop {
            if *shutdown.borrow() {
                break;
            }

            state.send_replace(ConnectionState::Connecting);
            info!(url = %self.config.server_url, "attempting connection to gesture server");

            match self.connect(&mut shutdown).await {
                ConnectOutcome::Connected(ws) => {
                    info!(url = %self.config.server_url, "connected to gesture server");
                    state.send_replace(ConnectionState::Connected);

                    match self.receive_loop(*ws, &mut shutdown).await {
                        ReceiveExit::Cancelled => {
                            state.send_replace(ConnectionState::Closing);
                            break;
                        }
                        ReceiveExit::ServerClosed => {
                            info!("server closed the connection");
                        }
                        ReceiveExit::TransportFault => {
                            // Already logged where it happened; fall through to retry.
                        }
                    }
                    state.send_replace(ConnectionState::Disconnected);
                }
                ConnectOutcome::Cancelled => {
                    state.send_replace(ConnectionState::Closing);
                    break;
                }
                ConnectOutcome::Failed(err) => {
                    warn!("{err}");
                    state.send_replace(ConnectionState::Disconnected);
                }
            }

            info!(delay = ?self.config.retry_delay, "reconnecting after delay");
            if !self.retry_delay_elapsed(&mut shutdown).await {
                state.send_replace(ConnectionState::Closing);
                break;
            }
        }

        state.send_replace(ConnectionState::Disconnected);
        info!("transport loop stopped");
    }

    /// One bounded, cancellable connect attempt.
    async fn connect(&self, shutdown: &mut watch::Receiver<bool>) -> ConnectOutcome {
        tokio::select! {
            // Shutdown wins the race: fail fast without waiting out the
            // timeout.  A dropped sender also counts as shutdown.
            _ = shutdown.changed() => ConnectOutcome::Cancelled,
            result = timeout(self.config.connect_timeout, connect_async(self.config.server_url.as_str())) => {
                match result {
                    Ok(Ok((ws, _response))) => ConnectOutcome::Connected(Box::new(ws)),
                    Ok(Err(source)) => ConnectOutcome::Failed(TransportError::ConnectFailed {
                        url: self.config.server_url.clone(),
                        source,
                    }),
                    Err(_elapsed) => ConnectOutcome::Failed(TransportError::ConnectTimeout {
                        url: self.config.server_url.clone(),
                        timeout: self.config.connect_timeout,
                    }),
                }
            }
        }
    }

    /// Reads frames until the connection ends, one way or another.
    ///
    /// Takes the stream by value: every exit path drops it here, so the
    /// connection resource is released exactly once.
    async fn receive_loop(&self, mut ws: WsStream, shutdown: &mut watch::Receiver<bool>) -> ReceiveExit {
        debug!("listening for gesture frames");
        loop {
            let message = tokio::select! {
                _ = shutdown.changed() => {
                    // Best-effort close handshake; shutdown completes regardless.
                    if let Err(e) = ws.close(None).await {
                        debug!("close during shutdown failed: {e}");
                    }
                    return ReceiveExit::Cancelled;
                }
                message = ws.next() => message,
            };

            match message {
                // Stream ended without a close frame: treat as a clean close.
                None => {
                    debug!("websocket stream ended");
                    return ReceiveExit::ServerClosed;
                }
                Some(Ok(WsMessage::Close(frame))) => {
                    info!(?frame, "server sent close frame");
                    // Acknowledge the close; a failure here is swallowed
                    // because the connection is going away either way.
                    if let Err(e) = ws.close(None).await {
                        debug!("close acknowledgment failed: {e}");
                    }
                    return ReceiveExit::ServerClosed;
                }
                Some(Ok(WsMessage::Text(text))) => self.handle_payload(&text),
                Some(Ok(WsMessage::Binary(payload))) => {
                    // The wire format is UTF-8 text; decode binary frames the
                    // same way and drop anything that is not valid UTF-8.
                    match std::str::from_utf8(&payload) {
                        Ok(text) => self.handle_payload(text),
                        Err(_) => warn!(len = payload.len(), "dropping non-UTF-8 payload"),
                    }
                }
                // Protocol-level keepalive frames; tungstenite answers pings.
                Some(Ok(WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_))) => {}
                Some(Err(source)) => {
                    warn!("{}", TransportError::Receive(source));
                    return ReceiveExit::TransportFault;
                }
            }
        }
    }

    /// Trims one frame payload into a token and enqueues the bound
    /// callback.  Zero-length payloads are ignored.
    fn handle_payload(&self, raw: &str) {
        let token = GestureToken::new(raw);
        if token.is_empty() {
            return;
        }
        debug!(%token, "gesture token received");
        let sink = Arc::clone(&self.sink);
        self.queue.enqueue(move || sink(token));
    }

    /// Waits out the retry delay.  Returns `false` if shutdown was
    /// requested while waiting.
    async fn retry_delay_elapsed(&self, shutdown: &mut watch::Receiver<bool>) -> bool {
        tokio::select! {
            changed = shutdown.changed() => match changed {
                Ok(()) => !*shutdown.borrow(),
                Err(_) => false,
            },
            _ = time::sleep(self.config.retry_delay) => true,
        }
    }
}

// ── Handle ────────────────────────────────────────────────────────────────────

/// Control handle for a started transport.
///
/// Dropping the handle without calling [`stop`](Self::stop) also shuts the
/// loop down (the shutdown sender disappears), but detaches from the task
/// instead of awaiting it.
pub struct TransportHandle {
    shutdown: watch::Sender<bool>,
    state: watch::Receiver<ConnectionState>,
    task: JoinHandle<()>,
}

impl TransportHandle {
    /// Current connection state snapshot.
    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// A watch receiver for state transitions, for callers that want to
    /// await changes instead of polling.
    pub fn state_watch(&self) -> watch::Receiver<ConnectionState> {
        self.state.clone()
    }

    /// Requests cooperative shutdown and waits for the loop to unwind.
    ///
    /// The signal is observed at every suspension point, so this returns
    /// within one suspension's bound.  Join failures are logged and
    /// swallowed; shutdown completes regardless.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            error!("transport task did not join cleanly: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_sink() -> (TokenSink, Arc<Mutex<Vec<GestureToken>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let sink: TokenSink = Arc::new(move |token| {
            seen_clone.lock().unwrap().push(token);
        });
        (sink, seen)
    }

    fn make_transport(sink: TokenSink) -> (GestureTransport, Arc<DispatchQueue>) {
        let queue = Arc::new(DispatchQueue::new());
        let transport = GestureTransport::new(TransportConfig::default(), Arc::clone(&queue), sink);
        (transport, queue)
    }

    #[test]
    fn test_default_config_targets_the_local_gesture_server() {
        let cfg = TransportConfig::default();
        assert_eq!(cfg.server_url, "ws://127.0.0.1:8765/");
        assert_eq!(cfg.connect_timeout, Duration::from_secs(5));
        assert_eq!(cfg.retry_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_handle_payload_trims_and_enqueues_one_callback() {
        // Arrange
        let (sink, seen) = recording_sink();
        let (transport, queue) = make_transport(sink);

        // Act
        transport.handle_payload("  SWIPE_UP \n");
        assert_eq!(queue.len(), 1);
        queue.drain_and_run();

        // Assert
        assert_eq!(*seen.lock().unwrap(), vec![GestureToken::new("SWIPE_UP")]);
    }

    #[test]
    fn test_zero_length_payload_is_ignored() {
        let (sink, seen) = recording_sink();
        let (transport, queue) = make_transport(sink);

        transport.handle_payload("");
        transport.handle_payload("   \t ");

        assert!(queue.is_empty());
        queue.drain_and_run();
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_payloads_enqueue_in_arrival_order() {
        let (sink, seen) = recording_sink();
        let (transport, queue) = make_transport(sink);

        for raw in ["SWIPE_UP", "PINCH", "WAVE"] {
            transport.handle_payload(raw);
        }
        queue.drain_and_run();

        let tokens: Vec<String> = seen
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        assert_eq!(tokens, vec!["SWIPE_UP", "PINCH", "WAVE"]);
    }

    #[tokio::test]
    async fn test_start_returns_handle_in_disconnected_or_connecting_state() {
        // Arrange: a server address that refuses connections immediately
        let (sink, _seen) = recording_sink();
        let queue = Arc::new(DispatchQueue::new());
        let cfg = TransportConfig {
            server_url: "ws://127.0.0.1:1/".to_string(),
            retry_delay: Duration::from_secs(60),
            ..Default::default()
        };
        let transport = GestureTransport::new(cfg, queue, sink);

        // Act: start returns a handle synchronously even though the
        // connect attempt is doomed
        let handle = transport.start();

        // Assert
        assert!(matches!(
            handle.state(),
            ConnectionState::Disconnected | ConnectionState::Connecting
        ));
        handle.stop().await;
    }
}
