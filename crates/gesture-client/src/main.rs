//! Gesture stream client entry point.
//!
//! Wires together the WebSocket transport, the dispatch queue, the
//! classification pipeline, and a logging UI bridge, then runs the
//! consumer tick loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ GestureTransport::start()  -- background connect/receive/retry loop
//!  └─ consumer tick loop (this task)
//!       ├─ DispatchQueue::drain_and_run()  -> queued remote tokens
//!       ├─ LocalInputSource::poll()        -> pointer + key gestures
//!       └─ HandleGesturesUseCase           -> ActionRouter -> UiActions
//! ```
//!
//! The consumer loop is the single designated consumer context: all
//! UI-affecting state is touched only here, one scheduling tick at a
//! time.  The transport never calls the pipeline directly; it enqueues
//! callbacks that this loop drains at tick boundaries, which is what
//! preserves wire order for remote tokens.
//!
//! # Stand-in adapters
//!
//! The binary runs with [`LoggingUi`] and [`IdleInputSource`].  An
//! embedding application replaces both: the UI bridge with its real
//! presentation layer, the input source with its pointer/keyboard
//! adapter.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use clap::Parser;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gesture_client::application::HandleGesturesUseCase;
use gesture_client::infrastructure::{
    local_input::{IdleInputSource, LocalInputSource},
    network::{GestureTransport, TokenSink, TransportConfig},
    ui_bridge::LoggingUi,
};
use gesture_core::{DispatchQueue, UiActions};

/// Command-line arguments for the gesture client.
#[derive(Debug, Parser)]
#[command(name = "gesture-client", about = "Gesture stream client")]
struct Args {
    /// Gesture server host.
    #[arg(long, env = "GESTURE_SERVER_HOST", default_value = "127.0.0.1")]
    server_host: String,

    /// Gesture server port.
    #[arg(long, env = "GESTURE_SERVER_PORT", default_value_t = 8765)]
    server_port: u16,

    /// Consumer loop tick rate in Hz.
    #[arg(long, default_value_t = 60)]
    tick_hz: u32,
}

/// Consumer-loop period for the requested rate.
///
/// Floored at one microsecond: `tokio::time::interval` panics on a
/// zero period, and extreme rates (beyond 1 MHz) would otherwise
/// truncate to zero.
fn tick_period(tick_hz: u32) -> Duration {
    let hz = tick_hz.max(1);
    Duration::from_secs_f64(1.0 / f64::from(hz)).max(Duration::from_micros(1))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("gesture client starting");

    let config = TransportConfig {
        server_url: format!("ws://{}:{}/", args.server_host, args.server_port),
        ..Default::default()
    };
    let tick = tick_period(args.tick_hz);

    // ── Pipeline wiring ───────────────────────────────────────────────────
    let ui: Arc<dyn UiActions> = Arc::new(LoggingUi::new());
    let queue = Arc::new(DispatchQueue::new());
    let pipeline = Arc::new(Mutex::new(HandleGesturesUseCase::new(Arc::clone(&ui))));

    // The callback each remote token is bound to when enqueued.  It runs
    // on this task when the queue is drained, so the std mutex is only
    // ever locked from the consumer context.
    let sink: TokenSink = {
        let pipeline = Arc::clone(&pipeline);
        Arc::new(move |token| {
            pipeline
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .handle_token(&token);
        })
    };

    let transport = GestureTransport::new(config, Arc::clone(&queue), sink);
    let transport_handle = transport.start();

    // ── Ctrl-C handler ────────────────────────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    // ── Consumer tick loop ────────────────────────────────────────────────
    let mut input: Box<dyn LocalInputSource> = Box::new(IdleInputSource);
    let started = Instant::now();
    let mut ticker = tokio::time::interval(tick);
    info!("gesture client ready; connecting to server");

    loop {
        tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                let now = started.elapsed();
                queue.drain_and_run();
                let frame = input.poll();
                pipeline
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .handle_frame(now, frame);
            }
        }
    }

    transport_handle.stop().await;
    info!("gesture client stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_period_matches_common_rates() {
        assert_eq!(tick_period(1), Duration::from_secs(1));
        assert_eq!(tick_period(60), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn test_tick_period_is_never_zero() {
        // Zero and extreme rates must still yield a usable interval period.
        assert!(tick_period(0) > Duration::ZERO);
        assert!(tick_period(1_000_001) > Duration::ZERO);
        assert!(tick_period(u32::MAX) > Duration::ZERO);
    }
}
