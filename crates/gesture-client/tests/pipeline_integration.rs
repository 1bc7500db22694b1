//! End-to-end pipeline tests: remote tokens and local input converging
//! on the same collaborator through the full wiring used by `main`.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::SinkExt;
use tokio::net::TcpListener;
use tokio::time::{sleep, timeout};
use tokio_tungstenite::{accept_async, tungstenite::Message};

use gesture_client::application::HandleGesturesUseCase;
use gesture_client::infrastructure::local_input::{LocalInputSource, ScriptedInputSource};
use gesture_client::infrastructure::network::{GestureTransport, TokenSink, TransportConfig};
use gesture_client::infrastructure::ui_bridge::RecordingUi;
use gesture_core::{DispatchQueue, GestureAction, InputSample, UiActions, Vec2};

#[tokio::test]
async fn test_remote_and_local_channels_converge_on_one_collaborator() {
    // Arrange: server sends two tokens (one bogus) and closes.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let url = format!("ws://{}/", listener.local_addr().expect("addr"));
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = accept_async(stream).await.expect("handshake");
        for frame in ["SWIPE_DOWN", "WAVE", "OPEN_PALM"] {
            ws.send(Message::Text(frame.to_string())).await.expect("send");
        }
        ws.close(None).await.ok();
    });

    // The same wiring main() uses, with recording/scripted adapters.
    let ui = Arc::new(RecordingUi::new());
    let queue = Arc::new(DispatchQueue::new());
    let pipeline = Arc::new(Mutex::new(HandleGesturesUseCase::new(
        Arc::clone(&ui) as Arc<dyn UiActions>
    )));
    let sink: TokenSink = {
        let pipeline = Arc::clone(&pipeline);
        Arc::new(move |token| {
            pipeline
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .handle_token(&token);
        })
    };
    let config = TransportConfig {
        server_url: url,
        connect_timeout: Duration::from_secs(2),
        retry_delay: Duration::from_secs(60),
    };
    let handle = GestureTransport::new(config, Arc::clone(&queue), sink).start();

    let mut input = ScriptedInputSource::new();
    input
        .push_drag(Vec2::new(0.0, 0.0), Vec2::new(0.0, 180.0))
        .push_keys(InputSample {
            confirm_pressed: true,
            ..Default::default()
        });

    // Act: run consumer ticks until both channels have been processed.
    let mut now = Duration::ZERO;
    for _ in 0..200 {
        queue.drain_and_run();
        let frame = input.poll();
        pipeline
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .handle_frame(now, frame);
        now += Duration::from_millis(16);
        if ui.actions().len() >= 4 {
            break;
        }
        sleep(Duration::from_millis(5)).await;
    }

    // Assert: both remote tokens (WAVE dropped) and both local gestures
    // reached the collaborator; order within each channel is preserved.
    let actions = ui.actions();
    let remote: Vec<_> = actions
        .iter()
        .filter(|a| matches!(**a, GestureAction::ShowHome | GestureAction::SetDarkMode(true)))
        .collect();
    let local: Vec<_> = actions
        .iter()
        .filter(|a| matches!(**a, GestureAction::ShowMessages | GestureAction::ConfirmSelection))
        .collect();
    assert_eq!(
        remote,
        vec![&GestureAction::ShowHome, &GestureAction::SetDarkMode(true)],
        "remote channel out of order: {actions:?}"
    );
    assert_eq!(
        local,
        vec![&GestureAction::ShowMessages, &GestureAction::ConfirmSelection],
        "local channel out of order: {actions:?}"
    );
    assert_eq!(actions.len(), 4, "no action may be skipped or merged: {actions:?}");

    timeout(Duration::from_secs(2), handle.stop())
        .await
        .expect("stop must complete promptly");
}
