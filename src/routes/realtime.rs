use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use futures::{SinkExt, StreamExt};

use crate::realtime::{ClientMessage, ConnectionId, RealtimeHub};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/ws", get(upgrade))
}

async fn upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.hub))
}

/// Runs one client until either side hangs up. Outbound events and inbound
/// frames are pumped by separate tasks; whichever finishes first tears the
/// other down.
async fn handle_socket(socket: WebSocket, hub: RealtimeHub) {
    let mut subscription = hub.connect();
    let id = subscription.id();
    tracing::info!(
        "[Realtime] Connection {} opened ({} connected)",
        id,
        hub.connection_count()
    );

    let (mut sink, mut stream) = socket.split();

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = subscription.recv().await {
            let frame = match serde_json::to_string(event.as_ref()) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("[Realtime] Failed to serialize {}: {}", event.name(), e);
                    continue;
                }
            };
            if sink.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    let relay_hub = hub.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Text(text) => handle_client_frame(&relay_hub, id, text.as_str()),
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!("[Realtime] Connection {} closed", id);
}

fn handle_client_frame(hub: &RealtimeHub, origin: ConnectionId, frame: &str) {
    match serde_json::from_str::<ClientMessage>(frame) {
        Ok(ClientMessage::SendMessage(payload)) => {
            hub.relay(origin, payload);
        }
        Err(e) => {
            tracing::debug!("[Realtime] Ignoring frame from {}: {}", origin, e);
        }
    }
}
