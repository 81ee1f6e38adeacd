//! Broadcast chat relay over WebSocket

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::Extension;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::common::{generate_raw_id, SharedState};
use crate::messages::services::ChatHub;

/// GET /ws/chat
pub async fn chat_handler(
    ws: WebSocketUpgrade,
    Extension(state_lock): Extension<SharedState>,
) -> impl IntoResponse {
    let hub = state_lock.read().await.chat_hub.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

async fn handle_socket(socket: WebSocket, hub: ChatHub) {
    let connection_id = generate_raw_id(12);
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    hub.register(connection_id.clone(), tx).await;

    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    let recv_hub = hub.clone();
    let recv_connection_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(frame)) = stream.next().await {
            match frame {
                // Every text frame fans out to the whole room, origin included
                Message::Text(text) => {
                    let delivered = recv_hub.broadcast(Message::Text(text)).await;
                    debug!(
                        connection_id = %recv_connection_id,
                        delivered = delivered,
                        "Relayed chat frame"
                    );
                }
                Message::Close(_) => break,
                // Pings are answered by the protocol layer; the rest is noise
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    }

    hub.unregister(&connection_id).await;
    info!(connection_id = %connection_id, "Chat socket closed");
}
