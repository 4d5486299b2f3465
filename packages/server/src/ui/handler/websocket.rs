//! WebSocket connection handlers.
//!
//! Every accepted socket gets a fresh [`ConnectionId`] and an outbound
//! channel registered with the room store. Inbound text frames are decoded
//! and applied to the store one at a time; undecodable frames are logged
//! and dropped without a reply. When the socket ends, for whatever reason,
//! the connection is removed from every room.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    infrastructure::dto::websocket::parse_client_message,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// When the socket refuses a write the task ends, the receiver is dropped and
/// the room store sees the channel as closed from then on.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    state.store.lock().await.connect(connection_id, tx);
    tracing::info!("Connection '{}' opened", connection_id);

    let (sender, mut receiver) = socket.split();

    // Spawn a task to forward room snapshots to this client
    let mut send_task = pusher_loop(rx, sender);

    // Spawn a task to receive messages from this client
    let state_clone = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_text(&state_clone, &connection_id, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.store.lock().await.disconnect(&connection_id);
    tracing::info!("Connection '{}' closed and removed from all rooms", connection_id);
}

/// Decode one text frame and apply it to the room store.
async fn handle_text(state: &AppState, connection_id: &ConnectionId, text: &str) {
    tracing::trace!("Received text from '{}': {}", connection_id, text);

    match parse_client_message(text) {
        Ok((room_id, command)) => {
            state
                .store
                .lock()
                .await
                .handle_command(connection_id, &room_id, command);
        }
        Err(e) if e.is_ignorable() => {
            tracing::debug!("Ignoring message from '{}': {}", connection_id, e);
        }
        Err(e) => {
            tracing::warn!("Dropping message from '{}': {}", connection_id, e);
        }
    }
}
