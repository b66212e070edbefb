//! WebSocket handling for bridge connections.
//!
//! Handles the protocol between the engine and the Bedrock bridge. Each
//! connection speaks for one viewer, identified by `Hello`.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use guildforms_shared::{ClientMessage, ErrorCode, ServerMessage};
use tokio::sync::mpsc;
use uuid::Uuid;

mod ws_dialog;
mod ws_session;

pub mod error_sanitizer;

use super::connections::ConnectionManager;
use crate::app::App;
use crate::use_cases::dialogs::Viewer;

use error_sanitizer::messages;

/// Combined state for WebSocket handlers.
pub struct WsState {
    pub app: Arc<App>,
    pub connections: Arc<ConnectionManager>,
}

/// WebSocket upgrade handler - entry point for bridge connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<WsState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: Arc<WsState>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let connection_id = Uuid::new_v4();

    // Bounded channel for messages to this bridge
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(state.app.config.session_channel_buffer);

    state.connections.register(connection_id).await;

    tracing::info!(connection_id = %connection_id, "WebSocket connection established");

    // Forward messages from the channel to the WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if ws_sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize server message");
                }
            }
        }
    });

    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(text.as_str()) {
                Ok(msg) => {
                    if let Some(response) =
                        handle_message(msg, &state, connection_id, tx.clone()).await
                    {
                        if tx.send(response).await.is_err() {
                            tracing::warn!(
                                connection_id = %connection_id,
                                "Failed to send response, channel closed"
                            );
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(connection_id = %connection_id, error = %e, "Failed to parse message");
                    let _ = tx
                        .send(error_response(ErrorCode::ParseError, messages::INVALID_MESSAGE))
                        .await;
                }
            },
            Ok(Message::Ping(_)) => {
                let _ = tx.try_send(ServerMessage::Pong);
            }
            Ok(Message::Close(_)) => {
                tracing::info!(connection_id = %connection_id, "WebSocket closed by bridge");
                break;
            }
            Err(e) => {
                tracing::error!(connection_id = %connection_id, error = %e, "WebSocket error");
                break;
            }
            _ => {}
        }
    }

    // Clean up: the bridge is gone, so its viewer's session ends silently.
    // The session goes first; once unregistered, another bridge may claim the viewer.
    if let Some(viewer) = state
        .connections
        .get(connection_id)
        .await
        .and_then(|info| info.viewer)
    {
        state.app.sessions.discard(viewer.id).await;
    }
    state.connections.unregister(connection_id).await;
    send_task.abort();

    tracing::info!(connection_id = %connection_id, "WebSocket connection terminated");
}

/// Dispatch a parsed client message to the appropriate handler.
async fn handle_message(
    msg: ClientMessage,
    state: &WsState,
    connection_id: Uuid,
    sender: mpsc::Sender<ServerMessage>,
) -> Option<ServerMessage> {
    match msg {
        ClientMessage::Heartbeat => Some(ServerMessage::Pong),

        ClientMessage::Hello { viewer_id, locale } => {
            ws_session::handle_hello(state, connection_id, viewer_id, locale).await
        }

        ClientMessage::OpenDialog { request } => {
            ws_dialog::handle_open_dialog(state, connection_id, request, sender).await
        }

        ClientMessage::DialogResponse { dialog_id, payload } => {
            ws_dialog::handle_dialog_response(state, connection_id, dialog_id, payload).await
        }

        ClientMessage::CloseSession => ws_dialog::handle_close_session(state, connection_id).await,

        ClientMessage::Unknown => {
            tracing::warn!(connection_id = %connection_id, "Unknown message type received");
            None
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn error_response(code: ErrorCode, message: &str) -> ServerMessage {
    ServerMessage::Error {
        code,
        message: message.to_string(),
    }
}

/// The viewer this connection identified as, or an error response if it has not.
async fn require_viewer(state: &WsState, connection_id: Uuid) -> Result<Viewer, ServerMessage> {
    state
        .connections
        .get(connection_id)
        .await
        .and_then(|info| info.viewer)
        .ok_or_else(|| error_response(ErrorCode::BadRequest, messages::NOT_IDENTIFIED))
}

#[cfg(test)]
mod test_support;
