use guildforms_shared::{DialogRequest, ResponsePayload};

use super::*;
use crate::api::transport::ChannelTransport;
use crate::api::websocket::error_sanitizer::sanitize_error;
use crate::use_cases::navigation::SessionError;

pub(super) async fn handle_open_dialog(
    state: &WsState,
    connection_id: Uuid,
    request: DialogRequest,
    sender: mpsc::Sender<ServerMessage>,
) -> Option<ServerMessage> {
    let viewer = match require_viewer(state, connection_id).await {
        Ok(viewer) => viewer,
        Err(e) => return Some(e),
    };

    tracing::info!(
        connection_id = %connection_id,
        viewer_id = %viewer.id,
        request = ?request,
        "OpenDialog received"
    );

    let root = state.app.dialogs.open(request);
    let transport = Arc::new(ChannelTransport::new(sender));
    match state.app.sessions.open(viewer, root, transport).await {
        Ok(()) => None,
        Err(e) => Some(error_response(
            ErrorCode::SessionFailed,
            &sanitize_error(&e, "opening the dialog"),
        )),
    }
}

pub(super) async fn handle_dialog_response(
    state: &WsState,
    connection_id: Uuid,
    dialog_id: u64,
    payload: ResponsePayload,
) -> Option<ServerMessage> {
    let viewer = match require_viewer(state, connection_id).await {
        Ok(viewer) => viewer,
        Err(e) => return Some(e),
    };

    match state.app.sessions.deliver(viewer.id, dialog_id, payload).await {
        Ok(outcome) => {
            tracing::debug!(viewer_id = %viewer.id, dialog_id, ?outcome, "Dialog response handled");
            None
        }
        Err(SessionError::NoSession) => {
            Some(error_response(ErrorCode::NoSession, messages::NO_SESSION))
        }
        Err(e) => Some(error_response(
            ErrorCode::SessionFailed,
            &sanitize_error(&e, "handling the dialog response"),
        )),
    }
}

pub(super) async fn handle_close_session(
    state: &WsState,
    connection_id: Uuid,
) -> Option<ServerMessage> {
    let viewer = match require_viewer(state, connection_id).await {
        Ok(viewer) => viewer,
        Err(e) => return Some(e),
    };

    match state.app.sessions.close(viewer.id).await {
        Ok(()) => None,
        Err(SessionError::NoSession) => {
            Some(error_response(ErrorCode::NoSession, messages::NO_SESSION))
        }
        Err(e) => {
            tracing::debug!(viewer_id = %viewer.id, error = %e, "Session closed without notifying bridge");
            None
        }
    }
}
