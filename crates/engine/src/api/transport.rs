//! [`DialogTransport`] over a bridge connection's outbound channel.

use async_trait::async_trait;
use guildforms_domain::PlayerId;
use guildforms_shared::{DialogDescription, ServerMessage};
use tokio::sync::mpsc;

use crate::infrastructure::ports::{DialogTransport, TransportError};

/// Queues server messages for the connection's send task.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<ServerMessage>,
}

impl ChannelTransport {
    pub fn new(sender: mpsc::Sender<ServerMessage>) -> Self {
        Self { sender }
    }

    async fn send(&self, viewer: PlayerId, message: ServerMessage) -> Result<(), TransportError> {
        self.sender.send(message).await.map_err(|_| {
            tracing::debug!(viewer_id = %viewer, "Bridge channel closed");
            TransportError::Closed
        })
    }
}

#[async_trait]
impl DialogTransport for ChannelTransport {
    async fn send_dialog(
        &self,
        viewer: PlayerId,
        dialog_id: u64,
        dialog: DialogDescription,
    ) -> Result<(), TransportError> {
        tracing::debug!(viewer_id = %viewer, dialog_id, "Sending dialog");
        self.send(viewer, ServerMessage::ShowDialog { dialog_id, dialog })
            .await
    }

    async fn send_notice(&self, viewer: PlayerId, text: String) -> Result<(), TransportError> {
        self.send(viewer, ServerMessage::Notice { text }).await
    }

    async fn send_closed(&self, viewer: PlayerId) -> Result<(), TransportError> {
        self.send(viewer, ServerMessage::SessionClosed).await
    }
}
