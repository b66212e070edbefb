//! Outbound bridge port.

use async_trait::async_trait;
use guildforms_domain::PlayerId;
use guildforms_shared::DialogDescription;

use super::error::TransportError;

/// Delivers dialogs and notices to one viewer's bridge connection.
#[async_trait]
pub trait DialogTransport: Send + Sync {
    async fn send_dialog(
        &self,
        viewer: PlayerId,
        dialog_id: u64,
        dialog: DialogDescription,
    ) -> Result<(), TransportError>;

    async fn send_notice(&self, viewer: PlayerId, text: String) -> Result<(), TransportError>;

    async fn send_closed(&self, viewer: PlayerId) -> Result<(), TransportError>;
}
