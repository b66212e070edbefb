//! WebSocket message types for engine-bridge communication
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Removing or renaming variants is a breaking change
//! - Unknown variants deserialize to `Unknown` for forward compatibility

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dialog::{DialogDescription, ResponsePayload};
use crate::responses::ErrorCode;

// =============================================================================
// Client Messages (Bridge → Engine)
// =============================================================================

/// Messages from the bridge to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Identify the viewer this connection speaks for
    Hello {
        viewer_id: Uuid,
        /// Client locale such as `en_US`; the server default is used if absent
        #[serde(default)]
        locale: Option<String>,
    },
    /// Open a dialog as the root of a new session
    OpenDialog { request: DialogRequest },
    /// Report the viewer's answer to the dialog with `dialog_id`
    DialogResponse {
        dialog_id: u64,
        payload: ResponsePayload,
    },
    /// Close the viewer's dialog session
    CloseSession,
    /// Keep-alive
    Heartbeat,

    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

/// Dialogs a bridge may open as a session root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dialog", rename_all = "snake_case")]
pub enum DialogRequest {
    ClaimManagement { claim_id: Uuid },
    ClaimRename { claim_id: Uuid },
    GuildControlPanel { guild_id: Uuid },
    GuildBankBudget { guild_id: Uuid },
    MemberContributions { guild_id: Uuid },
    /// Trust management stub for a claim, opened on its own
    ClaimTrust { claim_id: Uuid },
    /// Bank security stub for a guild, opened on its own
    BankSecurity { guild_id: Uuid },
}

// =============================================================================
// Server Messages (Engine → Bridge)
// =============================================================================

/// Messages from the engine to the bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Present a dialog; the answer must quote `dialog_id`
    ShowDialog {
        dialog_id: u64,
        dialog: DialogDescription,
    },
    /// Show a chat-style message to the viewer
    Notice { text: String },
    /// The viewer's dialog session ended
    SessionClosed,
    /// Request failed
    Error { code: ErrorCode, message: String },
    /// Heartbeat reply
    Pong,

    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}
