//! Error classification sent to the bridge.

use serde::{Deserialize, Serialize};

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Message could not be parsed
    ParseError,
    /// Request was well-formed but invalid (bad id, missing hello)
    BadRequest,
    /// No dialog session is open for this viewer
    NoSession,
    /// The session failed and was closed
    SessionFailed,
    /// Internal server error
    InternalError,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}
