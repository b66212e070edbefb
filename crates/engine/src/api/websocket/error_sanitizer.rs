//! Error sanitization for bridge-facing messages.
//!
//! Prevents leaking internal details (façade errors, ids, paths) to the bridge.

/// Sanitize an error for bridge consumption.
///
/// Logs the full error server-side, returns a generic message for the bridge.
pub fn sanitize_error<E: std::fmt::Display>(error: &E, context: &str) -> String {
    tracing::error!(
        error = %error,
        context = context,
        "Internal error occurred"
    );

    format!("An error occurred while {}", context)
}

/// Common error messages for bridge consumption.
pub mod messages {
    pub const INVALID_MESSAGE: &str = "Invalid message format";
    pub const NO_SESSION: &str = "No dialog session is open";
    pub const NOT_IDENTIFIED: &str = "Send Hello before using dialogs";
}
