//! Error types for port operations.

/// Domain façade errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FacadeError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The backing service failed - includes operation name for tracing.
    #[error("Service error in {operation}: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },
}

impl FacadeError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create an Unavailable error with operation context.
    pub fn unavailable(operation: &'static str, message: impl ToString) -> Self {
        Self::Unavailable {
            operation,
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Failures delivering messages to the bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Bridge connection closed")]
    Closed,
}
