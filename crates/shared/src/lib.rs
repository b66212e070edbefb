//! GuildForms Protocol - Shared types for the form engine and the Bedrock bridge
//!
//! This crate contains all types exchanged over the bridge connection:
//! - Dialog descriptions (what the bridge renders as a Bedrock form)
//! - Response payloads (what the bridge reports back)
//! - WebSocket message envelopes (`ClientMessage`, `ServerMessage`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and uuid
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` on the wire

pub mod dialog;
pub mod messages;
pub mod responses;

pub use dialog::{DialogDescription, DialogElement, ResponsePayload, ResponseValue, ResponseValues, TextSegment};
pub use messages::{ClientMessage, DialogRequest, ServerMessage};
pub use responses::ErrorCode;
