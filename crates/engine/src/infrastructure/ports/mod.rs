//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Domain services (claims, guild bank, player directory)
//! - Localization catalogs
//! - The bridge connection a session renders to

mod error;
mod facades;
mod localization;
mod transport;

pub use error::{FacadeError, TransportError};
pub use facades::{ClaimDirectory, GuildBank, GuildDirectory, PlayerDirectory};
pub use localization::Localizer;
pub use transport::DialogTransport;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use facades::{MockClaimDirectory, MockGuildBank, MockGuildDirectory, MockPlayerDirectory};
