//! GuildForms Engine library.
//!
//! Stack-based dialog navigation for Bedrock forms, served to a bridge over
//! WebSocket.
//!
//! ## Structure
//!
//! - `use_cases/` - Dialog definitions, the navigation stack and form sessions
//! - `infrastructure/` - Ports, localization catalogs, in-memory façades, config
//! - `api/` - HTTP and WebSocket entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared fixtures for unit and integration tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
