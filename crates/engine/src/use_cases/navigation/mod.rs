//! Dialog navigation: the per-viewer stack, the session dispatcher driving
//! it, and the registry of open sessions.

mod registry;
mod session;
mod stack;

pub use registry::SessionRegistry;
pub use session::{DispatchState, FormSession, ResponseOutcome, SessionError};
pub use stack::{NavigationError, NavigationStack};
