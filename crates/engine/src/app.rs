//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::Localizer;
use crate::use_cases::dialogs::DialogFactory;
use crate::use_cases::navigation::SessionRegistry;

/// Main application state.
///
/// Passed to HTTP/WebSocket handlers via Axum state.
pub struct App {
    pub config: EngineConfig,
    pub dialogs: DialogFactory,
    pub sessions: SessionRegistry,
}

impl App {
    pub fn new(config: EngineConfig, localizer: Arc<dyn Localizer>, dialogs: DialogFactory) -> Self {
        let sessions = SessionRegistry::new(localizer);
        Self {
            config,
            dialogs,
            sessions,
        }
    }
}
