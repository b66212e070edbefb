//! Shared helpers for engine tests.
//!
//! - [`RecordingTransport`] captures everything a session sends to the bridge.
//! - [`TestContext`] owns a viewer, the built-in localizer and a recording
//!   transport, and lends out [`DialogContext`]s.
//! - [`FacadeMocks`] bundles façade mocks into a [`DialogFactory`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use guildforms_domain::{LocaleTag, PlayerId};
use guildforms_shared::DialogDescription;

use crate::infrastructure::localization::CatalogLocalizer;
use crate::infrastructure::ports::{
    DialogTransport, MockClaimDirectory, MockGuildBank, MockGuildDirectory, MockPlayerDirectory,
    TransportError,
};
use crate::use_cases::dialogs::{DialogContext, DialogFactory, Viewer};

// =============================================================================
// Transport
// =============================================================================

/// One message a session handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Dialog {
        dialog_id: u64,
        dialog: DialogDescription,
    },
    Notice(String),
    Closed,
}

#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
    fail: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later send fail as if the bridge had disconnected.
    pub fn disconnect(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn dialogs(&self) -> Vec<(u64, DialogDescription)> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Dialog { dialog_id, dialog } => Some((dialog_id, dialog)),
                _ => None,
            })
            .collect()
    }

    pub fn last_dialog(&self) -> Option<(u64, DialogDescription)> {
        self.dialogs().pop()
    }

    pub fn notices(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Notice(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn closed_count(&self) -> usize {
        self.sent()
            .iter()
            .filter(|sent| matches!(sent, Sent::Closed))
            .count()
    }

    fn record(&self, sent: Sent) -> Result<(), TransportError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransportError::Closed);
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl DialogTransport for RecordingTransport {
    async fn send_dialog(
        &self,
        _viewer: PlayerId,
        dialog_id: u64,
        dialog: DialogDescription,
    ) -> Result<(), TransportError> {
        self.record(Sent::Dialog { dialog_id, dialog })
    }

    async fn send_notice(&self, _viewer: PlayerId, text: String) -> Result<(), TransportError> {
        self.record(Sent::Notice(text))
    }

    async fn send_closed(&self, _viewer: PlayerId) -> Result<(), TransportError> {
        self.record(Sent::Closed)
    }
}

// =============================================================================
// Dialog context
// =============================================================================

pub fn localizer() -> CatalogLocalizer {
    CatalogLocalizer::builtin().unwrap()
}

pub fn viewer() -> Viewer {
    Viewer::new(PlayerId::new(), LocaleTag::english())
}

/// Owns what a [`DialogContext`] borrows.
pub struct TestContext {
    pub viewer: Viewer,
    pub localizer: Arc<CatalogLocalizer>,
    pub transport: Arc<RecordingTransport>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            viewer: viewer(),
            localizer: Arc::new(localizer()),
            transport: Arc::new(RecordingTransport::new()),
        }
    }

    pub fn ctx(&self, depth: usize) -> DialogContext<'_> {
        DialogContext::new(
            &self.viewer,
            self.localizer.as_ref(),
            self.transport.as_ref(),
            depth,
        )
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Façades
// =============================================================================

/// Façade mocks with no expectations; set the ones a test needs.
#[derive(Default)]
pub struct FacadeMocks {
    pub players: MockPlayerDirectory,
    pub guilds: MockGuildDirectory,
    pub bank: MockGuildBank,
    pub claims: MockClaimDirectory,
}

impl FacadeMocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_factory(self) -> DialogFactory {
        DialogFactory::new(
            Arc::new(self.players),
            Arc::new(self.guilds),
            Arc::new(self.bank),
            Arc::new(self.claims),
        )
    }
}
