//! Open dialog sessions, one per viewer.
//!
//! Each session sits behind its own async mutex so that building, sending
//! and response handling for one viewer never overlap, while different
//! viewers proceed independently. The registry is also the error boundary:
//! a session whose dialog, navigation or transport fails is logged, the
//! viewer gets a generic notice and the session is closed.

use std::sync::Arc;

use dashmap::DashMap;
use guildforms_domain::{LocaleTag, PlayerId};
use guildforms_shared::ResponsePayload;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{DialogTransport, Localizer};
use crate::use_cases::dialogs::{Dialog, Viewer, KEY_GENERIC_ERROR};

use super::session::{FormSession, ResponseOutcome, SessionError};

type SharedSession = Arc<Mutex<FormSession>>;

pub struct SessionRegistry {
    sessions: DashMap<PlayerId, SharedSession>,
    localizer: Arc<dyn Localizer>,
}

impl SessionRegistry {
    pub fn new(localizer: Arc<dyn Localizer>) -> Self {
        Self {
            sessions: DashMap::new(),
            localizer,
        }
    }

    /// Start a session for `viewer` with `root` as its first dialog,
    /// replacing any session the viewer already has.
    pub async fn open(
        &self,
        viewer: Viewer,
        root: Dialog,
        transport: Arc<dyn DialogTransport>,
    ) -> Result<(), SessionError> {
        let viewer_id = viewer.id;
        if let Some((_, previous)) = self.sessions.remove(&viewer_id) {
            tracing::info!(viewer_id = %viewer_id, "Replacing open dialog session");
            previous.lock().await.teardown();
        }

        let session = Arc::new(Mutex::new(FormSession::new(
            viewer,
            root,
            self.localizer.clone(),
            transport,
        )));
        let mut guard = session.lock().await;
        self.sessions.insert(viewer_id, session.clone());

        let result = guard.start().await;
        if let Err(e) = result {
            self.fail(&session, &mut guard, &e).await;
            return Err(e);
        }
        Ok(())
    }

    /// Hand a response to the viewer's session.
    pub async fn deliver(
        &self,
        viewer_id: PlayerId,
        dialog_id: u64,
        payload: ResponsePayload,
    ) -> Result<ResponseOutcome, SessionError> {
        let session = self.get(viewer_id).ok_or(SessionError::NoSession)?;
        let mut guard = session.lock().await;

        match guard.handle_response(dialog_id, payload).await {
            Ok(ResponseOutcome::Closed) => {
                self.remove(viewer_id, &session);
                Ok(ResponseOutcome::Closed)
            }
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.fail(&session, &mut guard, &e).await;
                Err(e)
            }
        }
    }

    /// Close the viewer's session on request and notify the bridge.
    pub async fn close(&self, viewer_id: PlayerId) -> Result<(), SessionError> {
        let session = self.get(viewer_id).ok_or(SessionError::NoSession)?;
        let mut guard = session.lock().await;
        self.remove(viewer_id, &session);
        guard.close().await
    }

    /// Drop the viewer's session without notifying anyone; the bridge is gone.
    pub async fn discard(&self, viewer_id: PlayerId) {
        if let Some(session) = self.get(viewer_id) {
            let mut guard = session.lock().await;
            self.remove(viewer_id, &session);
            guard.teardown();
            tracing::debug!(viewer_id = %viewer_id, "Discarded dialog session after disconnect");
        }
    }

    /// Switch the viewer's open session, if any, to `locale`.
    pub async fn update_locale(&self, viewer_id: PlayerId, locale: LocaleTag) {
        if let Some(session) = self.get(viewer_id) {
            session.lock().await.set_locale(locale);
        }
    }

    pub fn is_open(&self, viewer_id: PlayerId) -> bool {
        self.sessions.contains_key(&viewer_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn get(&self, viewer_id: PlayerId) -> Option<SharedSession> {
        self.sessions.get(&viewer_id).map(|entry| entry.value().clone())
    }

    /// Remove `session` if it is still the viewer's current one.
    fn remove(&self, viewer_id: PlayerId, session: &SharedSession) {
        self.sessions
            .remove_if(&viewer_id, |_, current| Arc::ptr_eq(current, session));
    }

    async fn fail(&self, session: &SharedSession, guard: &mut FormSession, error: &SessionError) {
        let viewer = guard.viewer().clone();
        tracing::error!(
            viewer_id = %viewer.id,
            error = %error,
            "Dialog session failed; closing"
        );
        self.remove(viewer.id, session);

        let notice = self.localizer.resolve(&viewer.locale, KEY_GENERIC_ERROR, &[]);
        let transport = guard.transport().clone();
        if let Err(e) = transport.send_notice(viewer.id, notice).await {
            tracing::debug!(viewer_id = %viewer.id, error = %e, "Could not deliver error notice");
        }
        if let Err(e) = guard.close().await {
            tracing::debug!(viewer_id = %viewer.id, error = %e, "Could not deliver session close");
        }
    }
}
