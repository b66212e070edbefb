//! Form session dispatcher.
//!
//! One session per viewer. The session alternates between building and
//! sending the active dialog's description and waiting for the viewer's
//! single response to it:
//!
//! ```text
//! AwaitingDescriptionSend --(description sent)--> AwaitingResponse
//! AwaitingResponse --(matching response)--> AwaitingDescriptionSend
//! ```
//!
//! Responses that arrive in any other state, or that quote a dialog id other
//! than the last one sent, are discarded without touching the stack.

use std::sync::Arc;

use guildforms_domain::LocaleTag;
use guildforms_shared::ResponsePayload;

use crate::infrastructure::ports::{DialogTransport, Localizer, TransportError};
use crate::use_cases::dialogs::{Dialog, DialogContext, DialogError, NavigationInstruction, Viewer};

use super::stack::{NavigationError, NavigationStack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// The active dialog's description is being built or sent.
    AwaitingDescriptionSend,
    /// Description `dialog_id` is on screen.
    AwaitingResponse { dialog_id: u64 },
}

/// What became of a delivered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Out of turn or stale; nothing changed.
    Discarded,
    /// Handled; the next description has been sent.
    Continued,
    /// Handled; the session ended.
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
    #[error("Dialog error: {0}")]
    Dialog(#[from] DialogError),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("No dialog session is open for this viewer")]
    NoSession,
}

pub struct FormSession {
    viewer: Viewer,
    stack: NavigationStack<Dialog>,
    state: DispatchState,
    last_dialog_id: u64,
    closed: bool,
    localizer: Arc<dyn Localizer>,
    transport: Arc<dyn DialogTransport>,
}

impl FormSession {
    /// New session with `root` as its only dialog. Nothing is sent until
    /// [`FormSession::start`].
    pub fn new(
        viewer: Viewer,
        root: Dialog,
        localizer: Arc<dyn Localizer>,
        transport: Arc<dyn DialogTransport>,
    ) -> Self {
        Self {
            viewer,
            stack: NavigationStack::new(root),
            state: DispatchState::AwaitingDescriptionSend,
            last_dialog_id: 0,
            closed: false,
            localizer,
            transport,
        }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn current(&self) -> Result<&Dialog, NavigationError> {
        self.stack.current()
    }

    pub fn transport(&self) -> &Arc<dyn DialogTransport> {
        &self.transport
    }

    /// Dialogs built from now on use `locale`; what is on screen stays.
    pub fn set_locale(&mut self, locale: LocaleTag) {
        self.viewer.locale = locale;
    }

    /// Send the root dialog.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        tracing::info!(
            viewer_id = %self.viewer.id,
            dialog = ?self.stack.current()?.kind(),
            "Dialog session started"
        );
        self.render().await
    }

    /// Show `dialog` on top of the current one.
    pub async fn push(&mut self, dialog: Dialog) -> Result<(), SessionError> {
        self.stack.push(dialog);
        self.render().await
    }

    /// Return to the previous dialog, rebuilding it.
    ///
    /// Fails with [`NavigationError::EmptyStack`] on the root dialog.
    pub async fn go_back(&mut self) -> Result<(), SessionError> {
        self.stack.go_back()?;
        self.render().await
    }

    /// Route the viewer's answer to the active dialog and apply the
    /// transition it asks for.
    pub async fn handle_response(
        &mut self,
        dialog_id: u64,
        payload: ResponsePayload,
    ) -> Result<ResponseOutcome, SessionError> {
        match self.state {
            DispatchState::AwaitingResponse { dialog_id: expected }
                if expected == dialog_id && !self.closed => {}
            state => {
                tracing::debug!(
                    viewer_id = %self.viewer.id,
                    dialog_id,
                    state = ?state,
                    "Discarding out-of-turn dialog response"
                );
                return Ok(ResponseOutcome::Discarded);
            }
        }

        self.state = DispatchState::AwaitingDescriptionSend;

        let instruction = {
            let dialog = self.stack.current()?;
            let ctx = DialogContext::new(
                &self.viewer,
                self.localizer.as_ref(),
                self.transport.as_ref(),
                self.stack.depth(),
            );
            dialog.on_response(&ctx, payload).await?
        };

        tracing::debug!(
            viewer_id = %self.viewer.id,
            dialog_id,
            instruction = ?instruction,
            "Dialog response handled"
        );

        match instruction {
            NavigationInstruction::GoBack => self.go_back().await?,
            NavigationInstruction::Push(dialog) => self.push(dialog).await?,
            NavigationInstruction::Stay => self.render().await?,
            NavigationInstruction::CloseSession => {
                self.close().await?;
                return Ok(ResponseOutcome::Closed);
            }
        }
        Ok(ResponseOutcome::Continued)
    }

    /// Tear down the stack and tell the bridge the session ended.
    pub async fn close(&mut self) -> Result<(), SessionError> {
        self.teardown();
        self.transport.send_closed(self.viewer.id).await?;
        Ok(())
    }

    /// Tear down without notifying the bridge, for a bridge that is gone.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        let dropped = self.stack.teardown();
        self.closed = true;
        self.state = DispatchState::AwaitingDescriptionSend;
        tracing::info!(
            viewer_id = %self.viewer.id,
            dialogs = dropped.len(),
            "Dialog session closed"
        );
    }

    async fn render(&mut self) -> Result<(), SessionError> {
        self.state = DispatchState::AwaitingDescriptionSend;

        let description = {
            let dialog = self.stack.current()?;
            let ctx = DialogContext::new(
                &self.viewer,
                self.localizer.as_ref(),
                self.transport.as_ref(),
                self.stack.depth(),
            );
            dialog.build(&ctx).await?
        };

        self.last_dialog_id += 1;
        let dialog_id = self.last_dialog_id;
        self.transport
            .send_dialog(self.viewer.id, dialog_id, description)
            .await?;
        self.state = DispatchState::AwaitingResponse { dialog_id };

        tracing::debug!(
            viewer_id = %self.viewer.id,
            dialog_id,
            depth = self.stack.depth(),
            "Dialog sent"
        );
        Ok(())
    }
}
