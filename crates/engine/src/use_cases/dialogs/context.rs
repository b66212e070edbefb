use guildforms_domain::{LocaleTag, PlayerId};

use crate::infrastructure::ports::{DialogTransport, Localizer};

use super::{DialogError, NavigationInstruction, KEY_BACK, KEY_CLOSE, KEY_UNKNOWN};

/// The player a session renders for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: PlayerId,
    pub locale: LocaleTag,
}

impl Viewer {
    pub fn new(id: PlayerId, locale: LocaleTag) -> Self {
        Self { id, locale }
    }
}

/// Everything a dialog may use besides its own façades.
///
/// Created by the session for a single `build` or `on_response` call.
pub struct DialogContext<'a> {
    viewer: &'a Viewer,
    localizer: &'a dyn Localizer,
    transport: &'a dyn DialogTransport,
    depth: usize,
}

impl<'a> DialogContext<'a> {
    pub fn new(
        viewer: &'a Viewer,
        localizer: &'a dyn Localizer,
        transport: &'a dyn DialogTransport,
        depth: usize,
    ) -> Self {
        Self {
            viewer,
            localizer,
            transport,
            depth,
        }
    }

    pub fn viewer(&self) -> &Viewer {
        self.viewer
    }

    /// Number of dialogs on the stack, this one included.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn text(&self, key: &str) -> String {
        self.localizer.resolve(&self.viewer.locale, key, &[])
    }

    pub fn text_with(&self, key: &str, args: &[String]) -> String {
        self.localizer.resolve(&self.viewer.locale, key, args)
    }

    /// Localized stand-in for a name that could not be resolved.
    pub fn unknown(&self) -> String {
        self.text(KEY_UNKNOWN)
    }

    /// Send a localized chat notice to the viewer.
    pub async fn notify(&self, key: &str, args: &[String]) -> Result<(), DialogError> {
        let text = self.text_with(key, args);
        self.transport.send_notice(self.viewer.id, text).await?;
        Ok(())
    }

    /// `GoBack` when there is a dialog to return to, else `CloseSession`.
    pub fn back_or_close(&self) -> NavigationInstruction {
        if self.depth > 1 {
            NavigationInstruction::GoBack
        } else {
            NavigationInstruction::CloseSession
        }
    }

    /// Label matching [`DialogContext::back_or_close`].
    pub fn back_or_close_label(&self) -> String {
        if self.depth > 1 {
            self.text(KEY_BACK)
        } else {
            self.text(KEY_CLOSE)
        }
    }
}
