//! Dialog definitions.
//!
//! Every dialog a session can show is a variant of [`Dialog`]. A dialog
//! captures its construction parameters when it is created, builds a fresh
//! [`DialogDescription`] each time it becomes the active stack entry, and
//! interprets the single response to that description.

use std::fmt;

use guildforms_shared::{DialogDescription, ResponsePayload};

use crate::infrastructure::ports::{FacadeError, TransportError};

mod claim_management;
mod claim_rename;
mod context;
mod factory;
mod guild_bank_budget;
mod guild_control_panel;
mod member_contributions;
mod placeholder;

pub use claim_management::ClaimManagementDialog;
pub use claim_rename::ClaimRenameDialog;
pub use context::{DialogContext, Viewer};
pub use factory::DialogFactory;
pub use guild_bank_budget::GuildBankBudgetDialog;
pub use guild_control_panel::GuildControlPanelDialog;
pub use member_contributions::MemberContributionsDialog;
pub use placeholder::{PlaceholderDialog, PlaceholderFeature};

pub(crate) const KEY_BACK: &str = "common.back";
pub(crate) const KEY_CLOSE: &str = "common.close";
pub(crate) const KEY_REFRESH: &str = "common.refresh";
pub(crate) const KEY_UNKNOWN: &str = "common.unknown";
pub(crate) const KEY_GENERIC_ERROR: &str = "error.generic";

/// Stack transition requested by a dialog after handling a response.
#[derive(Debug)]
pub enum NavigationInstruction {
    /// Pop this dialog and re-show the one below it.
    GoBack,
    /// Show a new dialog on top of this one.
    Push(Dialog),
    /// Rebuild and re-show this dialog.
    Stay,
    /// End the viewer's session.
    CloseSession,
}

#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("Facade error: {0}")]
    Facade(#[from] FacadeError),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Discriminant of [`Dialog`], for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    ClaimManagement,
    ClaimRename,
    GuildControlPanel,
    GuildBankBudget,
    MemberContributions,
    Placeholder,
}

/// The closed set of dialogs.
pub enum Dialog {
    ClaimManagement(ClaimManagementDialog),
    ClaimRename(ClaimRenameDialog),
    GuildControlPanel(GuildControlPanelDialog),
    GuildBankBudget(GuildBankBudgetDialog),
    MemberContributions(MemberContributionsDialog),
    Placeholder(PlaceholderDialog),
}

impl Dialog {
    pub fn kind(&self) -> DialogKind {
        match self {
            Self::ClaimManagement(_) => DialogKind::ClaimManagement,
            Self::ClaimRename(_) => DialogKind::ClaimRename,
            Self::GuildControlPanel(_) => DialogKind::GuildControlPanel,
            Self::GuildBankBudget(_) => DialogKind::GuildBankBudget,
            Self::MemberContributions(_) => DialogKind::MemberContributions,
            Self::Placeholder(_) => DialogKind::Placeholder,
        }
    }

    /// Build the description for the current state. Read-only.
    pub async fn build(&self, ctx: &DialogContext<'_>) -> Result<DialogDescription, DialogError> {
        match self {
            Self::ClaimManagement(dialog) => dialog.build(ctx).await,
            Self::ClaimRename(dialog) => dialog.build(ctx).await,
            Self::GuildControlPanel(dialog) => dialog.build(ctx).await,
            Self::GuildBankBudget(dialog) => dialog.build(ctx).await,
            Self::MemberContributions(dialog) => dialog.build(ctx).await,
            Self::Placeholder(dialog) => Ok(dialog.build(ctx)),
        }
    }

    /// Interpret the viewer's response. The only place domain state changes.
    pub async fn on_response(
        &self,
        ctx: &DialogContext<'_>,
        payload: ResponsePayload,
    ) -> Result<NavigationInstruction, DialogError> {
        match self {
            Self::ClaimManagement(dialog) => Ok(dialog.on_response(ctx, payload)),
            Self::ClaimRename(dialog) => dialog.on_response(ctx, payload).await,
            Self::GuildControlPanel(dialog) => Ok(dialog.on_response(ctx, payload)),
            Self::GuildBankBudget(dialog) => Ok(dialog.on_response(ctx, payload)),
            Self::MemberContributions(dialog) => Ok(dialog.on_response(ctx, payload)),
            Self::Placeholder(dialog) => Ok(dialog.on_response(ctx, payload)),
        }
    }
}

impl fmt::Debug for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClaimManagement(d) => f
                .debug_struct("ClaimManagement")
                .field("claim_id", &d.claim_id())
                .finish(),
            Self::ClaimRename(d) => f
                .debug_struct("ClaimRename")
                .field("claim_id", &d.claim_id())
                .finish(),
            Self::GuildControlPanel(d) => f
                .debug_struct("GuildControlPanel")
                .field("guild_id", &d.guild_id())
                .finish(),
            Self::GuildBankBudget(d) => f
                .debug_struct("GuildBankBudget")
                .field("guild_id", &d.guild_id())
                .finish(),
            Self::MemberContributions(d) => f
                .debug_struct("MemberContributions")
                .field("guild_id", &d.guild_id())
                .finish(),
            Self::Placeholder(d) => f
                .debug_struct("Placeholder")
                .field("feature", &d.feature())
                .field("terminal", &d.is_terminal())
                .finish(),
        }
    }
}
