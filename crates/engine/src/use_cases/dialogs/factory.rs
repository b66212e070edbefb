use std::sync::Arc;

use guildforms_domain::{ClaimId, GuildId};
use guildforms_shared::DialogRequest;

use crate::infrastructure::ports::{ClaimDirectory, GuildBank, GuildDirectory, PlayerDirectory};

use super::{
    ClaimManagementDialog, ClaimRenameDialog, Dialog, GuildBankBudgetDialog,
    GuildControlPanelDialog, MemberContributionsDialog, PlaceholderDialog, PlaceholderFeature,
};

/// Builds dialogs with the façades each one needs.
///
/// Hub dialogs hold a clone so they can create the dialogs they navigate to.
#[derive(Clone)]
pub struct DialogFactory {
    players: Arc<dyn PlayerDirectory>,
    guilds: Arc<dyn GuildDirectory>,
    bank: Arc<dyn GuildBank>,
    claims: Arc<dyn ClaimDirectory>,
}

impl DialogFactory {
    pub fn new(
        players: Arc<dyn PlayerDirectory>,
        guilds: Arc<dyn GuildDirectory>,
        bank: Arc<dyn GuildBank>,
        claims: Arc<dyn ClaimDirectory>,
    ) -> Self {
        Self {
            players,
            guilds,
            bank,
            claims,
        }
    }

    /// Factory over one value that implements every façade.
    pub fn from_services<S>(services: Arc<S>) -> Self
    where
        S: PlayerDirectory + GuildDirectory + GuildBank + ClaimDirectory + 'static,
    {
        Self::new(
            services.clone(),
            services.clone(),
            services.clone(),
            services,
        )
    }

    pub fn claim_management(&self, claim_id: ClaimId) -> Dialog {
        Dialog::ClaimManagement(ClaimManagementDialog::new(
            claim_id,
            self.claims.clone(),
            self.players.clone(),
            self.clone(),
        ))
    }

    pub fn claim_rename(&self, claim_id: ClaimId) -> Dialog {
        Dialog::ClaimRename(ClaimRenameDialog::new(claim_id, self.claims.clone()))
    }

    pub fn guild_control_panel(&self, guild_id: GuildId) -> Dialog {
        Dialog::GuildControlPanel(GuildControlPanelDialog::new(
            guild_id,
            self.guilds.clone(),
            self.clone(),
        ))
    }

    pub fn guild_bank_budget(&self, guild_id: GuildId) -> Dialog {
        Dialog::GuildBankBudget(GuildBankBudgetDialog::new(
            guild_id,
            self.guilds.clone(),
            self.bank.clone(),
        ))
    }

    pub fn member_contributions(&self, guild_id: GuildId) -> Dialog {
        Dialog::MemberContributions(MemberContributionsDialog::new(
            guild_id,
            self.guilds.clone(),
            self.bank.clone(),
            self.players.clone(),
        ))
    }

    pub fn placeholder(&self, feature: PlaceholderFeature, terminal: bool) -> Dialog {
        Dialog::Placeholder(PlaceholderDialog::new(feature, terminal))
    }

    /// Root dialog for a bridge request. Stand-alone stubs are terminal.
    pub fn open(&self, request: DialogRequest) -> Dialog {
        match request {
            DialogRequest::ClaimManagement { claim_id } => {
                self.claim_management(ClaimId::from_uuid(claim_id))
            }
            DialogRequest::ClaimRename { claim_id } => {
                self.claim_rename(ClaimId::from_uuid(claim_id))
            }
            DialogRequest::GuildControlPanel { guild_id } => {
                self.guild_control_panel(GuildId::from_uuid(guild_id))
            }
            DialogRequest::GuildBankBudget { guild_id } => {
                self.guild_bank_budget(GuildId::from_uuid(guild_id))
            }
            DialogRequest::MemberContributions { guild_id } => {
                self.member_contributions(GuildId::from_uuid(guild_id))
            }
            DialogRequest::ClaimTrust { claim_id } => {
                tracing::debug!(claim_id = %claim_id, "Opening trust stub");
                self.placeholder(PlaceholderFeature::ClaimTrust, true)
            }
            DialogRequest::BankSecurity { guild_id } => {
                tracing::debug!(guild_id = %guild_id, "Opening bank security stub");
                self.placeholder(PlaceholderFeature::BankSecurity, true)
            }
        }
    }
}
