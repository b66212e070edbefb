use std::sync::Arc;

use guildforms_domain::GuildId;
use guildforms_shared::{DialogDescription, ResponsePayload};

use crate::infrastructure::ports::GuildDirectory;

use super::{
    DialogContext, DialogError, DialogFactory, NavigationInstruction, PlaceholderFeature,
};

const BUTTON_BUDGET: usize = 0;
const BUTTON_CONTRIBUTIONS: usize = 1;
const BUTTON_SECURITY: usize = 2;

/// Hub for a guild's bank screens.
pub struct GuildControlPanelDialog {
    guild_id: GuildId,
    guilds: Arc<dyn GuildDirectory>,
    factory: DialogFactory,
}

impl GuildControlPanelDialog {
    pub fn new(guild_id: GuildId, guilds: Arc<dyn GuildDirectory>, factory: DialogFactory) -> Self {
        Self {
            guild_id,
            guilds,
            factory,
        }
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    pub(super) async fn build(
        &self,
        ctx: &DialogContext<'_>,
    ) -> Result<DialogDescription, DialogError> {
        let name = self
            .guilds
            .guild(self.guild_id)
            .await?
            .map(|guild| guild.name)
            .unwrap_or_else(|| ctx.unknown());

        Ok(
            DialogDescription::new(ctx.text_with("guild.panel.title", &[name.clone()]))
                .line(ctx.text_with("guild.panel.welcome", &[name]))
                .button(ctx.text("guild.panel.budget"))
                .button(ctx.text("guild.panel.contributions"))
                .button(ctx.text("guild.panel.security"))
                .button(ctx.back_or_close_label()),
        )
    }

    pub(super) fn on_response(
        &self,
        ctx: &DialogContext<'_>,
        payload: ResponsePayload,
    ) -> NavigationInstruction {
        let ResponsePayload::Accepted { values } = payload else {
            return ctx.back_or_close();
        };

        match values.clicked_button() {
            Some(BUTTON_BUDGET) => {
                NavigationInstruction::Push(self.factory.guild_bank_budget(self.guild_id))
            }
            Some(BUTTON_CONTRIBUTIONS) => {
                NavigationInstruction::Push(self.factory.member_contributions(self.guild_id))
            }
            Some(BUTTON_SECURITY) => NavigationInstruction::Push(
                self.factory
                    .placeholder(PlaceholderFeature::BankSecurity, false),
            ),
            _ => ctx.back_or_close(),
        }
    }
}
