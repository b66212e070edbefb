use std::sync::Arc;

use guildforms_domain::{BudgetAllocation, BudgetCategory, BudgetStatus, GuildId};
use guildforms_shared::{DialogDescription, ResponsePayload};

use crate::infrastructure::ports::{GuildBank, GuildDirectory};

use super::{DialogContext, DialogError, NavigationInstruction, KEY_REFRESH};

const BUTTON_REFRESH: usize = 0;

/// Balance and per-category budget overview. Read-only.
pub struct GuildBankBudgetDialog {
    guild_id: GuildId,
    guilds: Arc<dyn GuildDirectory>,
    bank: Arc<dyn GuildBank>,
}

impl GuildBankBudgetDialog {
    pub fn new(guild_id: GuildId, guilds: Arc<dyn GuildDirectory>, bank: Arc<dyn GuildBank>) -> Self {
        Self {
            guild_id,
            guilds,
            bank,
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
        let balance = self.bank.balance(self.guild_id).await?;
        let budgets = self.bank.budgets(self.guild_id).await?;

        let mut description = DialogDescription::new(ctx.text_with("bank.budget.title", &[name]))
            .line(ctx.text("bank.budget.description"))
            .line(ctx.text_with("bank.balance", &[balance.to_string()]));

        for category in BudgetCategory::ALL {
            let allocation = budgets
                .iter()
                .find(|budget| budget.category == category)
                .cloned()
                .unwrap_or_else(|| BudgetAllocation::new(category, 0, 0));
            description = category_section(ctx, description, &allocation);
        }

        Ok(description
            .button(ctx.text(KEY_REFRESH))
            .button(ctx.back_or_close_label()))
    }

    pub(super) fn on_response(
        &self,
        ctx: &DialogContext<'_>,
        payload: ResponsePayload,
    ) -> NavigationInstruction {
        match payload {
            ResponsePayload::Accepted { values } if values.clicked_button() == Some(BUTTON_REFRESH) => {
                NavigationInstruction::Stay
            }
            _ => ctx.back_or_close(),
        }
    }
}

fn category_section(
    ctx: &DialogContext<'_>,
    description: DialogDescription,
    allocation: &BudgetAllocation,
) -> DialogDescription {
    let category_name = ctx.text(&format!(
        "bank.budget.category.{}",
        allocation.category.as_str()
    ));
    let status_key = match allocation.status() {
        BudgetStatus::OverBudget => "bank.budget.status.over_budget",
        BudgetStatus::NearLimit => "bank.budget.status.near_limit",
        BudgetStatus::WithinLimit => "bank.budget.status.within_limit",
    };
    let usage = format!("{:.0}", allocation.usage_percentage());

    description
        .line(ctx.text_with("bank.budget.category", &[category_name]))
        .line(ctx.text_with(
            "bank.budget.allocated",
            &[allocation.allocated.to_string()],
        ))
        .line(ctx.text_with("bank.budget.spent", &[allocation.spent.to_string()]))
        .line(ctx.text_with(
            "bank.budget.remaining",
            &[allocation.remaining().to_string()],
        ))
        .line(ctx.text_with(status_key, &[usage]))
}
