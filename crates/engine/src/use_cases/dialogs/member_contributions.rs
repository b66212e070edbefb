use std::cmp::Ordering;
use std::sync::Arc;

use guildforms_domain::{GuildId, MemberContribution};
use guildforms_shared::{DialogDescription, ResponsePayload};

use crate::infrastructure::ports::{GuildBank, GuildDirectory, PlayerDirectory};

use super::{DialogContext, DialogError, NavigationInstruction, KEY_REFRESH};

const BUTTON_REFRESH: usize = 0;

/// Number of contributors listed.
pub const TOP_CONTRIBUTORS: usize = 10;

/// Leaderboard of members by net contribution to the guild bank.
pub struct MemberContributionsDialog {
    guild_id: GuildId,
    guilds: Arc<dyn GuildDirectory>,
    bank: Arc<dyn GuildBank>,
    players: Arc<dyn PlayerDirectory>,
}

impl MemberContributionsDialog {
    pub fn new(
        guild_id: GuildId,
        guilds: Arc<dyn GuildDirectory>,
        bank: Arc<dyn GuildBank>,
        players: Arc<dyn PlayerDirectory>,
    ) -> Self {
        Self {
            guild_id,
            guilds,
            bank,
            players,
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
        let contributions = top_contributors(self.bank.member_contributions(self.guild_id).await?);

        let mut description =
            DialogDescription::new(ctx.text_with("bank.contributions.title", &[name]));

        if contributions.is_empty() {
            description = description.line(ctx.text("bank.contributions.none"));
        } else {
            description = description.line(ctx.text("bank.contributions.header"));
            for (rank, contribution) in contributions.iter().enumerate() {
                let player = self
                    .players
                    .player_name(contribution.player_id)
                    .await?
                    .unwrap_or_else(|| ctx.unknown());
                let net = contribution.net();
                let entry_key = match net.cmp(&0) {
                    Ordering::Greater => "bank.contributions.entry.positive",
                    Ordering::Less => "bank.contributions.entry.negative",
                    Ordering::Equal => "bank.contributions.entry.even",
                };
                description = description
                    .line(ctx.text_with(
                        entry_key,
                        &[(rank + 1).to_string(), player, net.to_string()],
                    ))
                    .line(ctx.text_with(
                        "bank.contributions.detail",
                        &[
                            contribution.total_deposits.to_string(),
                            contribution.total_withdrawals.to_string(),
                        ],
                    ));
            }
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

/// Highest net first, at most [`TOP_CONTRIBUTORS`]. Ties keep their input order.
fn top_contributors(mut contributions: Vec<MemberContribution>) -> Vec<MemberContribution> {
    contributions.sort_by_key(|contribution| std::cmp::Reverse(contribution.net()));
    contributions.truncate(TOP_CONTRIBUTORS);
    contributions
}

#[cfg(test)]
mod tests {
    use guildforms_domain::PlayerId;

    use super::*;
    use crate::infrastructure::ports::{MockGuildBank, MockGuildDirectory, MockPlayerDirectory};
    use crate::test_fixtures::TestContext;

    fn dialog(
        contributions: Vec<MemberContribution>,
        players: MockPlayerDirectory,
    ) -> MemberContributionsDialog {
        let mut guilds = MockGuildDirectory::new();
        guilds.expect_guild().returning(|_| Ok(None));
        let mut bank = MockGuildBank::new();
        bank.expect_member_contributions()
            .returning(move |_| Ok(contributions.clone()));
        MemberContributionsDialog::new(
            GuildId::new(),
            Arc::new(guilds),
            Arc::new(bank),
            Arc::new(players),
        )
    }

    #[test]
    fn orders_by_net_and_keeps_top_ten() {
        let contributions: Vec<_> = (0..15)
            .map(|i| MemberContribution::new(PlayerId::new(), i * 10, 0))
            .collect();

        let top = top_contributors(contributions);

        assert_eq!(top.len(), TOP_CONTRIBUTORS);
        assert_eq!(top[0].net(), 140);
        assert_eq!(top[9].net(), 50);
    }

    #[tokio::test]
    async fn extreme_totals_render_clamped_net() {
        let env = TestContext::new();
        let mut players = MockPlayerDirectory::new();
        players.expect_player_name().returning(|_| Ok(None));

        let description = dialog(
            vec![
                MemberContribution::new(PlayerId::new(), 5, 0),
                MemberContribution::new(PlayerId::new(), i64::MAX, -1),
            ],
            players,
        )
        .build(&env.ctx(2))
        .await
        .unwrap();

        assert_eq!(
            description.body[1].text,
            format!("§f#1 Unknown: §a+{}", i64::MAX)
        );
    }

    #[tokio::test]
    async fn lists_ranked_entries_with_names() {
        let env = TestContext::new();
        let rowan = PlayerId::new();
        let ghost = PlayerId::new();
        let mut players = MockPlayerDirectory::new();
        players
            .expect_player_name()
            .returning(move |id| Ok((id == rowan).then(|| "Rowan".to_string())));

        let description = dialog(
            vec![
                MemberContribution::new(ghost, 10, 60),
                MemberContribution::new(rowan, 300, 50),
            ],
            players,
        )
        .build(&env.ctx(2))
        .await
        .unwrap();

        assert_eq!(description.title, "Member Contributions - Unknown");
        assert_eq!(
            description.body_text(),
            [
                "§6Top contributors",
                "§f#1 Rowan: §a+250",
                "§7    Deposits: 300  Withdrawals: 50",
                "§f#2 Unknown: §c-50",
                "§7    Deposits: 10  Withdrawals: 60",
            ]
            .join("\n")
        );
    }

    #[tokio::test]
    async fn empty_guild_shows_none_line() {
        let env = TestContext::new();
        let mut players = MockPlayerDirectory::new();
        players.expect_player_name().never();

        let description = dialog(vec![], players).build(&env.ctx(2)).await.unwrap();

        assert_eq!(description.body_text(), "§7No contributions recorded yet.");
        assert_eq!(description.button_labels(), vec!["§eRefresh", "§cBack"]);
    }

    #[tokio::test]
    async fn refresh_stays() {
        let env = TestContext::new();
        let dialog = dialog(vec![], MockPlayerDirectory::new());
        assert!(matches!(
            dialog.on_response(&env.ctx(2), ResponsePayload::button(0)),
            NavigationInstruction::Stay
        ));
        assert!(matches!(
            dialog.on_response(&env.ctx(2), ResponsePayload::Closed),
            NavigationInstruction::GoBack
        ));
    }
}
