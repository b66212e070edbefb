use std::sync::Arc;

use guildforms_domain::ClaimId;
use guildforms_shared::{DialogDescription, ResponsePayload};

use crate::infrastructure::ports::{ClaimDirectory, PlayerDirectory};

use super::{
    DialogContext, DialogError, DialogFactory, NavigationInstruction, PlaceholderFeature,
};

const BUTTON_RENAME: usize = 0;
const BUTTON_TRUST: usize = 1;

/// Hub for a single claim.
pub struct ClaimManagementDialog {
    claim_id: ClaimId,
    claims: Arc<dyn ClaimDirectory>,
    players: Arc<dyn PlayerDirectory>,
    factory: DialogFactory,
}

impl ClaimManagementDialog {
    pub fn new(
        claim_id: ClaimId,
        claims: Arc<dyn ClaimDirectory>,
        players: Arc<dyn PlayerDirectory>,
        factory: DialogFactory,
    ) -> Self {
        Self {
            claim_id,
            claims,
            players,
            factory,
        }
    }

    pub fn claim_id(&self) -> ClaimId {
        self.claim_id
    }

    pub(super) async fn build(
        &self,
        ctx: &DialogContext<'_>,
    ) -> Result<DialogDescription, DialogError> {
        let claim = self.claims.claim(self.claim_id).await?;

        let name = claim
            .as_ref()
            .map(|claim| claim.name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ctx.unknown());
        let owner = match &claim {
            Some(claim) => self.players.player_name(claim.owner).await?,
            None => None,
        }
        .unwrap_or_else(|| ctx.unknown());

        let mut description =
            DialogDescription::new(ctx.text_with("claim.management.title", &[name.clone()]))
                .line(ctx.text_with("claim.management.name", &[name]));

        if let Some(text) = claim
            .as_ref()
            .map(|claim| claim.description.trim())
            .filter(|text| !text.is_empty())
        {
            description =
                description.line(ctx.text_with("claim.management.description", &[text.to_string()]));
        }

        Ok(description
            .line(ctx.text_with("claim.management.owner", &[owner]))
            .button(ctx.text("claim.management.rename"))
            .button(ctx.text("claim.management.trust"))
            .button(ctx.back_or_close_label()))
    }

    pub(super) fn on_response(
        &self,
        ctx: &DialogContext<'_>,
        payload: ResponsePayload,
    ) -> NavigationInstruction {
        match payload {
            ResponsePayload::Accepted { values } => match values.clicked_button() {
                Some(BUTTON_RENAME) => {
                    NavigationInstruction::Push(self.factory.claim_rename(self.claim_id))
                }
                Some(BUTTON_TRUST) => NavigationInstruction::Push(
                    self.factory.placeholder(PlaceholderFeature::ClaimTrust, false),
                ),
                _ => ctx.back_or_close(),
            },
            ResponsePayload::Closed | ResponsePayload::Invalid => ctx.back_or_close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use guildforms_domain::{Claim, PlayerId};

    use super::*;
    use crate::test_fixtures::{FacadeMocks, TestContext};
    use crate::use_cases::dialogs::{Dialog, DialogKind};

    fn dialog_for(claim: Option<Claim>, owner_name: Option<&'static str>) -> (ClaimId, Dialog) {
        let claim_id = claim.as_ref().map(|c| c.id).unwrap_or_default();
        let mut mocks = FacadeMocks::new();
        mocks
            .claims
            .expect_claim()
            .withf(move |id| *id == claim_id)
            .returning(move |_| Ok(claim.clone()));
        mocks
            .players
            .expect_player_name()
            .returning(move |_| Ok(owner_name.map(str::to_string)));
        (claim_id, mocks.into_factory().claim_management(claim_id))
    }

    #[tokio::test]
    async fn renders_claim_fields_and_owner() {
        let env = TestContext::new();
        let claim = Claim::new(PlayerId::new(), "Treehouse").with_description("By the river");
        let (_, dialog) = dialog_for(Some(claim), Some("Rowan"));

        let description = dialog.build(&env.ctx(1)).await.unwrap();

        assert_eq!(description.title, "Claim Management - Treehouse");
        assert_eq!(
            description.body_text(),
            "§6Claim: §fTreehouse\n§7By the river\n§7Owner: §fRowan"
        );
        assert_eq!(
            description.button_labels(),
            vec!["Rename Claim", "Trust Management", "§cClose"]
        );
    }

    #[tokio::test]
    async fn when_owner_unresolvable_then_renders_unknown() {
        let env = TestContext::new();
        let claim = Claim::new(PlayerId::new(), "Treehouse");
        let (_, dialog) = dialog_for(Some(claim), None);

        let description = dialog.build(&env.ctx(2)).await.unwrap();

        assert!(description.body_text().ends_with("§7Owner: §fUnknown"));
        assert_eq!(description.button_labels()[2], "§cBack");
    }

    #[tokio::test]
    async fn when_claim_missing_then_renders_unknown_name() {
        let env = TestContext::new();
        let (_, dialog) = dialog_for(None, None);

        let description = dialog.build(&env.ctx(1)).await.unwrap();

        assert_eq!(description.title, "Claim Management - Unknown");
        assert_eq!(description.body.len(), 2);
    }

    #[tokio::test]
    async fn buttons_push_rename_and_trust() {
        let env = TestContext::new();
        let claim = Claim::new(PlayerId::new(), "Treehouse");
        let (claim_id, dialog) = dialog_for(Some(claim), None);

        match dialog
            .on_response(&env.ctx(1), ResponsePayload::button(0))
            .await
            .unwrap()
        {
            NavigationInstruction::Push(Dialog::ClaimRename(rename)) => {
                assert_eq!(rename.claim_id(), claim_id)
            }
            other => panic!("expected rename push, got {:?}", other),
        }

        match dialog
            .on_response(&env.ctx(1), ResponsePayload::button(1))
            .await
            .unwrap()
        {
            NavigationInstruction::Push(pushed) => {
                assert_eq!(pushed.kind(), DialogKind::Placeholder)
            }
            other => panic!("expected placeholder push, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn dismissal_closes_at_root_and_goes_back_when_nested() {
        let env = TestContext::new();
        let (_, dialog) = dialog_for(None, None);

        for payload in [ResponsePayload::Closed, ResponsePayload::Invalid] {
            let at_root = dialog.on_response(&env.ctx(1), payload.clone()).await.unwrap();
            assert!(matches!(at_root, NavigationInstruction::CloseSession));

            let nested = dialog.on_response(&env.ctx(3), payload).await.unwrap();
            assert!(matches!(nested, NavigationInstruction::GoBack));
        }
    }
}
