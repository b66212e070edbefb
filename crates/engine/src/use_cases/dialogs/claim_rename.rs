use std::sync::Arc;

use guildforms_domain::{ClaimId, ClaimName, MAX_CLAIM_NAME_LENGTH, MIN_CLAIM_NAME_LENGTH};
use guildforms_shared::{DialogDescription, ResponsePayload};

use crate::infrastructure::ports::ClaimDirectory;

use super::{DialogContext, DialogError, NavigationInstruction};

/// Position of the name input in the form.
const INPUT_NAME: usize = 0;

/// Single-input form that renames a claim.
pub struct ClaimRenameDialog {
    claim_id: ClaimId,
    claims: Arc<dyn ClaimDirectory>,
}

impl ClaimRenameDialog {
    pub fn new(claim_id: ClaimId, claims: Arc<dyn ClaimDirectory>) -> Self {
        Self { claim_id, claims }
    }

    pub fn claim_id(&self) -> ClaimId {
        self.claim_id
    }

    pub(super) async fn build(
        &self,
        ctx: &DialogContext<'_>,
    ) -> Result<DialogDescription, DialogError> {
        let current = self
            .claims
            .claim(self.claim_id)
            .await?
            .map(|claim| claim.name);
        let title_name = current.clone().unwrap_or_else(|| ctx.unknown());
        let bounds = [
            MIN_CLAIM_NAME_LENGTH.to_string(),
            MAX_CLAIM_NAME_LENGTH.to_string(),
        ];

        Ok(
            DialogDescription::new(ctx.text_with("claim.rename.title", &[title_name]))
                .line(ctx.text_with("claim.rename.instructions", &bounds))
                .input(
                    ctx.text("claim.rename.label"),
                    ctx.text("claim.rename.placeholder"),
                    current.unwrap_or_default(),
                ),
        )
    }

    pub(super) async fn on_response(
        &self,
        ctx: &DialogContext<'_>,
        payload: ResponsePayload,
    ) -> Result<NavigationInstruction, DialogError> {
        let values = match payload {
            ResponsePayload::Accepted { values } => values,
            ResponsePayload::Closed | ResponsePayload::Invalid => return Ok(ctx.back_or_close()),
        };

        let submitted = values.text(INPUT_NAME).unwrap_or_default();
        let name = match ClaimName::new(submitted) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(claim_id = %self.claim_id, error = %e, "Rejected claim name");
                let bounds = [
                    MIN_CLAIM_NAME_LENGTH.to_string(),
                    MAX_CLAIM_NAME_LENGTH.to_string(),
                ];
                ctx.notify("claim.rename.invalid", &bounds).await?;
                return Ok(ctx.back_or_close());
            }
        };

        let Some(claim) = self.claims.claim(self.claim_id).await? else {
            ctx.notify("claim.not_found", &[]).await?;
            return Ok(ctx.back_or_close());
        };

        if claim.name != name.as_str() {
            self.claims.rename(self.claim_id, &name).await?;
            tracing::info!(
                claim_id = %self.claim_id,
                viewer_id = %ctx.viewer().id,
                name = %name,
                "Claim renamed from dialog"
            );
        }

        ctx.notify("claim.rename.updated", &[name.to_string()]).await?;
        Ok(ctx.back_or_close())
    }
}
