//! Domain façade ports.
//!
//! Read-only accessors are called while building dialogs. The single mutating
//! call, [`ClaimDirectory::rename`], is reserved for response handling.

use async_trait::async_trait;
use guildforms_domain::{
    BudgetAllocation, Claim, ClaimId, ClaimName, Guild, GuildId, MemberContribution, PlayerId,
};

use super::error::FacadeError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Display name of a player, `None` if the player is unknown.
    async fn player_name(&self, id: PlayerId) -> Result<Option<String>, FacadeError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    async fn guild(&self, id: GuildId) -> Result<Option<Guild>, FacadeError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuildBank: Send + Sync {
    async fn balance(&self, guild_id: GuildId) -> Result<i64, FacadeError>;

    /// Allocations for the categories the guild has budgeted. Categories
    /// without an allocation are omitted.
    async fn budgets(&self, guild_id: GuildId) -> Result<Vec<BudgetAllocation>, FacadeError>;

    /// Per-member totals in no particular order.
    async fn member_contributions(
        &self,
        guild_id: GuildId,
    ) -> Result<Vec<MemberContribution>, FacadeError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimDirectory: Send + Sync {
    async fn claim(&self, id: ClaimId) -> Result<Option<Claim>, FacadeError>;
    async fn rename(&self, id: ClaimId, name: &ClaimName) -> Result<(), FacadeError>;
}
