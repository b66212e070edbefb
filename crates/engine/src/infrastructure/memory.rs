//! In-memory domain façades.
//!
//! Backs every façade port with `DashMap` stores so the engine can run
//! without the game server attached. Stores can be filled from a JSON seed
//! file.

use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use guildforms_domain::{
    BudgetAllocation, Claim, ClaimId, ClaimName, Guild, GuildId, MemberContribution, PlayerId,
};

use crate::infrastructure::ports::{
    ClaimDirectory, FacadeError, GuildBank, GuildDirectory, PlayerDirectory,
};

// =============================================================================
// Seed data
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub players: Vec<SeedPlayer>,
    #[serde(default)]
    pub guilds: Vec<SeedGuild>,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPlayer {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedGuild {
    pub id: GuildId,
    pub name: String,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub budgets: Vec<BudgetAllocation>,
    #[serde(default)]
    pub contributions: Vec<MemberContribution>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid seed file {path}: {message}")]
    Parse { path: String, message: String },
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
            path: display.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| SeedError::Parse {
            path: display,
            message: e.to_string(),
        })
    }
}

// =============================================================================
// Stores
// =============================================================================

/// All façade state for one engine process.
#[derive(Default)]
pub struct InMemoryServices {
    players: DashMap<PlayerId, String>,
    guilds: DashMap<GuildId, Guild>,
    balances: DashMap<GuildId, i64>,
    budgets: DashMap<GuildId, Vec<BudgetAllocation>>,
    contributions: DashMap<GuildId, Vec<MemberContribution>>,
    claims: DashMap<ClaimId, Claim>,
}

impl InMemoryServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let services = Self::new();
        for player in seed.players {
            services.insert_player(player.id, player.name);
        }
        for guild in seed.guilds {
            services.insert_guild(Guild::new(guild.name).with_id(guild.id));
            services.balances.insert(guild.id, guild.balance);
            services.budgets.insert(guild.id, guild.budgets);
            services.contributions.insert(guild.id, guild.contributions);
        }
        for claim in seed.claims {
            services.insert_claim(claim);
        }
        tracing::info!(
            players = services.players.len(),
            guilds = services.guilds.len(),
            claims = services.claims.len(),
            "Seeded in-memory services"
        );
        services
    }

    pub fn insert_player(&self, id: PlayerId, name: impl Into<String>) {
        self.players.insert(id, name.into());
    }

    pub fn insert_guild(&self, guild: Guild) {
        self.guilds.insert(guild.id, guild);
    }

    pub fn insert_claim(&self, claim: Claim) {
        self.claims.insert(claim.id, claim);
    }

    pub fn set_balance(&self, guild_id: GuildId, balance: i64) {
        self.balances.insert(guild_id, balance);
    }

    pub fn set_budgets(&self, guild_id: GuildId, budgets: Vec<BudgetAllocation>) {
        self.budgets.insert(guild_id, budgets);
    }

    pub fn set_contributions(&self, guild_id: GuildId, contributions: Vec<MemberContribution>) {
        self.contributions.insert(guild_id, contributions);
    }

    fn require_guild(&self, guild_id: GuildId) -> Result<(), FacadeError> {
        if self.guilds.contains_key(&guild_id) {
            Ok(())
        } else {
            Err(FacadeError::not_found("Guild", guild_id))
        }
    }
}

#[async_trait]
impl PlayerDirectory for InMemoryServices {
    async fn player_name(&self, id: PlayerId) -> Result<Option<String>, FacadeError> {
        Ok(self.players.get(&id).map(|name| name.value().clone()))
    }
}

#[async_trait]
impl GuildDirectory for InMemoryServices {
    async fn guild(&self, id: GuildId) -> Result<Option<Guild>, FacadeError> {
        Ok(self.guilds.get(&id).map(|guild| guild.value().clone()))
    }
}

#[async_trait]
impl GuildBank for InMemoryServices {
    async fn balance(&self, guild_id: GuildId) -> Result<i64, FacadeError> {
        self.require_guild(guild_id)?;
        Ok(self.balances.get(&guild_id).map(|b| *b.value()).unwrap_or(0))
    }

    async fn budgets(&self, guild_id: GuildId) -> Result<Vec<BudgetAllocation>, FacadeError> {
        self.require_guild(guild_id)?;
        Ok(self
            .budgets
            .get(&guild_id)
            .map(|b| b.value().clone())
            .unwrap_or_default())
    }

    async fn member_contributions(
        &self,
        guild_id: GuildId,
    ) -> Result<Vec<MemberContribution>, FacadeError> {
        self.require_guild(guild_id)?;
        Ok(self
            .contributions
            .get(&guild_id)
            .map(|c| c.value().clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl ClaimDirectory for InMemoryServices {
    async fn claim(&self, id: ClaimId) -> Result<Option<Claim>, FacadeError> {
        Ok(self.claims.get(&id).map(|claim| claim.value().clone()))
    }

    async fn rename(&self, id: ClaimId, name: &ClaimName) -> Result<(), FacadeError> {
        let mut claim = self
            .claims
            .get_mut(&id)
            .ok_or_else(|| FacadeError::not_found("Claim", id))?;
        claim.name = name.as_str().to_string();
        tracing::info!(claim_id = %id, name = %name, "Claim renamed");
        Ok(())
    }
}
