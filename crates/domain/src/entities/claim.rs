//! Claim entity - a protected area of land owned by a player

use serde::{Deserialize, Serialize};

use crate::ids::{ClaimId, PlayerId};

/// A land claim as exposed by the claims service.
///
/// Simple data struct: the claims service owns its invariants. Names read
/// back from the service are displayed as-is; only names written through a
/// rename go through `ClaimName` validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner: PlayerId,
}

impl Claim {
    pub fn new(owner: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id: ClaimId::new(),
            name: name.into(),
            description: String::new(),
            owner,
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
