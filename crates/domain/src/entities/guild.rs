//! Guild entity

use serde::{Deserialize, Serialize};

use crate::ids::GuildId;

/// A guild as exposed by the guild service. Only the fields dialogs render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: GuildId,
    pub name: String,
}

impl Guild {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GuildId::new(),
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: GuildId) -> Self {
        self.id = id;
        self
    }
}
