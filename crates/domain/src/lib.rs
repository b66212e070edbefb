//! GuildForms domain layer.
//!
//! Identifiers, the entity fields the dialogs read from external services,
//! and validated value objects. No I/O lives here.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{BudgetAllocation, BudgetCategory, BudgetStatus, Claim, Guild, MemberContribution};
pub use error::DomainError;
pub use ids::{ClaimId, GuildId, PlayerId};
pub use value_objects::{ClaimName, LocaleTag, MAX_CLAIM_NAME_LENGTH, MIN_CLAIM_NAME_LENGTH};
