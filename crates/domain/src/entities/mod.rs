//! Domain entities - the fields dialogs read from external services

mod bank;
mod claim;
mod guild;

pub use bank::{BudgetAllocation, BudgetCategory, BudgetStatus, MemberContribution};
pub use claim::Claim;
pub use guild::Guild;
