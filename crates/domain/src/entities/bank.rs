//! Guild bank read models: budget allocations and member contributions

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;

/// Spending category a guild can budget for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Construction,
    Warfare,
    Events,
    Upkeep,
    MemberRewards,
}

impl BudgetCategory {
    /// All categories in display order.
    pub const ALL: [BudgetCategory; 5] = [
        Self::Construction,
        Self::Warfare,
        Self::Events,
        Self::Upkeep,
        Self::MemberRewards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Construction => "construction",
            Self::Warfare => "warfare",
            Self::Events => "events",
            Self::Upkeep => "upkeep",
            Self::MemberRewards => "member_rewards",
        }
    }
}

impl std::str::FromStr for BudgetCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown budget category: {}", s)))
    }
}

/// How close a category is to its allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    WithinLimit,
    NearLimit,
    OverBudget,
}

/// A category's allocation for the current budget period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub category: BudgetCategory,
    pub allocated: i64,
    pub spent: i64,
}

impl BudgetAllocation {
    pub fn new(category: BudgetCategory, allocated: i64, spent: i64) -> Self {
        Self {
            category,
            allocated,
            spent,
        }
    }

    pub fn remaining(&self) -> i64 {
        self.allocated.saturating_sub(self.spent)
    }

    /// Percentage of the allocation already spent. A zero allocation with any
    /// spending counts as fully used.
    pub fn usage_percentage(&self) -> f64 {
        if self.allocated <= 0 {
            return if self.spent > 0 { 100.0 } else { 0.0 };
        }
        self.spent as f64 / self.allocated as f64 * 100.0
    }

    pub fn status(&self) -> BudgetStatus {
        let usage = self.usage_percentage();
        if usage >= 100.0 {
            BudgetStatus::OverBudget
        } else if usage >= 80.0 {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::WithinLimit
        }
    }
}

/// A member's deposit/withdrawal totals against the guild bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberContribution {
    pub player_id: PlayerId,
    pub total_deposits: i64,
    pub total_withdrawals: i64,
}

impl MemberContribution {
    pub fn new(player_id: PlayerId, total_deposits: i64, total_withdrawals: i64) -> Self {
        Self {
            player_id,
            total_deposits,
            total_withdrawals,
        }
    }

    /// Deposits minus withdrawals, clamped to the `i64` range.
    pub fn net(&self) -> i64 {
        self.total_deposits.saturating_sub(self.total_withdrawals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        let within = BudgetAllocation::new(BudgetCategory::Events, 1000, 799);
        let near = BudgetAllocation::new(BudgetCategory::Events, 1000, 800);
        let over = BudgetAllocation::new(BudgetCategory::Events, 1000, 1000);
        assert_eq!(within.status(), BudgetStatus::WithinLimit);
        assert_eq!(near.status(), BudgetStatus::NearLimit);
        assert_eq!(over.status(), BudgetStatus::OverBudget);
    }

    #[test]
    fn zero_allocation() {
        let idle = BudgetAllocation::new(BudgetCategory::Upkeep, 0, 0);
        let spent = BudgetAllocation::new(BudgetCategory::Upkeep, 0, 5);
        assert_eq!(idle.status(), BudgetStatus::WithinLimit);
        assert_eq!(spent.status(), BudgetStatus::OverBudget);
        assert_eq!(spent.remaining(), -5);
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in BudgetCategory::ALL {
            assert_eq!(category.as_str().parse::<BudgetCategory>().unwrap(), category);
        }
        assert!("snacks".parse::<BudgetCategory>().is_err());
    }

    #[test]
    fn net_contribution() {
        let c = MemberContribution::new(PlayerId::new(), 300, 450);
        assert_eq!(c.net(), -150);
    }

    #[test]
    fn extreme_totals_saturate_instead_of_overflowing() {
        let hoarder = MemberContribution::new(PlayerId::new(), i64::MAX, -1);
        let debtor = MemberContribution::new(PlayerId::new(), i64::MIN, 1);
        assert_eq!(hoarder.net(), i64::MAX);
        assert_eq!(debtor.net(), i64::MIN);

        let budget = BudgetAllocation::new(BudgetCategory::Events, i64::MIN, i64::MAX);
        assert_eq!(budget.remaining(), i64::MIN);
        assert_eq!(budget.status(), BudgetStatus::OverBudget);
    }
}
