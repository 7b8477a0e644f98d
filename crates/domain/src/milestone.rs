// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Count-based milestone bonuses.
//!
//! Both bonuses are paid on top of the category premiums and ignore payment
//! type and resolved value.

use crate::publication_premium::total_publication_units;
use crate::rules::PremiumRules;
use crate::types::{Entry, EntryType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Milestone progress for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneBonus {
    /// Bonus earned for the completed milestones.
    pub bonus: Decimal,
    /// Number of completed milestones.
    pub milestones: u32,
    /// Unit count at which the next milestone completes.
    pub next_at: u32,
}

impl MilestoneBonus {
    /// Computes milestone progress for a unit total.
    ///
    /// # Arguments
    ///
    /// * `total` - Units counted so far
    /// * `step` - Units per milestone (treated as 1 if zero)
    /// * `bonus_per_milestone` - Bonus paid per completed milestone
    #[must_use]
    pub fn from_total(total: u32, step: u32, bonus_per_milestone: Decimal) -> Self {
        let step: u32 = step.max(1);
        let milestones: u32 = total / step;
        Self {
            bonus: bonus_per_milestone.saturating_mul(Decimal::from(milestones)),
            milestones,
            next_at: milestones.saturating_add(1).saturating_mul(step),
        }
    }
}

/// Calculates the publication milestone bonus.
///
/// Counts publication units (sum of `pub_quantity`).
#[must_use]
pub fn calc_publication_milestone_bonus(entries: &[Entry], rules: &PremiumRules) -> MilestoneBonus {
    MilestoneBonus::from_total(
        total_publication_units(entries),
        rules.milestone_step,
        rules.publication_milestone_bonus,
    )
}

/// Calculates the collection milestone bonus.
///
/// Counts debt collection entries; each entry is one unit whatever its value.
#[must_use]
pub fn calc_collection_milestone_bonus(entries: &[Entry], rules: &PremiumRules) -> MilestoneBonus {
    let total_collections: u32 = u32::try_from(
        entries
            .iter()
            .filter(|entry| entry.entry_type() == EntryType::DebtCollection)
            .count(),
    )
    .unwrap_or(u32::MAX);

    MilestoneBonus::from_total(
        total_collections,
        rules.milestone_step,
        rules.collection_milestone_bonus,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_total_below_first_milestone() {
        let result: MilestoneBonus = MilestoneBonus::from_total(9, 10, Decimal::from(100));
        assert_eq!(result.milestones, 0);
        assert_eq!(result.bonus, Decimal::ZERO);
        assert_eq!(result.next_at, 10);
    }

    #[test]
    fn test_from_total_exactly_on_milestone() {
        let result: MilestoneBonus = MilestoneBonus::from_total(20, 10, Decimal::from(50));
        assert_eq!(result.milestones, 2);
        assert_eq!(result.bonus, Decimal::from(100));
        assert_eq!(result.next_at, 30);
    }

    #[test]
    fn test_from_total_zero_step_does_not_divide_by_zero() {
        let result: MilestoneBonus = MilestoneBonus::from_total(3, 0, Decimal::from(1));
        assert_eq!(result.milestones, 3);
        assert_eq!(result.next_at, 4);
    }
}
