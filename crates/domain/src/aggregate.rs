// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Combining the calculators into report figures.
//!
//! Every figure is recomputed from the entries it covers. Per-member figures
//! are never derived by splitting a team-wide total, because the
//! registration tier and the publication cliff are both non-linear.

use crate::collection_premium::calc_collection_premium;
use crate::milestone::{
    MilestoneBonus, calc_collection_milestone_bonus, calc_publication_milestone_bonus,
};
use crate::publication_premium::{calc_publication_premium, total_publication_units};
use crate::registration_premium::calc_registration_premium;
use crate::rules::PremiumRules;
use crate::types::{Entry, EntryType, StaffId, StaffMember};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display name used for entries credited to an id missing from the directory.
pub const UNKNOWN_STAFF_DISPLAY_NAME: &str = "(unknown)";

/// Premium figures for a working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumSummary {
    /// Trademark registration premium.
    pub registration_premium: Decimal,
    /// Publication premium.
    pub publication_premium: Decimal,
    /// Debt collection premium.
    pub collection_premium: Decimal,
    /// Publication milestone progress.
    pub pub_milestone: MilestoneBonus,
    /// Collection milestone progress.
    pub collection_milestone: MilestoneBonus,
    /// Sum of the three premiums and both milestone bonuses.
    pub total_premium: Decimal,
    /// Total trademark units.
    pub total_registration_units: u32,
    /// Total publication units.
    pub total_publication_units: u32,
}

/// Premium figures for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPremiumSummary {
    /// The staff member.
    pub staff_id: StaffId,
    /// The member's display name.
    pub display_name: String,
    /// Trademark units credited to the member.
    pub registration_count: u32,
    /// Publication units credited to the member.
    pub publication_count: u32,
    /// Debt collection entries credited to the member.
    pub collection_count: u32,
    /// The member's total premium including milestone bonuses.
    pub total_premium: Decimal,
    /// The member's publication milestone bonus.
    pub pub_milestone_bonus: Decimal,
    /// The member's collection milestone bonus.
    pub collection_milestone_bonus: Decimal,
}

/// Computes the premium summary of a working set.
///
/// # Arguments
///
/// * `entries` - The working set (already filtered by period and user)
/// * `rules` - The premium rules
#[must_use]
pub fn compute_premium_summary(entries: &[Entry], rules: &PremiumRules) -> PremiumSummary {
    let registration_premium: Decimal = calc_registration_premium(entries, rules);
    let publication_premium: Decimal = calc_publication_premium(entries, rules);
    let collection_premium: Decimal = calc_collection_premium(entries, rules);
    let pub_milestone: MilestoneBonus = calc_publication_milestone_bonus(entries, rules);
    let collection_milestone: MilestoneBonus = calc_collection_milestone_bonus(entries, rules);

    let total_premium: Decimal = registration_premium
        .saturating_add(publication_premium)
        .saturating_add(collection_premium)
        .saturating_add(pub_milestone.bonus)
        .saturating_add(collection_milestone.bonus);

    PremiumSummary {
        registration_premium,
        publication_premium,
        collection_premium,
        pub_milestone,
        collection_milestone,
        total_premium,
        total_registration_units: entries
            .iter()
            .map(Entry::registration_units)
            .fold(0, u32::saturating_add),
        total_publication_units: total_publication_units(entries),
    }
}

/// Computes one premium row per team member.
///
/// Rows follow directory order; members without entries get zero rows.
/// Entries credited to ids missing from the directory follow, one row per
/// unknown id in order of first appearance.
///
/// # Arguments
///
/// * `entries` - The working set
/// * `staff` - The team directory
/// * `rules` - The premium rules
#[must_use]
pub fn compute_staff_breakdown(
    entries: &[Entry],
    staff: &[StaffMember],
    rules: &PremiumRules,
) -> Vec<StaffPremiumSummary> {
    let mut rows: Vec<StaffPremiumSummary> = staff
        .iter()
        .map(|member| staff_row(&member.staff_id, &member.display_name, entries, rules))
        .collect();

    let mut unknown_ids: Vec<&StaffId> = Vec::new();
    for entry in entries {
        let id: &StaffId = &entry.responsible_user_id;
        let in_directory: bool = staff.iter().any(|member| &member.staff_id == id);
        if !in_directory && !unknown_ids.contains(&id) {
            unknown_ids.push(id);
        }
    }

    rows.extend(
        unknown_ids
            .into_iter()
            .map(|id| staff_row(id, UNKNOWN_STAFF_DISPLAY_NAME, entries, rules)),
    );

    rows
}

fn staff_row(
    staff_id: &StaffId,
    display_name: &str,
    entries: &[Entry],
    rules: &PremiumRules,
) -> StaffPremiumSummary {
    let own_entries: Vec<Entry> = entries
        .iter()
        .filter(|entry| &entry.responsible_user_id == staff_id)
        .cloned()
        .collect();

    let summary: PremiumSummary = compute_premium_summary(&own_entries, rules);
    let collection_count: u32 = u32::try_from(
        own_entries
            .iter()
            .filter(|entry| entry.entry_type() == EntryType::DebtCollection)
            .count(),
    )
    .unwrap_or(u32::MAX);

    StaffPremiumSummary {
        staff_id: staff_id.clone(),
        display_name: display_name.to_string(),
        registration_count: summary.total_registration_units,
        publication_count: summary.total_publication_units,
        collection_count,
        total_premium: summary.total_premium,
        pub_milestone_bonus: summary.pub_milestone.bonus,
        collection_milestone_bonus: summary.collection_milestone.bonus,
    }
}
