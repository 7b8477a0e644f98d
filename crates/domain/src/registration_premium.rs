// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Trademark registration premium.
//!
//! Units are priced one at a time in chronological order against a running
//! counter shared by every entry in the period. The first
//! `registration_tier_threshold` units earn the base rate; later units earn
//! the cash rate when their entry was paid in cash and the base rate
//! otherwise. A single multi-unit entry may therefore straddle the tier.
//!
//! Amounts saturate at `Decimal::MAX` rather than overflowing.

use crate::rules::PremiumRules;
use crate::types::{Entry, EntryDetails, PaymentType, effective_quantity};
use rust_decimal::Decimal;

/// Calculates the registration premium for a set of entries.
///
/// Entries are stable-sorted by `entry_date`; entries sharing a date keep
/// their input order. Entries of other categories are ignored.
///
/// # Arguments
///
/// * `entries` - The entries of the evaluated period
/// * `rules` - The premium rules
///
/// # Returns
///
/// The summed reward of every trademark unit.
#[must_use]
pub fn calc_registration_premium(entries: &[Entry], rules: &PremiumRules) -> Decimal {
    let mut registrations: Vec<(&Entry, u32, PaymentType)> = entries
        .iter()
        .filter_map(|entry| match &entry.details {
            EntryDetails::TrademarkRegistration {
                brand_quantity,
                payment_type,
            } => Some((entry, effective_quantity(*brand_quantity), *payment_type)),
            EntryDetails::Publication { .. } | EntryDetails::DebtCollection { .. } => None,
        })
        .collect();

    // `sort_by_key` is stable.
    registrations.sort_by_key(|(entry, _, _)| entry.entry_date);

    let mut accumulated: u32 = 0;
    let mut total: Decimal = Decimal::ZERO;

    for (_, quantity, payment_type) in registrations {
        let (tier_units, over_tier_units): (u32, u32) =
            split_at_tier(accumulated, quantity, rules.registration_tier_threshold);

        let over_tier_rate: Decimal = if payment_type.is_cash() {
            rules.registration_cash_rate
        } else {
            rules.registration_base_rate
        };

        total = total
            .saturating_add(
                rules
                    .registration_base_rate
                    .saturating_mul(Decimal::from(tier_units)),
            )
            .saturating_add(over_tier_rate.saturating_mul(Decimal::from(over_tier_units)));
        accumulated = accumulated.saturating_add(quantity);
    }

    total
}

/// Splits `quantity` units following `accumulated` earlier units into the
/// number still inside the tier and the number past it.
///
/// Equivalent to incrementing the counter once per unit and testing
/// `counter <= threshold` each time.
const fn split_at_tier(accumulated: u32, quantity: u32, threshold: u32) -> (u32, u32) {
    let remaining_tier_slots: u32 = threshold.saturating_sub(accumulated);
    let tier_units: u32 = if quantity < remaining_tier_slots {
        quantity
    } else {
        remaining_tier_slots
    };
    (tier_units, quantity - tier_units)
}
