// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rules::PremiumRules;
use crate::types::{Entry, EntryDetails};
use rust_decimal::Decimal;

/// Calculates the premium earned by a single debt collection entry.
///
/// Returns zero when the resolved value is absent or zero, when the
/// installment count is absent or zero, and when the per-installment value
/// falls outside every rate band.
#[must_use]
pub fn collection_entry_premium(entry: &Entry, rules: &PremiumRules) -> Decimal {
    let EntryDetails::DebtCollection {
        installments_paid: Some(installments),
        total_resolved_value: Some(resolved_value),
    } = &entry.details
    else {
        return Decimal::ZERO;
    };

    if *installments == 0 || resolved_value.is_zero() {
        return Decimal::ZERO;
    }

    let installments: Decimal = Decimal::from(*installments);
    let Some(per_installment) = resolved_value.checked_div(installments) else {
        return Decimal::ZERO;
    };

    rules
        .collection_rate(per_installment)
        .saturating_mul(installments)
}

/// Calculates the debt collection premium for a set of entries.
///
/// # Arguments
///
/// * `entries` - The entries of the evaluated period
/// * `rules` - The premium rules
#[must_use]
pub fn calc_collection_premium(entries: &[Entry], rules: &PremiumRules) -> Decimal {
    entries
        .iter()
        .map(|entry| collection_entry_premium(entry, rules))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
