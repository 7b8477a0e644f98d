// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rules::PremiumRules;
use crate::types::Entry;
use rust_decimal::Decimal;

/// Sums the publication units of a set of entries.
///
/// Entries of other categories contribute nothing.
#[must_use]
pub fn total_publication_units(entries: &[Entry]) -> u32 {
    entries
        .iter()
        .map(Entry::publication_units)
        .fold(0, u32::saturating_add)
}

/// Calculates the publication premium for a set of entries.
///
/// A single rate is applied to the whole total: once the total reaches
/// `publication_cliff_threshold`, every unit (including those before the
/// threshold) is repriced at the cliff rate.
///
/// # Arguments
///
/// * `entries` - The entries of the evaluated period
/// * `rules` - The premium rules
#[must_use]
pub fn calc_publication_premium(entries: &[Entry], rules: &PremiumRules) -> Decimal {
    let total_pubs: u32 = total_publication_units(entries);

    let rate: Decimal = if total_pubs >= rules.publication_cliff_threshold {
        rules.publication_cliff_rate
    } else {
        rules.publication_base_rate
    };

    Decimal::from(total_pubs).saturating_mul(rate)
}
