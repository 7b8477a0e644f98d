// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod collection_premium;
mod error;
mod milestone;
mod period;
mod publication_premium;
mod registration_premium;
mod rules;
mod scope;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use aggregate::{
    PremiumSummary, StaffPremiumSummary, UNKNOWN_STAFF_DISPLAY_NAME, compute_premium_summary,
    compute_staff_breakdown,
};
pub use collection_premium::{calc_collection_premium, collection_entry_premium};
pub use milestone::{
    MilestoneBonus, calc_collection_milestone_bonus, calc_publication_milestone_bonus,
};
pub use period::{PeriodFilter, PeriodMode, parse_date, parse_time_zone, today_in_zone};
pub use publication_premium::{calc_publication_premium, total_publication_units};
pub use registration_premium::calc_registration_premium;
pub use scope::{UserFilter, Viewer, resolve_user_filter, select_working_set};

// Re-export public types
pub use error::DomainError;
pub use rules::{PremiumRules, RateBand};
pub use types::{
    DEFAULT_QUANTITY, Entry, EntryDetails, EntryType, PaymentType, StaffId, StaffMember,
    effective_quantity,
};
pub use validation::{
    MAX_QUANTITY, validate_entry_fields, validate_responsible_exists, validate_staff_fields,
};
