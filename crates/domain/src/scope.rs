// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Which entries a viewer is allowed to see for a period.

use crate::period::PeriodFilter;
use crate::types::{Entry, StaffId};
use serde::{Deserialize, Serialize};

/// Restricts a working set to one staff member or to the whole team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserFilter {
    /// Every staff member.
    #[default]
    All,
    /// A single staff member.
    Staff(StaffId),
}

impl UserFilter {
    /// Parses a user filter from its wire representation.
    ///
    /// `"all"` (any case) and the empty string select every staff member;
    /// anything else is taken as a staff id.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Staff(StaffId::new(trimmed))
        }
    }

    /// Returns whether an entry credited to `staff_id` passes this filter.
    #[must_use]
    pub fn matches(&self, staff_id: &StaffId) -> bool {
        match self {
            Self::All => true,
            Self::Staff(wanted) => wanted == staff_id,
        }
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Staff(staff_id) => write!(f, "{staff_id}"),
        }
    }
}

/// The staff member looking at a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    /// The viewer's own staff id.
    pub staff_id: StaffId,
    /// Whether the viewer may see other members' entries.
    pub is_elevated: bool,
}

impl Viewer {
    /// Creates a new `Viewer`.
    #[must_use]
    pub const fn new(staff_id: StaffId, is_elevated: bool) -> Self {
        Self {
            staff_id,
            is_elevated,
        }
    }
}

/// Resolves the user filter a viewer is actually allowed to use.
///
/// A non-elevated viewer is always restricted to their own entries, whatever
/// they requested. An elevated viewer's request is honored.
///
/// # Arguments
///
/// * `viewer` - The viewer
/// * `requested` - The filter the viewer asked for
#[must_use]
pub fn resolve_user_filter(viewer: &Viewer, requested: UserFilter) -> UserFilter {
    if viewer.is_elevated {
        requested
    } else {
        UserFilter::Staff(viewer.staff_id.clone())
    }
}

/// Selects the entries inside a period that pass a user filter.
///
/// Input order is preserved.
///
/// # Arguments
///
/// * `entries` - The full entry snapshot
/// * `period` - The evaluated period
/// * `user_filter` - The resolved user filter
#[must_use]
pub fn select_working_set(
    entries: &[Entry],
    period: &PeriodFilter,
    user_filter: &UserFilter,
) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| {
            period.contains(entry.entry_date) && user_filter.matches(&entry.responsible_user_id)
        })
        .cloned()
        .collect()
}
