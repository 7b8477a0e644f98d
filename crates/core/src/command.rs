// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use premia_domain::{Entry, StaffId};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request changes to the entry store or the
/// team directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a new entry.
    CreateEntry {
        /// The entry to record. Any ID it carries is discarded.
        entry: Entry,
    },
    /// Replace every field of an existing entry.
    UpdateEntry {
        /// The entry being replaced.
        entry_id: i64,
        /// The new field values.
        entry: Entry,
    },
    /// Permanently remove an entry.
    DeleteEntry {
        /// The entry to remove.
        entry_id: i64,
    },
    /// Add a member to the team directory.
    RegisterStaff {
        /// The new member's identifier.
        staff_id: StaffId,
        /// The new member's display name.
        display_name: String,
        /// Whether the new member is elevated.
        is_master: bool,
    },
    /// Disable or re-enable a directory member's access.
    ///
    /// Entries credited to a disabled member are kept and still reported.
    SetStaffDisabled {
        /// The member to change.
        staff_id: StaffId,
        /// Whether the member is disabled after the change.
        disabled: bool,
    },
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateEntry { .. } => "CreateEntry",
            Self::UpdateEntry { .. } => "UpdateEntry",
            Self::DeleteEntry { .. } => "DeleteEntry",
            Self::RegisterStaff { .. } => "RegisterStaff",
            Self::SetStaffDisabled { disabled: true, .. } => "DisableStaff",
            Self::SetStaffDisabled { disabled: false, .. } => "EnableStaff",
        }
    }
}
