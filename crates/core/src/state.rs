// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use premia_audit::AuditEvent;
use premia_domain::{Entry, StaffId, StaffMember};

/// The slice of stored state a command is checked against.
///
/// The caller loads the team directory and, for update and delete
/// commands, the entry being targeted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// The current team directory.
    pub directory: Vec<StaffMember>,
    /// The stored entry the command targets, if any.
    pub existing_entry: Option<Entry>,
}

impl State {
    /// Creates a new `State`.
    ///
    /// # Arguments
    ///
    /// * `directory` - The current team directory
    /// * `existing_entry` - The stored entry the command targets, if any
    #[must_use]
    pub const fn new(directory: Vec<StaffMember>, existing_entry: Option<Entry>) -> Self {
        Self {
            directory,
            existing_entry,
        }
    }
}

/// The change the caller must persist for a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Insert the entry (no ID) or overwrite the stored entry (ID set).
    SaveEntry(Entry),
    /// Delete the entry with this ID.
    RemoveEntry(i64),
    /// Insert the staff member.
    AddStaff(StaffMember),
    /// Change a staff member's disabled flag.
    SetStaffDisabled {
        /// The member to change.
        staff_id: StaffId,
        /// The new flag value.
        disabled: bool,
    },
}

/// The result of a successful state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The change to persist.
    pub effect: TransitionEffect,
    /// The audit event describing the change.
    pub audit_event: AuditEvent,
}
