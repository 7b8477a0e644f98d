// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Applying a core transition to the database.

use diesel::SqliteConnection;
use diesel::prelude::*;
use premia::{TransitionEffect, TransitionResult};
use premia_audit::AuditEvent;

use crate::error::PersistenceError;
use crate::mutations::audit::persist_audit_event;
use crate::mutations::entries::{delete_entry, insert_entry, update_entry};
use crate::mutations::staff::{insert_staff, set_staff_disabled};

/// Identifiers produced by persisting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistTransitionResult {
    /// The ID of the stored audit event.
    pub event_id: i64,
    /// The ID of the affected entry, for entry transitions.
    pub entry_id: Option<i64>,
}

/// Applies a transition's effect and stores its audit event.
///
/// Both happen in one transaction: either the change and its audit event
/// are stored, or neither is. A newly inserted entry's ID is recorded on the
/// audit event.
///
/// # Errors
///
/// Returns an error if any statement fails; the transaction is rolled back.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<PersistTransitionResult, PersistenceError> {
    conn.transaction::<PersistTransitionResult, PersistenceError, _>(|conn| {
        let entry_id: Option<i64> = match &result.effect {
            TransitionEffect::SaveEntry(entry) => match entry.entry_id {
                Some(entry_id) => {
                    update_entry(conn, entry_id, entry)?;
                    Some(entry_id)
                }
                None => Some(insert_entry(conn, entry)?),
            },
            TransitionEffect::RemoveEntry(entry_id) => {
                delete_entry(conn, *entry_id)?;
                Some(*entry_id)
            }
            TransitionEffect::AddStaff(member) => {
                insert_staff(conn, member)?;
                None
            }
            TransitionEffect::SetStaffDisabled { staff_id, disabled } => {
                set_staff_disabled(conn, staff_id.value(), *disabled)?;
                None
            }
        };

        let event: AuditEvent = match entry_id {
            Some(entry_id) => result.audit_event.clone().with_entry_id(entry_id),
            None => result.audit_event.clone(),
        };
        let event_id: i64 = persist_audit_event(conn, &event)?;

        Ok(PersistTransitionResult { event_id, entry_id })
    })
}
