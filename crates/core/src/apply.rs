// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::snapshot::{entry_snapshot, staff_snapshot};
use crate::state::{State, TransitionEffect, TransitionResult};
use premia_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use premia_domain::{
    DomainError, Entry, StaffMember, validate_entry_fields, validate_responsible_exists,
    validate_staff_fields,
};

/// Applies a command to the current state.
///
/// This is a pure function: it validates the command against the state
/// and describes the change to persist. It never touches storage. Callers
/// are responsible for authorization before calling it.
///
/// # Arguments
///
/// * `state` - The directory and targeted entry (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` with the change to persist and its audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - An entry's fields fail validation
/// - An entry's responsible staff member is not in the directory
/// - An update or delete targets an entry that does not exist
/// - A staff member's fields are invalid or their id is already taken
/// - A staff member being disabled or enabled is not in the directory
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.name();

    match command {
        Command::CreateEntry { mut entry } => {
            entry.entry_id = None;
            validate_entry(&entry, &state.directory)?;

            let action: Action = Action::new(
                String::from(action_name),
                Some(format!(
                    "Created {} entry for '{}' credited to {}",
                    entry.entry_type(),
                    entry.client_name,
                    entry.responsible_user_id
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                None,
                actor,
                cause,
                action,
                StateSnapshot::empty(),
                entry_snapshot(&entry),
            );

            Ok(TransitionResult {
                effect: TransitionEffect::SaveEntry(entry),
                audit_event,
            })
        }
        Command::UpdateEntry { entry_id, entry } => {
            let existing: &Entry = find_existing(state, entry_id)?;
            let entry: Entry = entry.with_id(entry_id);
            validate_entry(&entry, &state.directory)?;

            let action: Action = Action::new(
                String::from(action_name),
                Some(format!("Updated entry {entry_id}")),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                Some(entry_id),
                actor,
                cause,
                action,
                entry_snapshot(existing),
                entry_snapshot(&entry),
            );

            Ok(TransitionResult {
                effect: TransitionEffect::SaveEntry(entry),
                audit_event,
            })
        }
        Command::DeleteEntry { entry_id } => {
            let existing: &Entry = find_existing(state, entry_id)?;

            let action: Action = Action::new(
                String::from(action_name),
                Some(format!(
                    "Deleted {} entry {entry_id} for '{}'",
                    existing.entry_type(),
                    existing.client_name
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                Some(entry_id),
                actor,
                cause,
                action,
                entry_snapshot(existing),
                StateSnapshot::empty(),
            );

            Ok(TransitionResult {
                effect: TransitionEffect::RemoveEntry(entry_id),
                audit_event,
            })
        }
        Command::RegisterStaff {
            staff_id,
            display_name,
            is_master,
        } => {
            validate_staff_fields(&staff_id, &display_name)?;

            if state
                .directory
                .iter()
                .any(|member| member.staff_id == staff_id)
            {
                return Err(CoreError::DomainViolation(DomainError::DuplicateStaffId(
                    staff_id.value().to_string(),
                )));
            }

            let member: StaffMember =
                StaffMember::new(staff_id, display_name.trim().to_string(), is_master);

            let action: Action = Action::new(
                String::from(action_name),
                Some(format!(
                    "Registered staff member {} ({})",
                    member.staff_id,
                    if member.is_master { "master" } else { "staff" }
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                None,
                actor,
                cause,
                action,
                StateSnapshot::empty(),
                staff_snapshot(&member),
            );

            Ok(TransitionResult {
                effect: TransitionEffect::AddStaff(member),
                audit_event,
            })
        }
        Command::SetStaffDisabled { staff_id, disabled } => {
            let member: &StaffMember = state
                .directory
                .iter()
                .find(|member| member.staff_id == staff_id)
                .ok_or_else(|| DomainError::StaffNotFound(staff_id.value().to_string()))?;

            let current: StateSnapshot = staff_snapshot(member);
            let after: StateSnapshot =
                StateSnapshot::new(format!("{},is_disabled={disabled}", current.data));
            let action: Action = Action::new(
                String::from(action_name),
                Some(format!(
                    "{} staff member {staff_id}",
                    if disabled { "Disabled" } else { "Enabled" }
                )),
            );
            let audit_event: AuditEvent =
                AuditEvent::new(None, actor, cause, action, current, after);

            Ok(TransitionResult {
                effect: TransitionEffect::SetStaffDisabled { staff_id, disabled },
                audit_event,
            })
        }
    }
}

fn validate_entry(entry: &Entry, directory: &[StaffMember]) -> Result<(), CoreError> {
    validate_entry_fields(entry)?;
    validate_responsible_exists(&entry.responsible_user_id, directory)?;
    Ok(())
}

fn find_existing(state: &State, entry_id: i64) -> Result<&Entry, CoreError> {
    state
        .existing_entry
        .as_ref()
        .filter(|entry| entry.entry_id == Some(entry_id))
        .ok_or(CoreError::EntryNotFound(entry_id))
}
