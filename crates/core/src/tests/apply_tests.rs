// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_actor, create_test_cause, create_test_collection_entry, create_test_directory,
    create_test_entry, create_test_state,
};
use crate::{Command, CoreError, State, TransitionEffect, TransitionResult, apply};
use premia_domain::{DomainError, Entry};

#[test]
fn test_create_entry_returns_save_effect() {
    let state: State = create_test_state();
    let command: Command = Command::CreateEntry {
        entry: create_test_entry("bia"),
    };

    let result: TransitionResult =
        apply(&state, command, create_test_actor(), create_test_cause()).unwrap();

    let TransitionEffect::SaveEntry(entry) = &result.effect else {
        panic!("expected SaveEntry, got {:?}", result.effect);
    };
    assert_eq!(entry.entry_id, None);
    assert_eq!(entry.responsible_user_id.value(), "bia");
}

#[test]
fn test_create_entry_discards_supplied_id() {
    let state: State = create_test_state();
    let command: Command = Command::CreateEntry {
        entry: create_test_entry("bia").with_id(99),
    };

    let result: TransitionResult =
        apply(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert!(matches!(
        result.effect,
        TransitionEffect::SaveEntry(Entry { entry_id: None, .. })
    ));
}

#[test]
fn test_create_entry_emits_audit_event() {
    let state: State = create_test_state();
    let command: Command = Command::CreateEntry {
        entry: create_test_entry("bia"),
    };

    let result: TransitionResult =
        apply(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert_eq!(result.audit_event.action.name, "CreateEntry");
    assert_eq!(result.audit_event.actor.id, "ana");
    assert_eq!(result.audit_event.cause.id, "req-456");
    assert_eq!(result.audit_event.entry_id, None);
    assert!(result.audit_event.before.is_empty());
    assert!(result.audit_event.after.data.contains("responsible=bia"));
    assert!(
        result
            .audit_event
            .action
            .details
            .as_ref()
            .unwrap()
            .contains("trademark_registration")
    );
}

#[test]
fn test_create_entry_rejects_invalid_fields() {
    let state: State = create_test_state();
    let mut entry: Entry = create_test_entry("bia");
    entry.client_name = String::new();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::CreateEntry { entry },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidClientName(_)))
    ));
}

#[test]
fn test_create_entry_rejects_unknown_responsible() {
    let state: State = create_test_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::CreateEntry {
            entry: create_test_entry("zoe"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::StaffNotFound(
            String::from("zoe")
        )))
    );
}

#[test]
fn test_update_entry_records_before_and_after() {
    let existing: Entry = create_test_entry("bia").with_id(5);
    let state: State = State::new(create_test_directory(), Some(existing));
    let replacement: Entry = create_test_collection_entry("bia");

    let result: TransitionResult = apply(
        &state,
        Command::UpdateEntry {
            entry_id: 5,
            entry: replacement,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.audit_event.entry_id, Some(5));
    assert!(result.audit_event.before.data.contains("type=trademark_registration"));
    assert!(result.audit_event.after.data.contains("type=debt_collection"));
    let TransitionEffect::SaveEntry(saved) = result.effect else {
        panic!("expected SaveEntry");
    };
    assert_eq!(saved.entry_id, Some(5));
}

#[test]
fn test_update_missing_entry_fails() {
    let state: State = create_test_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::UpdateEntry {
            entry_id: 5,
            entry: create_test_entry("bia"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(result, Err(CoreError::EntryNotFound(5)));
}

#[test]
fn test_update_with_mismatched_existing_entry_fails() {
    let state: State = State::new(
        create_test_directory(),
        Some(create_test_entry("bia").with_id(6)),
    );

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::UpdateEntry {
            entry_id: 5,
            entry: create_test_entry("bia"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(result, Err(CoreError::EntryNotFound(5)));
}

#[test]
fn test_delete_entry_returns_remove_effect() {
    let state: State = State::new(
        create_test_directory(),
        Some(create_test_entry("bia").with_id(5)),
    );

    let result: TransitionResult = apply(
        &state,
        Command::DeleteEntry { entry_id: 5 },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.effect, TransitionEffect::RemoveEntry(5));
    assert_eq!(result.audit_event.action.name, "DeleteEntry");
    assert!(result.audit_event.after.is_empty());
    assert!(result.audit_event.before.data.contains("entry_id=5"));
}

#[test]
fn test_delete_missing_entry_fails() {
    let state: State = create_test_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::DeleteEntry { entry_id: 1 },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(result, Err(CoreError::EntryNotFound(1)));
}

#[test]
fn test_failed_command_leaves_state_untouched() {
    let state: State = create_test_state();
    let before: State = state.clone();

    let _ = apply(
        &state,
        Command::DeleteEntry { entry_id: 1 },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(state, before);
}
