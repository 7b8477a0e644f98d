// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{
    collection_entry, create_entry, create_seeded_persistence, publication_entry,
    registration_entry, run_command,
};
use crate::{EntryQuery, Persistence, PersistenceError};
use premia::{Command, TransitionEffect, TransitionResult};
use premia_audit::{Action, AuditEvent, StateSnapshot};
use premia_domain::{Entry, EntryDetails, StaffId};
use time::macros::date;

#[test]
fn test_registration_entry_round_trips() {
    let mut persistence: Persistence = create_seeded_persistence();
    let entry: Entry = registration_entry("bia", date!(2026 - 03 - 10));

    let entry_id: i64 = create_entry(&mut persistence, entry.clone());
    let stored: Entry = persistence.get_entry(entry_id).unwrap().unwrap();

    assert_eq!(stored, entry.with_id(entry_id));
}

#[test]
fn test_publication_entry_keeps_absent_quantity() {
    let mut persistence: Persistence = create_seeded_persistence();
    let entry: Entry = publication_entry("bia", date!(2026 - 03 - 11));

    let entry_id: i64 = create_entry(&mut persistence, entry.clone());
    let stored: Entry = persistence.get_entry(entry_id).unwrap().unwrap();

    assert_eq!(stored, entry.with_id(entry_id));
    assert!(matches!(
        stored.details,
        EntryDetails::Publication {
            pub_quantity: None,
            ..
        }
    ));
}

#[test]
fn test_collection_entry_keeps_exact_decimal() {
    let mut persistence: Persistence = create_seeded_persistence();
    let entry: Entry = collection_entry("ana", date!(2026 - 03 - 12));

    let entry_id: i64 = create_entry(&mut persistence, entry.clone());
    let stored: Entry = persistence.get_entry(entry_id).unwrap().unwrap();

    assert_eq!(stored, entry.with_id(entry_id));
}

#[test]
fn test_get_missing_entry_returns_none() {
    let mut persistence: Persistence = create_seeded_persistence();
    assert_eq!(persistence.get_entry(42).unwrap(), None);
}

#[test]
fn test_update_entry_overwrites_all_fields() {
    let mut persistence: Persistence = create_seeded_persistence();
    let entry_id: i64 = create_entry(
        &mut persistence,
        registration_entry("bia", date!(2026 - 03 - 10)),
    );
    let existing: Entry = persistence.get_entry(entry_id).unwrap().unwrap();

    // Category changes clear the old category's columns
    let replacement: Entry = collection_entry("ana", date!(2026 - 04 - 01));
    run_command(
        &mut persistence,
        Command::UpdateEntry {
            entry_id,
            entry: replacement.clone(),
        },
        Some(existing),
    );

    let stored: Entry = persistence.get_entry(entry_id).unwrap().unwrap();
    assert_eq!(stored, replacement.with_id(entry_id));
    assert_eq!(stored.brand_name, None);
}

#[test]
fn test_delete_entry_removes_row() {
    let mut persistence: Persistence = create_seeded_persistence();
    let entry_id: i64 = create_entry(
        &mut persistence,
        registration_entry("bia", date!(2026 - 03 - 10)),
    );
    let existing: Entry = persistence.get_entry(entry_id).unwrap().unwrap();

    run_command(
        &mut persistence,
        Command::DeleteEntry { entry_id },
        Some(existing),
    );

    assert_eq!(persistence.get_entry(entry_id).unwrap(), None);
}

#[test]
fn test_list_entries_filters_by_period_and_responsible() {
    let mut persistence: Persistence = create_seeded_persistence();
    create_entry(
        &mut persistence,
        registration_entry("bia", date!(2026 - 02 - 28)),
    );
    let in_march: i64 = create_entry(
        &mut persistence,
        registration_entry("bia", date!(2026 - 03 - 01)),
    );
    create_entry(
        &mut persistence,
        registration_entry("ana", date!(2026 - 03 - 15)),
    );
    let end_of_march: i64 = create_entry(
        &mut persistence,
        collection_entry("bia", date!(2026 - 03 - 31)),
    );

    let query: EntryQuery = EntryQuery::between(date!(2026 - 03 - 01), date!(2026 - 03 - 31))
        .for_responsible(Some(StaffId::new("bia")));
    let ids: Vec<Option<i64>> = persistence
        .list_entries(&query)
        .unwrap()
        .into_iter()
        .map(|entry| entry.entry_id)
        .collect();

    assert_eq!(ids, vec![Some(in_march), Some(end_of_march)]);
}

#[test]
fn test_list_entries_orders_same_day_by_id() {
    let mut persistence: Persistence = create_seeded_persistence();
    let later_day: i64 = create_entry(
        &mut persistence,
        registration_entry("bia", date!(2026 - 03 - 20)),
    );
    let first: i64 = create_entry(
        &mut persistence,
        registration_entry("ana", date!(2026 - 03 - 05)),
    );
    let second: i64 = create_entry(
        &mut persistence,
        publication_entry("bia", date!(2026 - 03 - 05)),
    );

    let ids: Vec<Option<i64>> = persistence
        .list_entries(&EntryQuery::all())
        .unwrap()
        .into_iter()
        .map(|entry| entry.entry_id)
        .collect();

    assert_eq!(ids, vec![Some(first), Some(second), Some(later_day)]);
}

#[test]
fn test_entry_for_unknown_staff_rejected_by_foreign_key() {
    let mut persistence: Persistence = create_seeded_persistence();
    let entry: Entry = registration_entry("ghost", date!(2026 - 03 - 10));

    // Bypass core validation to reach the database constraint
    let result: TransitionResult = TransitionResult {
        effect: TransitionEffect::SaveEntry(entry),
        audit_event: AuditEvent::new(
            None,
            crate::tests::create_test_actor(),
            crate::tests::create_test_cause(),
            Action::new(String::from("CreateEntry"), None),
            StateSnapshot::empty(),
            StateSnapshot::new(String::from("entry")),
        ),
    };

    assert!(persistence.persist_transition(&result).is_err());
    assert_eq!(persistence.list_audit_events(None).unwrap().len(), 2);
}

#[test]
fn test_update_missing_entry_rolls_back() {
    let mut persistence: Persistence = create_seeded_persistence();
    let result: TransitionResult = TransitionResult {
        effect: TransitionEffect::SaveEntry(
            registration_entry("bia", date!(2026 - 03 - 10)).with_id(77),
        ),
        audit_event: AuditEvent::new(
            Some(77),
            crate::tests::create_test_actor(),
            crate::tests::create_test_cause(),
            Action::new(String::from("UpdateEntry"), None),
            StateSnapshot::empty(),
            StateSnapshot::empty(),
        ),
    };

    let error: PersistenceError = persistence.persist_transition(&result).unwrap_err();

    assert_eq!(error, PersistenceError::EntryNotFound(77));
    assert_eq!(persistence.list_audit_events(Some(77)).unwrap(), Vec::new());
}
