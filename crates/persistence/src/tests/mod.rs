// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod entry_tests;

use crate::{PersistTransitionResult, Persistence};
use premia::{Command, State, TransitionResult, apply};
use premia_audit::{Actor, Cause};
use premia_domain::{Entry, EntryDetails, PaymentType, StaffId, StaffMember};
use rust_decimal::Decimal;
use time::Date;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("ana"), String::from("master"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn directory(persistence: &mut Persistence) -> Vec<StaffMember> {
    persistence
        .list_staff()
        .unwrap()
        .iter()
        .map(crate::StaffData::to_member)
        .collect()
}

/// Applies a command against the stored state and persists the result.
pub fn run_command(
    persistence: &mut Persistence,
    command: Command,
    existing_entry: Option<Entry>,
) -> PersistTransitionResult {
    let state: State = State::new(directory(persistence), existing_entry);
    let result: TransitionResult =
        apply(&state, command, create_test_actor(), create_test_cause()).expect("valid command");
    persistence.persist_transition(&result).unwrap()
}

pub fn register_staff(persistence: &mut Persistence, staff_id: &str, name: &str, is_master: bool) {
    run_command(
        persistence,
        Command::RegisterStaff {
            staff_id: StaffId::new(staff_id),
            display_name: String::from(name),
            is_master,
        },
        None,
    );
}

/// A persistence instance with two staff members, `ana` (master) and `bia`.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    register_staff(&mut persistence, "ana", "Ana Souza", true);
    register_staff(&mut persistence, "bia", "Bia Lima", false);
    persistence
}

pub fn registration_entry(responsible: &str, entry_date: Date) -> Entry {
    Entry::new(
        String::from("Acme Ltda"),
        StaffId::new(responsible),
        entry_date,
        EntryDetails::TrademarkRegistration {
            brand_quantity: Some(3),
            payment_type: PaymentType::Cash,
        },
    )
    .with_brand_name(Some(String::from("Acme")))
}

pub fn publication_entry(responsible: &str, entry_date: Date) -> Entry {
    Entry::new(
        String::from("Jornal Local"),
        StaffId::new(responsible),
        entry_date,
        EntryDetails::Publication {
            publication_type: Some(String::from("edital")),
            pub_quantity: None,
            payment_form: PaymentType::Installment,
        },
    )
}

pub fn collection_entry(responsible: &str, entry_date: Date) -> Entry {
    Entry::new(
        String::from("Devedor SA"),
        StaffId::new(responsible),
        entry_date,
        EntryDetails::DebtCollection {
            installments_paid: Some(4),
            total_resolved_value: Some(Decimal::new(123_450, 2)),
        },
    )
    .with_observations(Some(String::from("acordo fechado")))
}

pub fn create_entry(persistence: &mut Persistence, entry: Entry) -> i64 {
    run_command(persistence, Command::CreateEntry { entry }, None)
        .entry_id
        .expect("entry id")
}
