// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use premia_audit::Cause;
use premia_persistence::Persistence;
use rust_decimal::Decimal;
use time::Date;
use time::macros::date;

use crate::{
    AuthenticatedActor, CreateStaffRequest, EntryMutationResponse, EntryRequest, Role,
    create_entry, create_staff,
};

pub fn create_test_master() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("ana"), Role::Master)
}

pub fn create_test_staff() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("bia"), Role::Staff)
}

pub fn create_other_staff() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("caio"), Role::Staff)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("API request"))
}

/// A date inside March 2026, used as "today".
pub fn test_today() -> Date {
    date!(2026 - 03 - 18)
}

/// A persistence instance with `ana` (master), `bia` and `caio` (staff).
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    create_staff(
        &mut persistence,
        CreateStaffRequest {
            staff_id: String::from("ana"),
            display_name: String::from("Ana Souza"),
            is_master: false,
        },
        None,
        create_test_cause(),
    )
    .unwrap();

    let master: AuthenticatedActor = create_test_master();
    for (staff_id, name) in [("bia", "Bia Lima"), ("caio", "Caio Prado")] {
        create_staff(
            &mut persistence,
            CreateStaffRequest {
                staff_id: String::from(staff_id),
                display_name: String::from(name),
                is_master: false,
            },
            Some(&master),
            create_test_cause(),
        )
        .unwrap();
    }
    persistence
}

pub fn registration_request(responsible: Option<&str>, entry_date: &str, quantity: u32) -> EntryRequest {
    EntryRequest {
        entry_type: String::from("trademark_registration"),
        client_name: String::from("Acme Ltda"),
        brand_name: Some(String::from("Acme")),
        responsible_user_id: responsible.map(String::from),
        entry_date: String::from(entry_date),
        observations: None,
        brand_quantity: Some(quantity),
        payment_type: Some(String::from("cash")),
        publication_type: None,
        pub_quantity: None,
        payment_form: None,
        installments_paid: None,
        total_resolved_value: None,
    }
}

pub fn publication_request(responsible: Option<&str>, entry_date: &str, quantity: u32) -> EntryRequest {
    EntryRequest {
        entry_type: String::from("publication"),
        client_name: String::from("Jornal Local"),
        brand_name: None,
        responsible_user_id: responsible.map(String::from),
        entry_date: String::from(entry_date),
        observations: None,
        brand_quantity: None,
        payment_type: None,
        publication_type: Some(String::from("edital")),
        pub_quantity: Some(quantity),
        payment_form: Some(String::from("installment")),
        installments_paid: None,
        total_resolved_value: None,
    }
}

pub fn collection_request(
    responsible: Option<&str>,
    entry_date: &str,
    installments: u32,
    value: Decimal,
) -> EntryRequest {
    EntryRequest {
        entry_type: String::from("debt_collection"),
        client_name: String::from("Devedor SA"),
        brand_name: None,
        responsible_user_id: responsible.map(String::from),
        entry_date: String::from(entry_date),
        observations: Some(String::from("acordo")),
        brand_quantity: None,
        payment_type: None,
        publication_type: None,
        pub_quantity: None,
        payment_form: None,
        installments_paid: Some(installments),
        total_resolved_value: Some(value),
    }
}

/// Records an entry as the master and returns its ID.
pub fn seed_entry(persistence: &mut Persistence, request: EntryRequest) -> i64 {
    let response: EntryMutationResponse = create_entry(
        persistence,
        request,
        &create_test_master(),
        create_test_cause(),
    )
    .unwrap();
    response.entry.entry_id.unwrap()
}
