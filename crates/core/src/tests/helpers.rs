// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::State;
use premia_audit::{Actor, Cause};
use premia_domain::{Entry, EntryDetails, PaymentType, StaffId, StaffMember};
use rust_decimal::Decimal;
use time::macros::date;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("ana"), String::from("master"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("API request"))
}

pub fn create_test_directory() -> Vec<StaffMember> {
    vec![
        StaffMember::new(StaffId::new("ana"), String::from("Ana Souza"), true),
        StaffMember::new(StaffId::new("bia"), String::from("Bia Lima"), false),
    ]
}

pub fn create_test_state() -> State {
    State::new(create_test_directory(), None)
}

pub fn create_test_entry(responsible: &str) -> Entry {
    Entry::new(
        String::from("Acme Ltda"),
        StaffId::new(responsible),
        date!(2026 - 03 - 10),
        EntryDetails::TrademarkRegistration {
            brand_quantity: Some(2),
            payment_type: PaymentType::Cash,
        },
    )
}

pub fn create_test_collection_entry(responsible: &str) -> Entry {
    Entry::new(
        String::from("Devedor SA"),
        StaffId::new(responsible),
        date!(2026 - 03 - 12),
        EntryDetails::DebtCollection {
            installments_paid: Some(2),
            total_resolved_value: Some(Decimal::from(1200)),
        },
    )
}
