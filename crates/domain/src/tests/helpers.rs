// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Entry, EntryDetails, PaymentType, StaffId, StaffMember};
use rust_decimal::Decimal;
use time::Date;
use time::macros::date;

pub fn create_test_date() -> Date {
    date!(2026 - 03 - 10)
}

pub fn create_test_registration(
    staff: &str,
    entry_date: Date,
    quantity: Option<u32>,
    payment_type: PaymentType,
) -> Entry {
    Entry::new(
        String::from("Acme Ltda"),
        StaffId::new(staff),
        entry_date,
        EntryDetails::TrademarkRegistration {
            brand_quantity: quantity,
            payment_type,
        },
    )
}

pub fn create_test_publication(staff: &str, entry_date: Date, quantity: Option<u32>) -> Entry {
    Entry::new(
        String::from("Acme Ltda"),
        StaffId::new(staff),
        entry_date,
        EntryDetails::Publication {
            publication_type: Some(String::from("gazette")),
            pub_quantity: quantity,
            payment_form: PaymentType::Installment,
        },
    )
}

pub fn create_test_collection(
    staff: &str,
    entry_date: Date,
    installments: Option<u32>,
    value: Option<Decimal>,
) -> Entry {
    Entry::new(
        String::from("Devedor SA"),
        StaffId::new(staff),
        entry_date,
        EntryDetails::DebtCollection {
            installments_paid: installments,
            total_resolved_value: value,
        },
    )
}

pub fn create_test_staff(id: &str, name: &str, is_master: bool) -> StaffMember {
    StaffMember::new(StaffId::new(id), String::from(name), is_master)
}

pub fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}
