// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use premia_audit::StateSnapshot;
use premia_domain::{Entry, EntryDetails, StaffMember};

fn optional<T: std::fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| String::from("-"), ToString::to_string)
}

/// Renders an entry as an audit snapshot.
#[must_use]
pub fn entry_snapshot(entry: &Entry) -> StateSnapshot {
    let details: String = match &entry.details {
        EntryDetails::TrademarkRegistration {
            brand_quantity,
            payment_type,
        } => format!(
            "brand_quantity={},payment_type={payment_type}",
            optional(brand_quantity.as_ref())
        ),
        EntryDetails::Publication {
            publication_type,
            pub_quantity,
            payment_form,
        } => format!(
            "publication_type={},pub_quantity={},payment_form={payment_form}",
            optional(publication_type.as_ref()),
            optional(pub_quantity.as_ref())
        ),
        EntryDetails::DebtCollection {
            installments_paid,
            total_resolved_value,
        } => format!(
            "installments_paid={},total_resolved_value={}",
            optional(installments_paid.as_ref()),
            optional(total_resolved_value.as_ref())
        ),
    };

    StateSnapshot::new(format!(
        "entry_id={},type={},client={},responsible={},date={},{details}",
        optional(entry.entry_id.as_ref()),
        entry.entry_type(),
        entry.client_name,
        entry.responsible_user_id,
        entry.entry_date,
    ))
}

/// Renders a staff member as an audit snapshot.
#[must_use]
pub fn staff_snapshot(member: &StaffMember) -> StateSnapshot {
    StateSnapshot::new(format!(
        "staff_id={},display_name={},is_master={}",
        member.staff_id, member.display_name, member.is_master
    ))
}
