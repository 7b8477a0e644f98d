// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team directory mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use premia_domain::StaffMember;
use tracing::info;

use crate::diesel_schema::staff;
use crate::error::PersistenceError;

/// Inserts a new staff member.
///
/// # Errors
///
/// Returns an error if the insert fails or the ID is already taken.
pub fn insert_staff(
    conn: &mut SqliteConnection,
    member: &StaffMember,
) -> Result<(), PersistenceError> {
    diesel::insert_into(staff::table)
        .values((
            staff::staff_id.eq(member.staff_id.value()),
            staff::display_name.eq(&member.display_name),
            staff::is_master.eq(i32::from(member.is_master)),
        ))
        .execute(conn)?;

    info!(
        staff_id = member.staff_id.value(),
        is_master = member.is_master,
        "Staff member created"
    );
    Ok(())
}

/// Sets a staff member's disabled flag.
///
/// # Errors
///
/// Returns `PersistenceError::StaffNotFound` if no member has this ID, or an
/// error if the update fails.
pub fn set_staff_disabled(
    conn: &mut SqliteConnection,
    staff_id: &str,
    disabled: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(staff::table.filter(staff::staff_id.eq(staff_id)))
        .set(staff::is_disabled.eq(i32::from(disabled)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::StaffNotFound(staff_id.to_string()));
    }

    info!(staff_id, disabled, "Staff member access changed");
    Ok(())
}
