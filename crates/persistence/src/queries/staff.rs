// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team directory queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::StaffData;
use crate::diesel_schema::staff;
use crate::error::PersistenceError;

/// Diesel Queryable struct for staff rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = staff)]
struct StaffRow {
    staff_id: String,
    display_name: String,
    is_master: i32,
    is_disabled: i32,
    created_at: String,
}

impl From<StaffRow> for StaffData {
    fn from(row: StaffRow) -> Self {
        Self {
            staff_id: row.staff_id,
            display_name: row.display_name,
            is_master: row.is_master != 0,
            is_disabled: row.is_disabled != 0,
            created_at: row.created_at,
        }
    }
}

/// Retrieves a staff member by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the member is not found.
pub fn get_staff(
    conn: &mut SqliteConnection,
    staff_id: &str,
) -> Result<Option<StaffData>, PersistenceError> {
    debug!(staff_id, "Looking up staff member");

    Ok(staff::table
        .filter(staff::staff_id.eq(staff_id))
        .select(StaffRow::as_select())
        .first::<StaffRow>(conn)
        .optional()?
        .map(StaffData::from))
}

/// Lists every staff member, disabled ones included.
///
/// Members are ordered by display name, then by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_staff(conn: &mut SqliteConnection) -> Result<Vec<StaffData>, PersistenceError> {
    let rows: Vec<StaffRow> = staff::table
        .select(StaffRow::as_select())
        .order((staff::display_name.asc(), staff::staff_id.asc()))
        .load::<StaffRow>(conn)?;

    Ok(rows.into_iter().map(StaffData::from).collect())
}

/// Counts staff members, disabled ones included.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_staff(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(staff::table.count().get_result(conn)?)
}
