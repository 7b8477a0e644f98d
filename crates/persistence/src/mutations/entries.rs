// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entry mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use premia_domain::{Entry, EntryDetails};
use tracing::{debug, info};

use crate::backend::sqlite::last_insert_rowid;
use crate::diesel_schema::entries;
use crate::error::PersistenceError;

/// Column values written for an entry.
///
/// Used for both inserts and full-record updates; `None` clears a column.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = entries)]
#[diesel(treat_none_as_null = true)]
struct EntryRecord<'a> {
    entry_type: &'a str,
    client_name: &'a str,
    brand_name: Option<&'a str>,
    responsible_user_id: &'a str,
    entry_date: String,
    observations: Option<&'a str>,
    brand_quantity: Option<i32>,
    payment_type: Option<&'a str>,
    publication_type: Option<&'a str>,
    pub_quantity: Option<i32>,
    installments_paid: Option<i32>,
    total_resolved_value: Option<String>,
}

fn to_column(value: Option<u32>, field: &str) -> Result<Option<i32>, PersistenceError> {
    value
        .map(|v| {
            i32::try_from(v).map_err(|_| {
                PersistenceError::SerializationError(format!("{field} {v} is out of range"))
            })
        })
        .transpose()
}

impl<'a> EntryRecord<'a> {
    fn from_entry(entry: &'a Entry) -> Result<Self, PersistenceError> {
        let mut record: Self = Self {
            entry_type: entry.entry_type().as_str(),
            client_name: entry.client_name.trim(),
            brand_name: entry.brand_name.as_deref(),
            responsible_user_id: entry.responsible_user_id.value(),
            entry_date: entry.entry_date.to_string(),
            observations: entry.observations.as_deref(),
            brand_quantity: None,
            payment_type: None,
            publication_type: None,
            pub_quantity: None,
            installments_paid: None,
            total_resolved_value: None,
        };

        match &entry.details {
            EntryDetails::TrademarkRegistration {
                brand_quantity,
                payment_type,
            } => {
                record.brand_quantity = to_column(*brand_quantity, "brand_quantity")?;
                record.payment_type = Some(payment_type.as_str());
            }
            EntryDetails::Publication {
                publication_type,
                pub_quantity,
                payment_form,
            } => {
                record.publication_type = publication_type.as_deref();
                record.pub_quantity = to_column(*pub_quantity, "pub_quantity")?;
                record.payment_type = Some(payment_form.as_str());
            }
            EntryDetails::DebtCollection {
                installments_paid,
                total_resolved_value,
            } => {
                record.installments_paid = to_column(*installments_paid, "installments_paid")?;
                record.total_resolved_value = total_resolved_value.map(|value| value.to_string());
            }
        }

        Ok(record)
    }
}

/// Inserts a new entry.
///
/// Any ID the entry carries is ignored.
///
/// # Returns
///
/// The ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails (including an unknown responsible
/// staff member, rejected by the foreign key).
pub fn insert_entry(conn: &mut SqliteConnection, entry: &Entry) -> Result<i64, PersistenceError> {
    let record: EntryRecord<'_> = EntryRecord::from_entry(entry)?;

    diesel::insert_into(entries::table)
        .values(&record)
        .execute(conn)?;

    let entry_id: i64 = last_insert_rowid(conn)?;

    info!(
        entry_id,
        entry_type = record.entry_type,
        responsible = record.responsible_user_id,
        "Entry created"
    );

    Ok(entry_id)
}

/// Overwrites every field of an existing entry.
///
/// # Errors
///
/// Returns `PersistenceError::EntryNotFound` if no row has this ID, or an
/// error if the update fails.
pub fn update_entry(
    conn: &mut SqliteConnection,
    entry_id: i64,
    entry: &Entry,
) -> Result<(), PersistenceError> {
    let record: EntryRecord<'_> = EntryRecord::from_entry(entry)?;

    let updated: usize = diesel::update(entries::table.filter(entries::entry_id.eq(entry_id)))
        .set((
            &record,
            entries::updated_at.eq(diesel::dsl::sql::<Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::EntryNotFound(entry_id));
    }

    info!(entry_id, "Entry updated");
    Ok(())
}

/// Permanently deletes an entry.
///
/// # Errors
///
/// Returns `PersistenceError::EntryNotFound` if no row has this ID, or an
/// error if the delete fails.
pub fn delete_entry(conn: &mut SqliteConnection, entry_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(entries::table.filter(entries::entry_id.eq(entry_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::EntryNotFound(entry_id));
    }

    debug!(entry_id, "Entry deleted");
    Ok(())
}
