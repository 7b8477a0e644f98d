// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entry queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use premia_domain::{
    Entry, EntryDetails, EntryType, PaymentType, StaffId, parse_date,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::Date;
use tracing::debug;

use crate::diesel_schema::entries;
use crate::error::PersistenceError;

/// Filters applied in SQL when listing entries.
///
/// All bounds are optional and inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    /// Earliest entry date to include.
    pub start: Option<Date>,
    /// Latest entry date to include.
    pub end: Option<Date>,
    /// Only entries credited to this staff member.
    pub responsible: Option<StaffId>,
}

impl EntryQuery {
    /// A query matching every entry.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// A query matching entries dated within `[start, end]`.
    #[must_use]
    pub const fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            responsible: None,
        }
    }

    /// Restricts the query to one responsible staff member.
    #[must_use]
    pub fn for_responsible(mut self, responsible: Option<StaffId>) -> Self {
        self.responsible = responsible;
        self
    }
}

/// Diesel Queryable struct for entry rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = entries)]
pub(crate) struct EntryRow {
    entry_id: i64,
    entry_type: String,
    client_name: String,
    brand_name: Option<String>,
    responsible_user_id: String,
    entry_date: String,
    observations: Option<String>,
    brand_quantity: Option<i32>,
    payment_type: Option<String>,
    publication_type: Option<String>,
    pub_quantity: Option<i32>,
    installments_paid: Option<i32>,
    total_resolved_value: Option<String>,
}

fn reconstruction(err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::ReconstructionError(err.to_string())
}

fn to_quantity(value: Option<i32>) -> Result<Option<u32>, PersistenceError> {
    value
        .map(|v| u32::try_from(v).map_err(reconstruction))
        .transpose()
}

fn required_payment(
    entry_id: i64,
    column: &str,
    value: Option<&str>,
) -> Result<PaymentType, PersistenceError> {
    let raw: &str = value.ok_or_else(|| {
        PersistenceError::ReconstructionError(format!("entry {entry_id} has no {column}"))
    })?;
    PaymentType::parse(raw).map_err(reconstruction)
}

impl EntryRow {
    /// Converts a stored row back into a domain entry.
    pub(crate) fn into_entry(self) -> Result<Entry, PersistenceError> {
        let entry_type: EntryType = EntryType::parse(&self.entry_type).map_err(reconstruction)?;

        let details: EntryDetails = match entry_type {
            EntryType::TrademarkRegistration => EntryDetails::TrademarkRegistration {
                brand_quantity: to_quantity(self.brand_quantity)?,
                payment_type: required_payment(
                    self.entry_id,
                    "payment_type",
                    self.payment_type.as_deref(),
                )?,
            },
            EntryType::Publication => EntryDetails::Publication {
                publication_type: self.publication_type,
                pub_quantity: to_quantity(self.pub_quantity)?,
                payment_form: required_payment(
                    self.entry_id,
                    "payment_form",
                    self.payment_type.as_deref(),
                )?,
            },
            EntryType::DebtCollection => EntryDetails::DebtCollection {
                installments_paid: to_quantity(self.installments_paid)?,
                total_resolved_value: self
                    .total_resolved_value
                    .as_deref()
                    .map(Decimal::from_str)
                    .transpose()
                    .map_err(reconstruction)?,
            },
        };

        let entry_date: Date = parse_date(&self.entry_date).map_err(reconstruction)?;

        Ok(Entry::new(
            self.client_name,
            StaffId::new(&self.responsible_user_id),
            entry_date,
            details,
        )
        .with_id(self.entry_id)
        .with_brand_name(self.brand_name)
        .with_observations(self.observations))
    }
}

/// Retrieves an entry by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
/// Returns `Ok(None)` if the entry does not exist.
pub fn get_entry(
    conn: &mut SqliteConnection,
    entry_id: i64,
) -> Result<Option<Entry>, PersistenceError> {
    debug!(entry_id, "Looking up entry");

    entries::table
        .filter(entries::entry_id.eq(entry_id))
        .select(EntryRow::as_select())
        .first::<EntryRow>(conn)
        .optional()?
        .map(EntryRow::into_entry)
        .transpose()
}

/// Lists entries matching a query.
///
/// Entries are ordered by date, then by ID, so entries sharing a date come
/// back in the order they were recorded.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_entries(
    conn: &mut SqliteConnection,
    query: &EntryQuery,
) -> Result<Vec<Entry>, PersistenceError> {
    let mut statement = entries::table.select(EntryRow::as_select()).into_boxed();

    if let Some(start) = query.start {
        statement = statement.filter(entries::entry_date.ge(start.to_string()));
    }
    if let Some(end) = query.end {
        statement = statement.filter(entries::entry_date.le(end.to_string()));
    }
    if let Some(responsible) = &query.responsible {
        statement =
            statement.filter(entries::responsible_user_id.eq(responsible.value().to_string()));
    }

    let rows: Vec<EntryRow> = statement
        .order((entries::entry_date.asc(), entries::entry_id.asc()))
        .load::<EntryRow>(conn)?;

    debug!(count = rows.len(), "Loaded entries");

    rows.into_iter().map(EntryRow::into_entry).collect()
}
