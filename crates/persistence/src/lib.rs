// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Premia.
//!
//! Stores the team directory, incentive entries and the audit log in
//! `SQLite` via Diesel. Every state change arrives as a core
//! `TransitionResult` and is written together with its audit event in one
//! transaction.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory` gives each caller its own shared-cache
//! in-memory database, so tests never observe each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use premia::TransitionResult;
use premia_audit::AuditEvent;
use premia_domain::Entry;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::StaffData;
pub use error::PersistenceError;
pub use mutations::PersistTransitionResult;
pub use queries::EntryQuery;

/// Persistence adapter for entries, staff and audit events.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::open_connection(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::open_connection(path_str)?;

        // Readers keep working while a write is in progress
        backend::sqlite::use_write_ahead_log(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Persists a transition result: its effect and its audit event.
    ///
    /// # Returns
    ///
    /// The stored audit event ID and, for entry transitions, the entry ID.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails. Nothing is stored in that case.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<PersistTransitionResult, PersistenceError> {
        mutations::persist_transition(&mut self.conn, result)
    }

    // ========================================================================
    // Entries
    // ========================================================================

    /// Retrieves an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be reconstructed.
    pub fn get_entry(&mut self, entry_id: i64) -> Result<Option<Entry>, PersistenceError> {
        queries::get_entry(&mut self.conn, entry_id)
    }

    /// Lists the entries matching a query, ordered by date then ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be reconstructed.
    pub fn list_entries(&mut self, query: &EntryQuery) -> Result<Vec<Entry>, PersistenceError> {
        queries::list_entries(&mut self.conn, query)
    }

    // ========================================================================
    // Staff
    // ========================================================================

    /// Lists the team directory, ordered by display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_staff(&mut self) -> Result<Vec<StaffData>, PersistenceError> {
        queries::list_staff(&mut self.conn)
    }

    /// Retrieves a staff member by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_staff(&mut self, staff_id: &str) -> Result<Option<StaffData>, PersistenceError> {
        queries::get_staff(&mut self.conn, staff_id)
    }

    /// Counts the members of the team directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_staff(&mut self) -> Result<i64, PersistenceError> {
        queries::count_staff(&mut self.conn)
    }

    // ========================================================================
    // Audit
    // ========================================================================

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EventNotFound` if the event does not exist.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::get_audit_event(&mut self.conn, event_id)
    }

    /// Lists audit events oldest first, optionally for a single entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or an event cannot be deserialized.
    pub fn list_audit_events(
        &mut self,
        entry_id: Option<i64>,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::list_audit_events(&mut self.conn, entry_id)
    }
}
