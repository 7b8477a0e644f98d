// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use premia_audit::AuditEvent;

use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for audit event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_events)]
struct AuditEventRow {
    event_id: i64,
    entry_id: Option<i64>,
    actor_json: String,
    cause_json: String,
    action_json: String,
    before_snapshot_json: String,
    after_snapshot_json: String,
}

impl AuditEventRow {
    fn into_event(self) -> Result<AuditEvent, PersistenceError> {
        let actor: ActorData = serde_json::from_str(&self.actor_json)?;
        let cause: CauseData = serde_json::from_str(&self.cause_json)?;
        let action: ActionData = serde_json::from_str(&self.action_json)?;
        let before: StateSnapshotData = serde_json::from_str(&self.before_snapshot_json)?;
        let after: StateSnapshotData = serde_json::from_str(&self.after_snapshot_json)?;

        let event: AuditEvent = AuditEvent::new(
            self.entry_id,
            actor.into(),
            cause.into(),
            action.into(),
            before.into(),
            after.into(),
        );

        Ok(event.with_event_id(self.event_id))
    }
}

/// Retrieves an audit event by ID.
///
/// # Errors
///
/// Returns `PersistenceError::EventNotFound` if no such event exists, or an
/// error if the stored JSON cannot be deserialized.
pub fn get_audit_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<AuditEvent, PersistenceError> {
    let row: AuditEventRow = audit_events::table
        .filter(audit_events::event_id.eq(event_id))
        .select(AuditEventRow::as_select())
        .first::<AuditEventRow>(conn)
        .optional()?
        .ok_or(PersistenceError::EventNotFound(event_id))?;

    row.into_event()
}

/// Lists audit events in the order they were recorded.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entry_id` - When set, only events for this entry
///
/// # Errors
///
/// Returns an error if the query fails or stored JSON cannot be deserialized.
pub fn list_audit_events(
    conn: &mut SqliteConnection,
    entry_id: Option<i64>,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let mut statement = audit_events::table
        .select(AuditEventRow::as_select())
        .into_boxed();

    if let Some(entry_id) = entry_id {
        statement = statement.filter(audit_events::entry_id.eq(entry_id));
    }

    let rows: Vec<AuditEventRow> = statement
        .order(audit_events::event_id.asc())
        .load::<AuditEventRow>(conn)?;

    rows.into_iter().map(AuditEventRow::into_event).collect()
}
