// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborators the API operations depend on.
//!
//! Operations are written against these traits; `Persistence` implements all
//! of them.

use premia::TransitionResult;
use premia_audit::AuditEvent;
use premia_domain::{Entry, StaffMember};
use premia_persistence::{EntryQuery, PersistTransitionResult, Persistence, StaffData};

use crate::auth::{AuthenticatedActor, Role};
use crate::error::{ApiError, AuthError};

/// Source and sink of incentive entries.
pub trait EntryStore {
    /// Lists the entries matching a query, ordered by date then ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_entries(&mut self, query: &EntryQuery) -> Result<Vec<Entry>, ApiError>;

    /// Retrieves an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_entry(&mut self, entry_id: i64) -> Result<Option<Entry>, ApiError>;

    /// Stores a transition's effect together with its audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the change.
    fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<PersistTransitionResult, ApiError>;
}

/// The team directory.
pub trait TeamDirectory {
    /// Lists every staff member, disabled ones included.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_staff(&mut self) -> Result<Vec<StaffData>, ApiError>;

    /// Lists the directory as domain members.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn directory(&mut self) -> Result<Vec<StaffMember>, ApiError> {
        Ok(self
            .list_staff()?
            .iter()
            .map(StaffData::to_member)
            .collect())
    }
}

/// Resolves who is making a request.
pub trait IdentityProvider {
    /// Resolves an enabled staff member into an authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is unknown or disabled.
    fn current_user(&mut self, staff_id: &str) -> Result<AuthenticatedActor, AuthError>;

    /// Returns whether a staff member holds elevated visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is unknown or disabled.
    fn is_elevated(&mut self, staff_id: &str) -> Result<bool, AuthError> {
        Ok(self.current_user(staff_id)?.is_elevated())
    }
}

/// Read access to the audit log.
pub trait AuditLog {
    /// Lists audit events oldest first, optionally for one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    fn timeline(&mut self, entry_id: Option<i64>) -> Result<Vec<AuditEvent>, ApiError>;
}

impl EntryStore for Persistence {
    fn list_entries(&mut self, query: &EntryQuery) -> Result<Vec<Entry>, ApiError> {
        Ok(Self::list_entries(self, query)?)
    }

    fn get_entry(&mut self, entry_id: i64) -> Result<Option<Entry>, ApiError> {
        Ok(Self::get_entry(self, entry_id)?)
    }

    fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<PersistTransitionResult, ApiError> {
        Ok(Self::persist_transition(self, result)?)
    }
}

impl TeamDirectory for Persistence {
    fn list_staff(&mut self) -> Result<Vec<StaffData>, ApiError> {
        Ok(Self::list_staff(self)?)
    }
}

impl IdentityProvider for Persistence {
    fn current_user(&mut self, staff_id: &str) -> Result<AuthenticatedActor, AuthError> {
        let member: StaffData = self
            .get_staff(staff_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Unknown staff member '{staff_id}'"),
            })?;

        if member.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Staff member is disabled"),
            });
        }

        let role: Role = if member.is_master {
            Role::Master
        } else {
            Role::Staff
        };

        Ok(AuthenticatedActor::new(member.staff_id, role))
    }
}

impl AuditLog for Persistence {
    fn timeline(&mut self, entry_id: Option<i64>) -> Result<Vec<AuditEvent>, ApiError> {
        Ok(self.list_audit_events(entry_id)?)
    }
}
