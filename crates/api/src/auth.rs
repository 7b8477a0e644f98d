// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use premia_audit::Actor;
use premia_domain::{Entry, StaffId, Viewer};
use tracing::debug;

use crate::error::AuthError;
use crate::store::IdentityProvider;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Master role: elevated staff with visibility over the whole team.
    ///
    /// Masters may:
    /// - record and edit entries credited to any staff member
    /// - delete entries
    /// - view any member's entries and premiums
    /// - manage the team directory
    /// - read the audit timeline
    Master,
    /// Staff role: members who record and view their own entries only.
    Staff,
}

impl Role {
    /// Returns the role's name as used in audit records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Staff => "staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Master => write!(f, "Master"),
            Self::Staff => write!(f, "Staff"),
        }
    }
}

/// An authenticated staff member with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The staff member's identifier.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The staff member's identifier
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns whether this actor holds elevated visibility.
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self.role, Role::Master)
    }

    /// Returns this actor's staff identifier.
    #[must_use]
    pub fn staff_id(&self) -> StaffId {
        StaffId::new(&self.id)
    }

    /// Converts this actor into the viewer used for report scoping.
    #[must_use]
    pub fn to_viewer(&self) -> Viewer {
        Viewer::new(self.staff_id(), self.is_elevated())
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), String::from(self.role.as_str()))
    }
}

fn require_master(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
    match actor.role {
        Role::Master => Ok(()),
        Role::Staff => Err(AuthError::Unauthorized {
            action: String::from(action),
            required_role: Role::Master.to_string(),
        }),
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may record an entry credited to `responsible`.
    ///
    /// Masters may credit anyone; staff may only credit themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if a staff actor credits someone else.
    pub fn authorize_create_entry(
        actor: &AuthenticatedActor,
        responsible: &StaffId,
    ) -> Result<(), AuthError> {
        if actor.is_elevated() || responsible.value() == actor.id {
            return Ok(());
        }
        require_master(actor, "create_entry_for_other_staff")
    }

    /// Checks if an actor may replace `existing` with `replacement`.
    ///
    /// Staff may only edit their own entries and cannot reassign them.
    ///
    /// # Errors
    ///
    /// Returns an error if a staff actor edits another member's entry or
    /// reassigns their own.
    pub fn authorize_update_entry(
        actor: &AuthenticatedActor,
        existing: &Entry,
        replacement: &Entry,
    ) -> Result<(), AuthError> {
        if actor.is_elevated() {
            return Ok(());
        }
        if existing.responsible_user_id.value() != actor.id {
            return require_master(actor, "update_entry_of_other_staff");
        }
        if replacement.responsible_user_id != existing.responsible_user_id {
            return require_master(actor, "reassign_entry");
        }
        Ok(())
    }

    /// Checks if an actor may delete entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a Master.
    pub fn authorize_delete_entry(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_master(actor, "delete_entry")
    }

    /// Checks if an actor may add members to the team directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a Master.
    pub fn authorize_create_staff(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_master(actor, "create_staff")
    }

    /// Checks if an actor may disable or re-enable `target`.
    ///
    /// Masters cannot change their own access.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a Master or targets themselves.
    pub fn authorize_set_staff_disabled(
        actor: &AuthenticatedActor,
        target: &StaffId,
    ) -> Result<(), AuthError> {
        require_master(actor, "set_staff_disabled")?;
        if target.value() == actor.id {
            return Err(AuthError::Unauthorized {
                action: String::from("set_own_access"),
                required_role: String::from("another Master"),
            });
        }
        Ok(())
    }

    /// Checks if an actor may read the audit timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a Master.
    pub fn authorize_view_audit(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_master(actor, "view_audit_timeline")
    }
}

/// Authentication service resolving request identities.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates the staff member named by a request.
    ///
    /// # Arguments
    ///
    /// * `provider` - The identity provider
    /// * `staff_id` - The identifier presented by the request, if any
    ///
    /// # Errors
    ///
    /// Returns an error if no identifier was presented, or the provider
    /// does not recognize it.
    pub fn authenticate<P: IdentityProvider>(
        provider: &mut P,
        staff_id: Option<&str>,
    ) -> Result<AuthenticatedActor, AuthError> {
        let staff_id: &str = staff_id.map(str::trim).unwrap_or_default();
        if staff_id.is_empty() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("No staff identifier presented"),
            });
        }

        let actor: AuthenticatedActor = provider.current_user(staff_id)?;
        debug!(staff_id, role = %actor.role, "Authenticated staff member");
        Ok(actor)
    }
}
