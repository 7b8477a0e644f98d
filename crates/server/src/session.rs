// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request identity extraction for the server.
//!
//! Callers identify themselves with the `X-Staff-Id` header; the identity
//! is checked against the team directory on every request.

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use premia_api::{AuthenticatedActor, AuthenticationService};
use premia_persistence::Persistence;
use tokio::sync::MutexGuard;
use tracing::{debug, warn};

use crate::AppState;

/// Header carrying the caller's staff identifier.
pub const STAFF_ID_HEADER: &str = "X-Staff-Id";

/// Extractor for authenticated staff members.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionStaff(actor): SessionStaff,
/// ) -> Result<Json<Response>, HttpError> {
///     // actor: AuthenticatedActor
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if:
/// - The `X-Staff-Id` header is missing or not valid UTF-8
/// - The staff member is unknown
/// - The staff member is disabled
pub struct SessionStaff(pub AuthenticatedActor);

fn header_value(parts: &Parts) -> Result<Option<String>, SessionError> {
    parts
        .headers
        .get(STAFF_ID_HEADER)
        .map(|value| {
            value.to_str().map(str::to_string).map_err(|_| {
                warn!("Invalid X-Staff-Id header encoding");
                SessionError::InvalidStaffHeader
            })
        })
        .transpose()
}

async fn authenticate(state: &AppState, staff_id: &str) -> Result<AuthenticatedActor, SessionError> {
    let mut persistence: MutexGuard<'_, Persistence> = state.persistence.lock().await;
    let actor: AuthenticatedActor =
        AuthenticationService::authenticate(&mut *persistence, Some(staff_id)).map_err(|e| {
            warn!(error = %e, "Staff authentication failed");
            SessionError::InvalidStaff(e.to_string())
        })?;

    debug!(staff_id = %actor.id, role = %actor.role, "Request authenticated");
    Ok(actor)
}

impl FromRequestParts<AppState> for SessionStaff {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let staff_id: String = header_value(parts)?.ok_or_else(|| {
            debug!("Missing X-Staff-Id header");
            SessionError::MissingStaffHeader
        })?;

        Ok(Self(authenticate(state, &staff_id).await?))
    }
}

/// An absent header yields `None`; a present one must authenticate.
impl OptionalFromRequestParts<AppState> for SessionStaff {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match header_value(parts)? {
            Some(staff_id) => Ok(Some(Self(authenticate(state, &staff_id).await?))),
            None => Ok(None),
        }
    }
}

/// Identity extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// The `X-Staff-Id` header is missing.
    MissingStaffHeader,
    /// The `X-Staff-Id` header is not valid UTF-8.
    InvalidStaffHeader,
    /// The staff member could not be authenticated.
    InvalidStaff(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingStaffHeader => format!("Missing {STAFF_ID_HEADER} header"),
            Self::InvalidStaffHeader => format!("Invalid {STAFF_ID_HEADER} header"),
            Self::InvalidStaff(reason) => reason,
        };

        crate::HttpError {
            status: StatusCode::UNAUTHORIZED,
            kind: "authentication_failed",
            message,
        }
        .into_response()
    }
}
