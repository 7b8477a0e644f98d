// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for Premia.
//!
//! Translates requests into core commands and report queries, enforces
//! role-based authorization and maps domain failures onto API errors.

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

mod auth;
mod error;
mod handlers;
mod report;
mod request_response;
mod store;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    audit_timeline, create_entry, create_staff, delete_entry, export_premium_csv, list_entries,
    list_staff, premium_report, resolve_period, set_staff_disabled, update_entry,
};
pub use report::{CSV_HEADERS, ExportError, render_staff_csv};
pub use request_response::{
    AuditEventInfo, AuditTimelineResponse, CreateStaffRequest, DeleteEntryResponse, EntryInfo,
    EntryMutationResponse, EntryRequest, ListEntriesResponse, ListStaffResponse,
    PremiumReportResponse, ReportQuery, SetStaffDisabledRequest, StaffInfo, StaffMutationResponse,
};
pub use store::{AuditLog, EntryStore, IdentityProvider, TeamDirectory};
