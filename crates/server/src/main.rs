// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod config;
mod session;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono_tz::Tz;
use clap::Parser;
use premia_api::{
    ApiError, AuditTimelineResponse, CreateStaffRequest, DeleteEntryResponse,
    EntryMutationResponse, EntryRequest, ListEntriesResponse, ListStaffResponse,
    PremiumReportResponse, ReportQuery, SetStaffDisabledRequest, StaffMutationResponse,
    audit_timeline, create_entry, create_staff, delete_entry, export_premium_csv, list_entries,
    list_staff, premium_report, set_staff_disabled, update_entry,
};
use premia_audit::Cause;
use premia_domain::{PremiumRules, today_in_zone};
use premia_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use time::Date;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info};

use crate::session::SessionStaff;

/// Premia Server - HTTP server for staff award calculation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// JSON file overriding the default premium rules
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// IANA time zone deciding what "today" is
    #[arg(short, long)]
    timezone: Option<String>,
}

/// Header carrying the caller's request identifier, recorded as the audit cause.
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for entries, staff and audit events.
    persistence: Arc<Mutex<Persistence>>,
    /// The premium rules in force.
    rules: Arc<PremiumRules>,
    /// The firm's time zone.
    time_zone: Tz,
}

impl AppState {
    /// Today's date in the firm's time zone.
    fn today(&self) -> Result<Date, HttpError> {
        today_in_zone(chrono::Utc::now(), self.time_zone).map_err(|e| {
            HttpError::from(ApiError::Internal {
                message: e.to_string(),
            })
        })
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Machine-readable error kind.
    error: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// Machine-readable error kind.
    kind: &'static str,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.kind.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let (status, kind): (StatusCode, &'static str) = match &err {
            ApiError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "authentication_failed")
            }
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::DomainRuleViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "domain_rule_violation")
            }
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };

        Self {
            status,
            kind,
            message: err.to_string(),
        }
    }
}

/// Builds the audit cause of a request.
///
/// Uses the caller's `X-Request-Id` when present.
fn request_cause(headers: &HeaderMap, description: &str) -> Cause {
    let id: String = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| String::from("http-request"), str::to_string);

    Cause::new(id, String::from(description))
}

/// Query parameters for the audit timeline.
#[derive(Debug, Deserialize)]
struct AuditTimelineQuery {
    /// Only events for this entry.
    entry_id: Option<i64>,
}

/// Liveness response body.
#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok`.
    status: String,
}

/// Handler for GET `/health`.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/staff`.
///
/// The header is optional: the first member can be added anonymously.
async fn handle_create_staff(
    AxumState(app_state): AxumState<AppState>,
    session: Option<SessionStaff>,
    headers: HeaderMap,
    Json(req): Json<CreateStaffRequest>,
) -> Result<(StatusCode, Json<StaffMutationResponse>), HttpError> {
    info!(staff_id = %req.staff_id, "Handling create_staff request");

    let cause: Cause = request_cause(&headers, "Create staff member");
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    let response: StaffMutationResponse = create_staff(
        &mut *persistence,
        req,
        session.as_ref().map(|SessionStaff(actor)| actor),
        cause,
    )?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/staff`.
async fn handle_list_staff(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_actor): SessionStaff,
) -> Result<Json<ListStaffResponse>, HttpError> {
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    Ok(Json(list_staff(&mut *persistence)?))
}

/// Handler for PUT `/staff/{staff_id}/disabled`.
async fn handle_set_staff_disabled(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    Path(staff_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<SetStaffDisabledRequest>,
) -> Result<Json<StaffMutationResponse>, HttpError> {
    info!(
        actor = %actor.id,
        staff_id = %staff_id,
        disabled = req.disabled,
        "Handling set_staff_disabled request"
    );

    let cause: Cause = request_cause(&headers, "Change staff access");
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    let response: StaffMutationResponse =
        set_staff_disabled(&mut *persistence, &staff_id, req, &actor, cause)?;

    Ok(Json(response))
}

/// Handler for GET `/entries`.
async fn handle_list_entries(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ListEntriesResponse>, HttpError> {
    let today: Date = app_state.today()?;
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    Ok(Json(list_entries(&mut *persistence, &query, today, &actor)?))
}

/// Handler for POST `/entries`.
async fn handle_create_entry(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    headers: HeaderMap,
    Json(req): Json<EntryRequest>,
) -> Result<(StatusCode, Json<EntryMutationResponse>), HttpError> {
    info!(
        actor = %actor.id,
        entry_type = %req.entry_type,
        "Handling create_entry request"
    );

    let cause: Cause = request_cause(&headers, "Create entry");
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    let response: EntryMutationResponse = create_entry(&mut *persistence, req, &actor, cause)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/entries/{entry_id}`.
async fn handle_update_entry(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    Path(entry_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<EntryRequest>,
) -> Result<Json<EntryMutationResponse>, HttpError> {
    info!(actor = %actor.id, entry_id, "Handling update_entry request");

    let cause: Cause = request_cause(&headers, "Update entry");
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    let response: EntryMutationResponse =
        update_entry(&mut *persistence, entry_id, req, &actor, cause)?;

    Ok(Json(response))
}

/// Handler for DELETE `/entries/{entry_id}`.
async fn handle_delete_entry(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    Path(entry_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<DeleteEntryResponse>, HttpError> {
    info!(actor = %actor.id, entry_id, "Handling delete_entry request");

    let cause: Cause = request_cause(&headers, "Delete entry");
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    let response: DeleteEntryResponse = delete_entry(&mut *persistence, entry_id, &actor, cause)?;

    Ok(Json(response))
}

/// Handler for GET `/premiums`.
async fn handle_premiums(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    Query(query): Query<ReportQuery>,
) -> Result<Json<PremiumReportResponse>, HttpError> {
    let today: Date = app_state.today()?;
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    let report: PremiumReportResponse =
        premium_report(&mut *persistence, &query, today, &app_state.rules, &actor)?;

    Ok(Json(report))
}

/// Handler for GET `/premiums/export.csv`.
async fn handle_premiums_csv(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let today: Date = app_state.today()?;
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    let csv: String =
        export_premium_csv(&mut *persistence, &query, today, &app_state.rules, &actor)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"premiums.csv\"",
            ),
        ],
        csv,
    ))
}

/// Handler for GET `/audit/timeline`.
async fn handle_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(actor): SessionStaff,
    Query(query): Query<AuditTimelineQuery>,
) -> Result<Json<AuditTimelineResponse>, HttpError> {
    let mut persistence: MutexGuard<'_, Persistence> = app_state.persistence.lock().await;
    Ok(Json(audit_timeline(
        &mut *persistence,
        query.entry_id,
        &actor,
    )?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/staff", post(handle_create_staff).get(handle_list_staff))
        .route("/staff/{staff_id}/disabled", put(handle_set_staff_disabled))
        .route("/entries", get(handle_list_entries).post(handle_create_entry))
        .route(
            "/entries/{entry_id}",
            put(handle_update_entry).delete(handle_delete_entry),
        )
        .route("/premiums", get(handle_premiums))
        .route("/premiums/export.csv", get(handle_premiums_csv))
        .route("/audit/timeline", get(handle_audit_timeline))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Premia Server");

    let rules: PremiumRules = config::load_rules(args.rules.as_deref())?;
    let time_zone: Tz = config::load_time_zone(args.timezone.as_deref())?;
    info!(time_zone = %time_zone, "Using time zone");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        rules: Arc::new(rules),
        time_zone,
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
