// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations.
//!
//! Each write enforces authorization, applies a core command to the current
//! state and persists the result together with its audit event. Each read
//! resolves the period and user filter, loads a fresh snapshot and
//! recomputes every figure from it.

use premia::{Command, State, TransitionResult, apply};
use premia_audit::{Actor, Cause};
use premia_domain::{
    Entry, PeriodFilter, PeriodMode, PremiumRules, PremiumSummary, StaffId, StaffMember,
    StaffPremiumSummary, UserFilter, compute_premium_summary, compute_staff_breakdown,
    resolve_user_filter, select_working_set,
};
use premia_persistence::{EntryQuery, PersistTransitionResult};
use time::Date;
use tracing::{debug, info};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::report::render_staff_csv;
use crate::request_response::{
    AuditEventInfo, AuditTimelineResponse, CreateStaffRequest, DeleteEntryResponse, EntryInfo,
    EntryMutationResponse, EntryRequest, ListEntriesResponse, ListStaffResponse,
    PremiumReportResponse, ReportQuery, SetStaffDisabledRequest, StaffInfo, StaffMutationResponse,
};
use crate::store::{AuditLog, EntryStore, TeamDirectory};

/// Actor type recorded for the member created while the directory is empty.
const BOOTSTRAP_ACTOR_TYPE: &str = "bootstrap";

fn entry_not_found(entry_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Entry"),
        message: format!("Entry {entry_id} does not exist"),
    }
}

/// Loads the stored copy of an entry after a write.
fn reload_entry<S: EntryStore>(store: &mut S, entry_id: i64) -> Result<Entry, ApiError> {
    store
        .get_entry(entry_id)?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Entry {entry_id} missing after write"),
        })
}

/// Resolves the period selected by a query.
///
/// Explicit `year` + `month` take precedence over `period`. Without either,
/// the current month is used.
///
/// # Arguments
///
/// * `query` - The request's query parameters
/// * `today` - The current date in the firm's time zone
///
/// # Errors
///
/// Returns an error if only one of `year` and `month` is given, or the
/// period or month is invalid.
pub fn resolve_period(query: &ReportQuery, today: Date) -> Result<PeriodFilter, ApiError> {
    match (query.year, query.month) {
        (Some(year), Some(month)) => {
            PeriodFilter::month_number(year, month).map_err(translate_domain_error)
        }
        (None, None) => {
            let mode: PeriodMode = match query.period.as_deref().map(str::trim) {
                None | Some("") => PeriodMode::default(),
                Some(period) => PeriodMode::parse(period).map_err(translate_domain_error)?,
            };
            PeriodFilter::for_mode(mode, today).map_err(translate_domain_error)
        }
        _ => Err(ApiError::InvalidInput {
            field: String::from("month"),
            message: String::from("'year' and 'month' must be given together"),
        }),
    }
}

/// Loads the working set for a period and a resolved user filter.
///
/// The store filters in SQL; the result is filtered again in memory so the
/// working set never depends on how the store interprets the query.
fn load_working_set<S: EntryStore>(
    store: &mut S,
    period: &PeriodFilter,
    user_filter: &UserFilter,
) -> Result<Vec<Entry>, ApiError> {
    let responsible: Option<StaffId> = match user_filter {
        UserFilter::All => None,
        UserFilter::Staff(staff_id) => Some(staff_id.clone()),
    };
    let query: EntryQuery = EntryQuery::between(period.start(), period.end())
        .for_responsible(responsible);

    let entries: Vec<Entry> = store.list_entries(&query)?;
    Ok(select_working_set(&entries, period, user_filter))
}

fn requested_user_filter(query: &ReportQuery) -> UserFilter {
    query
        .user
        .as_deref()
        .map_or(UserFilter::All, UserFilter::parse)
}

// ============================================================================
// Staff
// ============================================================================

/// Adds a member to the team directory.
///
/// While the directory is empty anyone may add the first member, who always
/// becomes a master. Afterwards only masters may add members.
///
/// # Arguments
///
/// * `store` - The entry store and team directory
/// * `request` - The new member
/// * `actor` - The authenticated actor, if the request carried one
/// * `cause` - The cause of this action
///
/// # Errors
///
/// Returns an error if:
/// - The directory is not empty and the actor is missing or not a Master
/// - The staff ID or display name is invalid
/// - The staff ID is already taken
pub fn create_staff<S: EntryStore + TeamDirectory>(
    store: &mut S,
    request: CreateStaffRequest,
    actor: Option<&AuthenticatedActor>,
    cause: Cause,
) -> Result<StaffMutationResponse, ApiError> {
    let directory: Vec<StaffMember> = store.directory()?;
    let bootstrapping: bool = directory.is_empty();

    let (audit_actor, is_master): (Actor, bool) = if bootstrapping {
        (
            Actor::new(
                request.staff_id.trim().to_string(),
                String::from(BOOTSTRAP_ACTOR_TYPE),
            ),
            true,
        )
    } else {
        let actor: &AuthenticatedActor = actor.ok_or_else(|| ApiError::AuthenticationFailed {
            reason: String::from("No staff identifier presented"),
        })?;
        AuthorizationService::authorize_create_staff(actor)?;
        (actor.to_audit_actor(), request.is_master)
    };

    let staff_id: StaffId = StaffId::new(&request.staff_id);
    let command: Command = Command::RegisterStaff {
        staff_id: staff_id.clone(),
        display_name: request.display_name,
        is_master,
    };

    let result: TransitionResult = apply(&State::new(directory, None), command, audit_actor, cause)
        .map_err(translate_core_error)?;
    let persisted: PersistTransitionResult = store.persist_transition(&result)?;

    info!(
        staff_id = staff_id.value(),
        is_master,
        bootstrapping,
        "Staff member added"
    );

    Ok(StaffMutationResponse {
        staff_id: staff_id.to_string(),
        event_id: persisted.event_id,
        message: format!("Added staff member '{staff_id}'"),
    })
}

/// Lists the team directory, disabled members included.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_staff<S: TeamDirectory>(store: &mut S) -> Result<ListStaffResponse, ApiError> {
    let staff: Vec<StaffInfo> = store
        .list_staff()?
        .into_iter()
        .map(StaffInfo::from)
        .collect();

    Ok(ListStaffResponse { staff })
}

/// Disables or re-enables a staff member.
///
/// Disabled members can no longer authenticate but stay in the directory, so
/// their entries keep appearing in reports.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Master, or targets themselves
/// - The staff member does not exist
pub fn set_staff_disabled<S: EntryStore + TeamDirectory>(
    store: &mut S,
    staff_id: &str,
    request: SetStaffDisabledRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<StaffMutationResponse, ApiError> {
    let staff_id: StaffId = StaffId::new(staff_id);
    AuthorizationService::authorize_set_staff_disabled(actor, &staff_id)?;

    let command: Command = Command::SetStaffDisabled {
        staff_id: staff_id.clone(),
        disabled: request.disabled,
    };
    let state: State = State::new(store.directory()?, None);
    let result: TransitionResult = apply(&state, command, actor.to_audit_actor(), cause)
        .map_err(translate_core_error)?;
    let persisted: PersistTransitionResult = store.persist_transition(&result)?;

    info!(
        staff_id = staff_id.value(),
        disabled = request.disabled,
        actor = %actor.id,
        "Staff member access changed"
    );

    let verb: &str = if request.disabled {
        "Disabled"
    } else {
        "Enabled"
    };
    Ok(StaffMutationResponse {
        staff_id: staff_id.to_string(),
        event_id: persisted.event_id,
        message: format!("{verb} staff member '{staff_id}'"),
    })
}

// ============================================================================
// Entries
// ============================================================================

/// Lists the entries visible to the actor for a period.
///
/// Staff always see only their own entries, whatever `user` they request.
///
/// # Errors
///
/// Returns an error if the period is invalid or the store cannot be read.
pub fn list_entries<S: EntryStore>(
    store: &mut S,
    query: &ReportQuery,
    today: Date,
    actor: &AuthenticatedActor,
) -> Result<ListEntriesResponse, ApiError> {
    let period: PeriodFilter = resolve_period(query, today)?;
    let user_filter: UserFilter =
        resolve_user_filter(&actor.to_viewer(), requested_user_filter(query));

    let entries: Vec<Entry> = load_working_set(store, &period, &user_filter)?;
    debug!(
        count = entries.len(),
        start = %period.start(),
        end = %period.end(),
        user_filter = %user_filter,
        "Listed entries"
    );

    Ok(ListEntriesResponse {
        period_start: period.start().to_string(),
        period_end: period.end().to_string(),
        user_filter: user_filter.to_string(),
        entries: entries.iter().map(EntryInfo::from).collect(),
    })
}

/// Records a new entry.
///
/// When the request names no responsible member the actor is credited.
///
/// # Errors
///
/// Returns an error if:
/// - A staff actor credits someone else
/// - Any field is invalid
/// - The responsible member is not in the directory
pub fn create_entry<S: EntryStore + TeamDirectory>(
    store: &mut S,
    request: EntryRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<EntryMutationResponse, ApiError> {
    let entry: Entry = request
        .into_entry(&actor.staff_id())
        .map_err(translate_domain_error)?;
    AuthorizationService::authorize_create_entry(actor, &entry.responsible_user_id)?;

    let state: State = State::new(store.directory()?, None);
    let result: TransitionResult = apply(
        &state,
        Command::CreateEntry { entry },
        actor.to_audit_actor(),
        cause,
    )
    .map_err(translate_core_error)?;
    let persisted: PersistTransitionResult = store.persist_transition(&result)?;

    let entry_id: i64 = persisted.entry_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Entry ID not returned after insert"),
    })?;
    let stored: Entry = reload_entry(store, entry_id)?;

    info!(
        entry_id,
        entry_type = %stored.entry_type(),
        responsible = %stored.responsible_user_id,
        actor = %actor.id,
        "Entry created"
    );

    Ok(EntryMutationResponse {
        entry: EntryInfo::from(&stored),
        event_id: persisted.event_id,
        message: format!("Created entry {entry_id}"),
    })
}

/// Replaces every field of an existing entry.
///
/// When the request names no responsible member the current one is kept.
///
/// # Errors
///
/// Returns an error if:
/// - The entry does not exist
/// - A staff actor edits another member's entry or reassigns their own
/// - Any field is invalid
pub fn update_entry<S: EntryStore + TeamDirectory>(
    store: &mut S,
    entry_id: i64,
    request: EntryRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<EntryMutationResponse, ApiError> {
    let existing: Entry = store
        .get_entry(entry_id)?
        .ok_or_else(|| entry_not_found(entry_id))?;
    let replacement: Entry = request
        .into_entry(&existing.responsible_user_id)
        .map_err(translate_domain_error)?;
    AuthorizationService::authorize_update_entry(actor, &existing, &replacement)?;

    let state: State = State::new(store.directory()?, Some(existing));
    let result: TransitionResult = apply(
        &state,
        Command::UpdateEntry {
            entry_id,
            entry: replacement,
        },
        actor.to_audit_actor(),
        cause,
    )
    .map_err(translate_core_error)?;
    let persisted: PersistTransitionResult = store.persist_transition(&result)?;
    let stored: Entry = reload_entry(store, entry_id)?;

    info!(entry_id, actor = %actor.id, "Entry updated");

    Ok(EntryMutationResponse {
        entry: EntryInfo::from(&stored),
        event_id: persisted.event_id,
        message: format!("Updated entry {entry_id}"),
    })
}

/// Permanently deletes an entry.
///
/// # Errors
///
/// Returns an error if the actor is not a Master or the entry does not exist.
pub fn delete_entry<S: EntryStore + TeamDirectory>(
    store: &mut S,
    entry_id: i64,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<DeleteEntryResponse, ApiError> {
    AuthorizationService::authorize_delete_entry(actor)?;

    let existing: Entry = store
        .get_entry(entry_id)?
        .ok_or_else(|| entry_not_found(entry_id))?;

    let state: State = State::new(store.directory()?, Some(existing));
    let result: TransitionResult = apply(
        &state,
        Command::DeleteEntry { entry_id },
        actor.to_audit_actor(),
        cause,
    )
    .map_err(translate_core_error)?;
    let persisted: PersistTransitionResult = store.persist_transition(&result)?;

    info!(entry_id, actor = %actor.id, "Entry deleted");

    Ok(DeleteEntryResponse {
        entry_id,
        event_id: persisted.event_id,
        message: format!("Deleted entry {entry_id}"),
    })
}

// ============================================================================
// Reports
// ============================================================================

/// Computes premium figures for the actor's view of a period.
///
/// The summary covers the whole working set. Staff rows are recomputed per
/// member: every directory member for an unrestricted view, otherwise only
/// the selected member.
///
/// # Arguments
///
/// * `store` - The entry store and team directory
/// * `query` - The period and user selection
/// * `today` - The current date in the firm's time zone
/// * `rules` - The premium rules
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns an error if the period is invalid or the store cannot be read.
pub fn premium_report<S: EntryStore + TeamDirectory>(
    store: &mut S,
    query: &ReportQuery,
    today: Date,
    rules: &PremiumRules,
    actor: &AuthenticatedActor,
) -> Result<PremiumReportResponse, ApiError> {
    let period: PeriodFilter = resolve_period(query, today)?;
    let user_filter: UserFilter =
        resolve_user_filter(&actor.to_viewer(), requested_user_filter(query));

    let working_set: Vec<Entry> = load_working_set(store, &period, &user_filter)?;
    let mut directory: Vec<StaffMember> = store.directory()?;
    directory.retain(|member| user_filter.matches(&member.staff_id));

    let summary: PremiumSummary = compute_premium_summary(&working_set, rules);
    let staff: Vec<StaffPremiumSummary> = compute_staff_breakdown(&working_set, &directory, rules);

    debug!(
        entries = working_set.len(),
        total_premium = %summary.total_premium,
        user_filter = %user_filter,
        "Computed premium report"
    );

    Ok(PremiumReportResponse {
        period_start: period.start().to_string(),
        period_end: period.end().to_string(),
        user_filter: user_filter.to_string(),
        summary,
        staff,
    })
}

/// Renders the per-staff rows of a premium report as CSV.
///
/// # Errors
///
/// Returns an error if the report cannot be computed or rendered.
pub fn export_premium_csv<S: EntryStore + TeamDirectory>(
    store: &mut S,
    query: &ReportQuery,
    today: Date,
    rules: &PremiumRules,
    actor: &AuthenticatedActor,
) -> Result<String, ApiError> {
    let report: PremiumReportResponse = premium_report(store, query, today, rules, actor)?;
    render_staff_csv(&report.staff).map_err(|e| ApiError::Internal {
        message: format!("Failed to render CSV: {e}"),
    })
}

// ============================================================================
// Audit
// ============================================================================

/// Lists audit events, oldest first, optionally for one entry.
///
/// # Errors
///
/// Returns an error if the actor is not a Master or the log cannot be read.
pub fn audit_timeline<S: AuditLog>(
    store: &mut S,
    entry_id: Option<i64>,
    actor: &AuthenticatedActor,
) -> Result<AuditTimelineResponse, ApiError> {
    AuthorizationService::authorize_view_audit(actor)?;

    let events: Vec<AuditEventInfo> = store
        .timeline(entry_id)?
        .into_iter()
        .map(AuditEventInfo::from)
        .collect();

    Ok(AuditTimelineResponse { events })
}
