// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings and money as decimal strings.

use premia_audit::AuditEvent;
use premia_domain::{
    DomainError, Entry, EntryDetails, EntryType, PaymentType, PremiumSummary, StaffId,
    StaffPremiumSummary, parse_date,
};
use premia_persistence::StaffData;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// API request to add a member to the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStaffRequest {
    /// The new member's identifier.
    pub staff_id: String,
    /// The new member's display name.
    pub display_name: String,
    /// Whether the new member is a master.
    #[serde(default)]
    pub is_master: bool,
}

/// API request to disable or re-enable a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStaffDisabledRequest {
    /// The new disabled flag.
    pub disabled: bool,
}

/// A team directory member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffInfo {
    /// The member's identifier.
    pub staff_id: String,
    /// The member's display name.
    pub display_name: String,
    /// Whether the member is a master.
    pub is_master: bool,
    /// Whether the member's access is disabled.
    pub is_disabled: bool,
    /// When the member was added.
    pub created_at: String,
}

impl From<StaffData> for StaffInfo {
    fn from(data: StaffData) -> Self {
        Self {
            staff_id: data.staff_id,
            display_name: data.display_name,
            is_master: data.is_master,
            is_disabled: data.is_disabled,
            created_at: data.created_at,
        }
    }
}

/// API response for a successful staff change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMutationResponse {
    /// The affected member's identifier.
    pub staff_id: String,
    /// The ID of the recorded audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API response listing the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStaffResponse {
    /// The members, ordered by display name.
    pub staff: Vec<StaffInfo>,
}

/// API request describing a full entry.
///
/// Used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRequest {
    /// `trademark_registration`, `publication` or `debt_collection`.
    pub entry_type: String,
    /// The client name.
    pub client_name: String,
    /// The brand involved.
    #[serde(default)]
    pub brand_name: Option<String>,
    /// The credited staff member. Defaults to the requesting actor.
    #[serde(default)]
    pub responsible_user_id: Option<String>,
    /// The entry date (`YYYY-MM-DD`).
    pub entry_date: String,
    /// Free-text notes.
    #[serde(default)]
    pub observations: Option<String>,
    /// Trademark units (registrations).
    #[serde(default)]
    pub brand_quantity: Option<u32>,
    /// Payment type (registrations).
    #[serde(default)]
    pub payment_type: Option<String>,
    /// Classification tag (publications).
    #[serde(default)]
    pub publication_type: Option<String>,
    /// Publication units (publications).
    #[serde(default)]
    pub pub_quantity: Option<u32>,
    /// Payment form (publications).
    #[serde(default)]
    pub payment_form: Option<String>,
    /// Installments paid (debt collections).
    #[serde(default)]
    pub installments_paid: Option<u32>,
    /// Total recovered (debt collections).
    #[serde(default)]
    pub total_resolved_value: Option<Decimal>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required_payment(
    value: Option<&str>,
    entry_type: EntryType,
    field: &'static str,
) -> Result<PaymentType, DomainError> {
    let value: &str = value.ok_or(DomainError::MissingField {
        entry_type: entry_type.as_str(),
        field,
    })?;
    PaymentType::parse(value)
}

impl EntryRequest {
    /// Converts this request into a domain entry.
    ///
    /// Fields belonging to other categories are ignored.
    ///
    /// # Arguments
    ///
    /// * `default_responsible` - Credited when the request names nobody
    ///
    /// # Errors
    ///
    /// Returns an error if the entry type, date or payment type cannot be
    /// parsed, or a required payment field is missing.
    pub fn into_entry(self, default_responsible: &StaffId) -> Result<Entry, DomainError> {
        let entry_type: EntryType = EntryType::parse(&self.entry_type)?;
        let entry_date: Date = parse_date(&self.entry_date)?;

        let details: EntryDetails = match entry_type {
            EntryType::TrademarkRegistration => EntryDetails::TrademarkRegistration {
                brand_quantity: self.brand_quantity,
                payment_type: required_payment(
                    self.payment_type.as_deref(),
                    entry_type,
                    "payment_type",
                )?,
            },
            EntryType::Publication => EntryDetails::Publication {
                publication_type: non_blank(self.publication_type),
                pub_quantity: self.pub_quantity,
                payment_form: required_payment(
                    self.payment_form.as_deref(),
                    entry_type,
                    "payment_form",
                )?,
            },
            EntryType::DebtCollection => EntryDetails::DebtCollection {
                installments_paid: self.installments_paid,
                total_resolved_value: self.total_resolved_value,
            },
        };

        let responsible: StaffId = self
            .responsible_user_id
            .as_deref()
            .map_or_else(|| default_responsible.clone(), StaffId::new);

        Ok(Entry::new(self.client_name, responsible, entry_date, details)
            .with_brand_name(non_blank(self.brand_name))
            .with_observations(non_blank(self.observations)))
    }
}

/// An entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInfo {
    /// The entry's identifier.
    pub entry_id: Option<i64>,
    /// The entry type tag.
    pub entry_type: String,
    /// The client name.
    pub client_name: String,
    /// The brand involved.
    pub brand_name: Option<String>,
    /// The credited staff member.
    pub responsible_user_id: String,
    /// The entry date (`YYYY-MM-DD`).
    pub entry_date: String,
    /// Free-text notes.
    pub observations: Option<String>,
    /// Trademark units.
    pub brand_quantity: Option<u32>,
    /// Registration payment type.
    pub payment_type: Option<String>,
    /// Publication classification tag.
    pub publication_type: Option<String>,
    /// Publication units.
    pub pub_quantity: Option<u32>,
    /// Publication payment form.
    pub payment_form: Option<String>,
    /// Installments paid.
    pub installments_paid: Option<u32>,
    /// Total recovered.
    pub total_resolved_value: Option<Decimal>,
}

impl From<&Entry> for EntryInfo {
    fn from(entry: &Entry) -> Self {
        let mut info: Self = Self {
            entry_id: entry.entry_id,
            entry_type: entry.entry_type().to_string(),
            client_name: entry.client_name.clone(),
            brand_name: entry.brand_name.clone(),
            responsible_user_id: entry.responsible_user_id.to_string(),
            entry_date: entry.entry_date.to_string(),
            observations: entry.observations.clone(),
            brand_quantity: None,
            payment_type: None,
            publication_type: None,
            pub_quantity: None,
            payment_form: None,
            installments_paid: None,
            total_resolved_value: None,
        };

        match &entry.details {
            EntryDetails::TrademarkRegistration {
                brand_quantity,
                payment_type,
            } => {
                info.brand_quantity = *brand_quantity;
                info.payment_type = Some(payment_type.to_string());
            }
            EntryDetails::Publication {
                publication_type,
                pub_quantity,
                payment_form,
            } => {
                info.publication_type.clone_from(publication_type);
                info.pub_quantity = *pub_quantity;
                info.payment_form = Some(payment_form.to_string());
            }
            EntryDetails::DebtCollection {
                installments_paid,
                total_resolved_value,
            } => {
                info.installments_paid = *installments_paid;
                info.total_resolved_value = *total_resolved_value;
            }
        }

        info
    }
}

/// API response for a successful entry creation or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMutationResponse {
    /// The stored entry.
    pub entry: EntryInfo,
    /// The ID of the recorded audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful entry deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEntryResponse {
    /// The deleted entry's identifier.
    pub entry_id: i64,
    /// The ID of the recorded audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// Query parameters selecting a period and a user filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// `today`, `this_week` or `this_month` (default).
    #[serde(default)]
    pub period: Option<String>,
    /// Explicit month navigation: the year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Explicit month navigation: the month (1-12).
    #[serde(default)]
    pub month: Option<u8>,
    /// A staff ID, or `all`.
    #[serde(default)]
    pub user: Option<String>,
}

/// API response listing the working set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntriesResponse {
    /// First day of the evaluated period.
    pub period_start: String,
    /// Last day of the evaluated period.
    pub period_end: String,
    /// The user filter actually applied.
    pub user_filter: String,
    /// The entries, ordered by date then ID.
    pub entries: Vec<EntryInfo>,
}

/// API response carrying premium figures for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumReportResponse {
    /// First day of the evaluated period.
    pub period_start: String,
    /// Last day of the evaluated period.
    pub period_end: String,
    /// The user filter actually applied.
    pub user_filter: String,
    /// Figures for the whole working set.
    pub summary: PremiumSummary,
    /// One row per staff member (only the viewer's own row for staff).
    pub staff: Vec<StaffPremiumSummary>,
}

/// An audit event as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    /// The event's identifier.
    pub event_id: Option<i64>,
    /// The affected entry, for entry events.
    pub entry_id: Option<i64>,
    /// Who performed the action.
    pub actor_id: String,
    /// The actor's role at the time.
    pub actor_type: String,
    /// The request that caused the action.
    pub cause_id: String,
    /// The action name.
    pub action: String,
    /// Human-readable details.
    pub details: Option<String>,
    /// State before the action.
    pub before: String,
    /// State after the action.
    pub after: String,
}

impl From<AuditEvent> for AuditEventInfo {
    fn from(event: AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            entry_id: event.entry_id,
            actor_id: event.actor.id,
            actor_type: event.actor.actor_type,
            cause_id: event.cause.id,
            action: event.action.name,
            details: event.action.details,
            before: event.before.data,
            after: event.after.data,
        }
    }
}

/// API response listing audit events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTimelineResponse {
    /// Events, oldest first.
    pub events: Vec<AuditEventInfo>,
}
