// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use premia::CoreError;
use premia_domain::{DomainError, MAX_QUANTITY};
use premia_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::EntryNotFound(entry_id) => Self::ResourceNotFound {
                resource_type: String::from("Entry"),
                message: format!("Entry {entry_id} does not exist"),
            },
            PersistenceError::StaffNotFound(staff_id) => Self::ResourceNotFound {
                resource_type: String::from("Staff member"),
                message: format!("Staff member '{staff_id}' does not exist"),
            },
            PersistenceError::EventNotFound(event_id) => Self::ResourceNotFound {
                resource_type: String::from("Audit event"),
                message: format!("Audit event {event_id} does not exist"),
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidClientName(msg) => ApiError::InvalidInput {
            field: String::from("client_name"),
            message: msg,
        },
        DomainError::InvalidQuantity { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Quantity must be between 1 and {MAX_QUANTITY}, got {value}"),
        },
        DomainError::NegativeResolvedValue(value) => ApiError::InvalidInput {
            field: String::from("total_resolved_value"),
            message: format!("Resolved value cannot be negative, got {value}"),
        },
        DomainError::InvalidPaymentType(value) => ApiError::InvalidInput {
            field: String::from("payment_type"),
            message: format!("Unknown payment type '{value}'"),
        },
        DomainError::InvalidEntryType(value) => ApiError::InvalidInput {
            field: String::from("entry_type"),
            message: format!("Unknown entry type '{value}'"),
        },
        DomainError::MissingField { entry_type, field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{field}' is required for {entry_type} entries"),
        },
        DomainError::InvalidStaffId(msg) => ApiError::InvalidInput {
            field: String::from("staff_id"),
            message: msg,
        },
        DomainError::InvalidDisplayName(msg) => ApiError::InvalidInput {
            field: String::from("display_name"),
            message: msg,
        },
        DomainError::StaffNotFound(staff_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Staff member"),
            message: format!("Staff member '{staff_id}' does not exist"),
        },
        DomainError::DuplicateStaffId(staff_id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_staff_id"),
            message: format!("Staff member '{staff_id}' already exists"),
        },
        DomainError::InvalidPeriodMode(value) => ApiError::InvalidInput {
            field: String::from("period"),
            message: format!(
                "Unknown period '{value}'. Expected today, this_week or this_month"
            ),
        },
        DomainError::InvalidPeriod { start, end } => ApiError::InvalidInput {
            field: String::from("period"),
            message: format!("Period start {start} is after period end {end}"),
        },
        DomainError::InvalidMonth(month) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month: {month}. Must be between 1 and 12"),
        },
        DomainError::InvalidRules(msg) => ApiError::Internal {
            message: format!("Invalid premium rules: {msg}"),
        },
        DomainError::InvalidTimeZone(zone) => ApiError::Internal {
            message: format!("Invalid time zone '{zone}'"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("entry_date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::EntryNotFound(entry_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Entry"),
            message: format!("Entry {entry_id} does not exist"),
        },
    }
}
