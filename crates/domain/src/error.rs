// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::MAX_QUANTITY;
use rust_decimal::Decimal;
use time::Date;

/// Errors that can occur during domain validation.
///
/// The premium calculators never return these. They are raised on the
/// write path (entry validation), when building period filters, and when
/// loading premium rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Client name is empty or invalid.
    InvalidClientName(String),
    /// A quantity field is present but not positive.
    InvalidQuantity {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// The total resolved value of a debt collection is negative.
    NegativeResolvedValue(Decimal),
    /// Payment type is not one of `cash`, `installment`, `promotional`.
    InvalidPaymentType(String),
    /// Entry type tag is not recognized.
    InvalidEntryType(String),
    /// A category-specific field is missing.
    MissingField {
        /// The entry type being built.
        entry_type: &'static str,
        /// The missing field.
        field: &'static str,
    },
    /// Staff identifier is empty or invalid.
    InvalidStaffId(String),
    /// Staff display name is empty or invalid.
    InvalidDisplayName(String),
    /// The staff member does not exist in the team directory.
    StaffNotFound(String),
    /// A staff member with this id already exists.
    DuplicateStaffId(String),
    /// Period mode is not recognized.
    InvalidPeriodMode(String),
    /// Period start falls after period end.
    InvalidPeriod {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// Month number outside 1-12.
    InvalidMonth(u8),
    /// Premium rules failed validation.
    InvalidRules(String),
    /// Time zone name is not a known IANA zone.
    InvalidTimeZone(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClientName(msg) => write!(f, "Invalid client name: {msg}"),
            Self::InvalidQuantity { field, value } => {
                write!(
                    f,
                    "Invalid {field}: {value}. Must be between 1 and {MAX_QUANTITY}"
                )
            }
            Self::NegativeResolvedValue(value) => {
                write!(f, "Total resolved value cannot be negative, got {value}")
            }
            Self::InvalidPaymentType(value) => write!(
                f,
                "Invalid payment type: '{value}'. Must be 'cash', 'installment' or 'promotional'"
            ),
            Self::InvalidEntryType(value) => write!(f, "Invalid entry type: '{value}'"),
            Self::MissingField { entry_type, field } => {
                write!(f, "Field '{field}' is required for {entry_type} entries")
            }
            Self::InvalidStaffId(msg) => write!(f, "Invalid staff id: {msg}"),
            Self::InvalidDisplayName(msg) => write!(f, "Invalid display name: {msg}"),
            Self::StaffNotFound(staff_id) => {
                write!(f, "Staff member '{staff_id}' not found")
            }
            Self::DuplicateStaffId(staff_id) => {
                write!(f, "Staff member '{staff_id}' already exists")
            }
            Self::InvalidPeriodMode(value) => write!(
                f,
                "Invalid period: '{value}'. Must be 'today', 'this_week' or 'this_month'"
            ),
            Self::InvalidPeriod { start, end } => {
                write!(f, "Period start {start} is after period end {end}")
            }
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidRules(msg) => write!(f, "Invalid premium rules: {msg}"),
            Self::InvalidTimeZone(name) => write!(f, "Unknown time zone: '{name}'"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
