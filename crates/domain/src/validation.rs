// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Entry, EntryDetails, StaffId, StaffMember};
use rust_decimal::Decimal;

/// Validates that an entry's field constraints are met before it is saved.
///
/// The premium calculators never call this; they default missing or
/// out-of-range values instead. This is the write-path gate only.
///
/// # Arguments
///
/// * `entry` - The entry to validate
///
/// # Returns
///
/// * `Ok(())` if the entry's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The client name is empty
/// - The responsible staff id is empty
/// - A present `brand_quantity`, `pub_quantity` or `installments_paid` is
///   zero or above `MAX_QUANTITY`
/// - The total resolved value is negative
pub fn validate_entry_fields(entry: &Entry) -> Result<(), DomainError> {
    // Rule: client name must not be empty
    if entry.client_name.trim().is_empty() {
        return Err(DomainError::InvalidClientName(String::from(
            "Client name cannot be empty",
        )));
    }

    if entry.responsible_user_id.value().is_empty() {
        return Err(DomainError::InvalidStaffId(String::from(
            "Responsible staff id cannot be empty",
        )));
    }

    match &entry.details {
        EntryDetails::TrademarkRegistration { brand_quantity, .. } => {
            validate_positive("brand_quantity", *brand_quantity)?;
        }
        EntryDetails::Publication { pub_quantity, .. } => {
            validate_positive("pub_quantity", *pub_quantity)?;
        }
        EntryDetails::DebtCollection {
            installments_paid,
            total_resolved_value,
        } => {
            validate_positive("installments_paid", *installments_paid)?;
            if let Some(value) = total_resolved_value
                && *value < Decimal::ZERO
            {
                return Err(DomainError::NegativeResolvedValue(*value));
            }
        }
    }

    Ok(())
}

/// Largest quantity the entry store can hold.
pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Rejects a present quantity outside `1..=MAX_QUANTITY`. Absent quantities
/// are allowed.
fn validate_positive(field: &'static str, value: Option<u32>) -> Result<(), DomainError> {
    match value {
        Some(value) if value == 0 || value > MAX_QUANTITY => {
            Err(DomainError::InvalidQuantity { field, value })
        }
        _ => Ok(()),
    }
}

/// Validates the fields of a new team directory member.
///
/// # Arguments
///
/// * `staff_id` - The proposed identifier
/// * `display_name` - The proposed display name
///
/// # Errors
///
/// Returns an error if either value is empty after trimming.
pub fn validate_staff_fields(staff_id: &StaffId, display_name: &str) -> Result<(), DomainError> {
    if staff_id.value().is_empty() {
        return Err(DomainError::InvalidStaffId(String::from(
            "Staff id cannot be empty",
        )));
    }

    if display_name.trim().is_empty() {
        return Err(DomainError::InvalidDisplayName(String::from(
            "Display name cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that the staff member credited for an entry is in the directory.
///
/// # Arguments
///
/// * `staff_id` - The responsible staff member
/// * `directory` - The current team directory
///
/// # Errors
///
/// Returns `DomainError::StaffNotFound` if no directory member has the id.
pub fn validate_responsible_exists(
    staff_id: &StaffId,
    directory: &[StaffMember],
) -> Result<(), DomainError> {
    if directory.iter().any(|member| &member.staff_id == staff_id) {
        Ok(())
    } else {
        Err(DomainError::StaffNotFound(staff_id.value().to_string()))
    }
}
