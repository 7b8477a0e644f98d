// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Quantity assumed when a registration or publication entry omits it.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Resolves an optional quantity field to the number of units it represents.
///
/// Absent and zero quantities both count as a single unit.
#[must_use]
pub const fn effective_quantity(quantity: Option<u32>) -> u32 {
    match quantity {
        Some(value) if value > 0 => value,
        _ => DEFAULT_QUANTITY,
    }
}

/// Identifier of a staff member credited for entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId {
    value: String,
}

impl StaffId {
    /// Creates a new `StaffId`.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// How the client paid for a registration or publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Paid in full up front.
    Cash,
    /// Paid in installments.
    Installment,
    /// Promotional pricing.
    Promotional,
}

impl PaymentType {
    /// Parses a payment type from its wire representation (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not `cash`, `installment` or `promotional`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "installment" => Ok(Self::Installment),
            "promotional" => Ok(Self::Promotional),
            _ => Err(DomainError::InvalidPaymentType(s.to_string())),
        }
    }

    /// Converts this payment type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Installment => "installment",
            Self::Promotional => "promotional",
        }
    }

    /// Returns whether this is a cash payment.
    #[must_use]
    pub const fn is_cash(&self) -> bool {
        matches!(self, Self::Cash)
    }
}

impl FromStr for PaymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The award category an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// A resolved trademark registration.
    TrademarkRegistration,
    /// A publication in the trademark gazette.
    Publication,
    /// A resolved debt collection.
    DebtCollection,
}

impl EntryType {
    /// Parses an entry type from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "trademark_registration" => Ok(Self::TrademarkRegistration),
            "publication" => Ok(Self::Publication),
            "debt_collection" => Ok(Self::DebtCollection),
            _ => Err(DomainError::InvalidEntryType(s.to_string())),
        }
    }

    /// Converts this entry type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TrademarkRegistration => "trademark_registration",
            Self::Publication => "publication",
            Self::DebtCollection => "debt_collection",
        }
    }
}

impl FromStr for EntryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category-specific fields of an entry.
///
/// Exactly one block is populated, selected by the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryDetails {
    /// Trademark registration fields.
    TrademarkRegistration {
        /// Number of trademarks covered by the entry (defaults to 1).
        brand_quantity: Option<u32>,
        /// How the client paid.
        payment_type: PaymentType,
    },
    /// Publication fields.
    Publication {
        /// Free-form classification tag. Informational only.
        publication_type: Option<String>,
        /// Number of publications covered by the entry (defaults to 1).
        pub_quantity: Option<u32>,
        /// How the client paid.
        payment_form: PaymentType,
    },
    /// Debt collection fields.
    DebtCollection {
        /// Number of installments the debtor paid.
        installments_paid: Option<u32>,
        /// Total amount recovered.
        total_resolved_value: Option<Decimal>,
    },
}

impl EntryDetails {
    /// Returns the entry type tag for these details.
    #[must_use]
    pub const fn entry_type(&self) -> EntryType {
        match self {
            Self::TrademarkRegistration { .. } => EntryType::TrademarkRegistration,
            Self::Publication { .. } => EntryType::Publication,
            Self::DebtCollection { .. } => EntryType::DebtCollection,
        }
    }
}

/// One resolved, incentive-eligible business event attributed to one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the entry has not been persisted yet.
    pub entry_id: Option<i64>,
    /// The client the entry was resolved for.
    pub client_name: String,
    /// The brand involved, when relevant.
    pub brand_name: Option<String>,
    /// The staff member credited for the entry.
    pub responsible_user_id: StaffId,
    /// The calendar date the event is attributed to.
    pub entry_date: Date,
    /// Free-text notes.
    pub observations: Option<String>,
    /// Category-specific fields.
    pub details: EntryDetails,
}

impl Entry {
    /// Creates a new `Entry` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `client_name` - The client name
    /// * `responsible_user_id` - The staff member credited for the entry
    /// * `entry_date` - The date the entry is attributed to
    /// * `details` - The category-specific fields
    #[must_use]
    pub const fn new(
        client_name: String,
        responsible_user_id: StaffId,
        entry_date: Date,
        details: EntryDetails,
    ) -> Self {
        Self {
            entry_id: None,
            client_name,
            brand_name: None,
            responsible_user_id,
            entry_date,
            observations: None,
            details,
        }
    }

    /// Returns a copy of this entry carrying the given persisted ID.
    #[must_use]
    pub const fn with_id(mut self, entry_id: i64) -> Self {
        self.entry_id = Some(entry_id);
        self
    }

    /// Sets the brand name.
    #[must_use]
    pub fn with_brand_name(mut self, brand_name: Option<String>) -> Self {
        self.brand_name = brand_name;
        self
    }

    /// Sets the observations.
    #[must_use]
    pub fn with_observations(mut self, observations: Option<String>) -> Self {
        self.observations = observations;
        self
    }

    /// Returns the entry type tag.
    #[must_use]
    pub const fn entry_type(&self) -> EntryType {
        self.details.entry_type()
    }

    /// Number of trademark units this entry contributes (0 for other categories).
    #[must_use]
    pub const fn registration_units(&self) -> u32 {
        match &self.details {
            EntryDetails::TrademarkRegistration { brand_quantity, .. } => {
                effective_quantity(*brand_quantity)
            }
            _ => 0,
        }
    }

    /// Number of publication units this entry contributes (0 for other categories).
    #[must_use]
    pub const fn publication_units(&self) -> u32 {
        match &self.details {
            EntryDetails::Publication { pub_quantity, .. } => effective_quantity(*pub_quantity),
            _ => 0,
        }
    }
}

/// A member of the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// The staff identifier.
    pub staff_id: StaffId,
    /// Name shown when attributing entries.
    pub display_name: String,
    /// Whether the member holds elevated ("master") visibility rights.
    pub is_master: bool,
}

impl StaffMember {
    /// Creates a new `StaffMember`.
    ///
    /// # Arguments
    ///
    /// * `staff_id` - The staff identifier
    /// * `display_name` - The display name
    /// * `is_master` - Whether the member is elevated
    #[must_use]
    pub const fn new(staff_id: StaffId, display_name: String, is_master: bool) -> Self {
        Self {
            staff_id,
            display_name,
            is_master,
        }
    }
}
