// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configurable thresholds and rates for the award calculators.
//!
//! Every number the calculators use comes from a [`PremiumRules`] value.
//! `PremiumRules::default()` reproduces the firm's monthly goal table.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// A per-installment value range mapped to a collection rate.
///
/// The upper bound is always inclusive; `max = None` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBand {
    /// Lower bound of the range.
    pub min: Decimal,
    /// Whether `min` itself belongs to the band.
    #[serde(default = "default_true")]
    pub min_inclusive: bool,
    /// Inclusive upper bound, or `None` for no upper bound.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Rate paid per installment when the value falls in the band.
    pub rate: Decimal,
}

impl RateBand {
    /// Creates a band covering `[min, max]`.
    #[must_use]
    pub const fn closed(min: Decimal, max: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            min_inclusive: true,
            max: Some(max),
            rate,
        }
    }

    /// Creates a band covering every value strictly greater than `min`.
    #[must_use]
    pub const fn above(min: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            min_inclusive: false,
            max: None,
            rate,
        }
    }

    /// Returns whether `value` falls inside this band.
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        let above_min: bool = if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        };
        let below_max: bool = self.max.is_none_or(|max| value <= max);
        above_min && below_max
    }
}

/// Thresholds, rates and bonuses used by every premium calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumRules {
    /// Number of trademark units in the period priced at the base rate
    /// regardless of payment type.
    pub registration_tier_threshold: u32,
    /// Per-unit reward inside the tier, and for non-cash units above it.
    pub registration_base_rate: Decimal,
    /// Per-unit reward for cash units above the tier.
    pub registration_cash_rate: Decimal,
    /// Publication total at which the whole total is repriced.
    pub publication_cliff_threshold: u32,
    /// Per-publication reward below the cliff.
    pub publication_base_rate: Decimal,
    /// Per-publication reward once the cliff is reached.
    pub publication_cliff_rate: Decimal,
    /// Per-installment rate table for debt collections.
    pub collection_bands: Vec<RateBand>,
    /// Units per milestone for both milestone bonuses.
    pub milestone_step: u32,
    /// Bonus per publication milestone.
    pub publication_milestone_bonus: Decimal,
    /// Bonus per collection milestone.
    pub collection_milestone_bonus: Decimal,
}

impl Default for PremiumRules {
    fn default() -> Self {
        Self {
            registration_tier_threshold: 30,
            registration_base_rate: Decimal::from(50),
            registration_cash_rate: Decimal::from(100),
            publication_cliff_threshold: 50,
            publication_base_rate: Decimal::from(50),
            publication_cliff_rate: Decimal::from(100),
            // The (1500, 1518] range is not covered and pays nothing.
            collection_bands: vec![
                RateBand::closed(Decimal::from(199), Decimal::from(397), Decimal::from(10)),
                RateBand::closed(Decimal::from(398), Decimal::from(597), Decimal::from(25)),
                RateBand::closed(Decimal::from(598), Decimal::from(999), Decimal::from(50)),
                RateBand::closed(Decimal::from(1000), Decimal::from(1500), Decimal::from(75)),
                RateBand::above(Decimal::from(1518), Decimal::from(100)),
            ],
            milestone_step: 10,
            publication_milestone_bonus: Decimal::from(100),
            collection_milestone_bonus: Decimal::from(50),
        }
    }
}

impl PremiumRules {
    /// Returns the per-installment collection rate for a value.
    ///
    /// The first band containing the value wins. Values outside every
    /// band yield zero.
    #[must_use]
    pub fn collection_rate(&self, per_installment: Decimal) -> Decimal {
        self.collection_bands
            .iter()
            .find(|band| band.contains(per_installment))
            .map_or(Decimal::ZERO, |band| band.rate)
    }

    /// Validates that the rules are usable by the calculators.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRules` if:
    /// - The milestone step is zero
    /// - The registration tier or publication cliff threshold is zero
    /// - Any rate or bonus is negative
    /// - A band's upper bound is below its lower bound
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.milestone_step == 0 {
            return Err(DomainError::InvalidRules(String::from(
                "milestone_step must be greater than 0",
            )));
        }

        let thresholds: [(&str, u32); 2] = [
            (
                "registration_tier_threshold",
                self.registration_tier_threshold,
            ),
            (
                "publication_cliff_threshold",
                self.publication_cliff_threshold,
            ),
        ];
        if let Some((name, _)) = thresholds.iter().find(|(_, value)| *value == 0) {
            return Err(DomainError::InvalidRules(format!(
                "{name} must be greater than 0"
            )));
        }

        let amounts: [(&str, Decimal); 7] = [
            ("registration_base_rate", self.registration_base_rate),
            ("registration_cash_rate", self.registration_cash_rate),
            ("publication_base_rate", self.publication_base_rate),
            ("publication_cliff_rate", self.publication_cliff_rate),
            (
                "publication_milestone_bonus",
                self.publication_milestone_bonus,
            ),
            ("collection_milestone_bonus", self.collection_milestone_bonus),
            ("collection_bands.rate", self.min_band_rate()),
        ];
        if let Some((name, value)) = amounts.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(DomainError::InvalidRules(format!(
                "{name} cannot be negative, got {value}"
            )));
        }

        for band in &self.collection_bands {
            if let Some(max) = band.max
                && max < band.min
            {
                return Err(DomainError::InvalidRules(format!(
                    "collection band upper bound {max} is below lower bound {}",
                    band.min
                )));
            }
        }

        Ok(())
    }

    fn min_band_rate(&self) -> Decimal {
        self.collection_bands
            .iter()
            .map(|band| band.rate)
            .min()
            .unwrap_or(Decimal::ZERO)
    }
}
