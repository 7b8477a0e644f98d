// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Period filters used to bucket entries by date.
//!
//! A period is an inclusive `[start, end]` date range. Periods are built
//! from a mode relative to "today" or by explicit month navigation.
//! "Today" is always resolved in the firm's time zone, never the server's.

use crate::error::DomainError;
use chrono::{Datelike, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration, Month};

/// The relative period modes offered to viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    /// Only today.
    Today,
    /// Sunday through Saturday of the current week.
    ThisWeek,
    /// The whole current calendar month.
    #[default]
    ThisMonth,
}

impl PeriodMode {
    /// Parses a period mode from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not `today`, `this_week` or `this_month`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "this_week" | "week" => Ok(Self::ThisWeek),
            "this_month" | "month" => Ok(Self::ThisMonth),
            _ => Err(DomainError::InvalidPeriodMode(s.to_string())),
        }
    }

    /// Converts this mode to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
        }
    }
}

impl FromStr for PeriodMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An inclusive date range entries are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodFilter {
    start: Date,
    end: Date,
}

impl PeriodFilter {
    /// Creates a period covering `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPeriod` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the period for a relative mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - The relative mode
    /// * `today` - The current date in the firm's time zone
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn for_mode(mode: PeriodMode, today: Date) -> Result<Self, DomainError> {
        match mode {
            PeriodMode::Today => Self::new(today, today),
            PeriodMode::ThisWeek => {
                let days_since_sunday: i64 = i64::from(today.weekday().number_days_from_sunday());
                let start: Date = today
                    .checked_sub(Duration::days(days_since_sunday))
                    .ok_or_else(|| DomainError::DateArithmeticOverflow {
                        operation: format!("finding the start of the week containing {today}"),
                    })?;
                let end: Date = start.checked_add(Duration::days(6)).ok_or_else(|| {
                    DomainError::DateArithmeticOverflow {
                        operation: format!("finding the end of the week starting {start}"),
                    }
                })?;
                Self::new(start, end)
            }
            PeriodMode::ThisMonth => Self::month(today.year(), today.month()),
        }
    }

    /// Creates the period covering a whole calendar month.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported date range.
    pub fn month(year: i32, month: Month) -> Result<Self, DomainError> {
        let start: Date = Date::from_calendar_date(year, month, 1).map_err(|e| {
            DomainError::DateArithmeticOverflow {
                operation: format!("building the first day of {month} {year}: {e}"),
            }
        })?;

        let (next_year, next_month): (i32, Month) = if month == Month::December {
            (year + 1, Month::January)
        } else {
            (year, month.next())
        };

        let end: Date = Date::from_calendar_date(next_year, next_month, 1)
            .ok()
            .and_then(Date::previous_day)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("finding the last day of {month} {year}"),
            })?;

        Self::new(start, end)
    }

    /// Creates the period for a month given as a number (1-12).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if the number is out of range.
    pub fn month_number(year: i32, month: u8) -> Result<Self, DomainError> {
        let month: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))?;
        Self::month(year, month)
    }

    /// Returns the month before the one containing this period's start.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn previous_month(&self) -> Result<Self, DomainError> {
        let month: Month = self.start.month();
        if month == Month::January {
            Self::month(self.start.year() - 1, Month::December)
        } else {
            Self::month(self.start.year(), month.previous())
        }
    }

    /// Returns the month after the one containing this period's start.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn next_month(&self) -> Result<Self, DomainError> {
        let month: Month = self.start.month();
        if month == Month::December {
            Self::month(self.start.year() + 1, Month::January)
        } else {
            Self::month(self.start.year(), month.next())
        }
    }

    /// Returns the first day of the period.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the period (inclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns whether `date` falls inside the period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parses an IANA time zone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeZone` if the name is unknown.
pub fn parse_time_zone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimeZone(name.to_string()))
}

/// Resolves the calendar date of an instant in the given time zone.
///
/// # Arguments
///
/// * `now` - The current instant
/// * `zone` - The firm's time zone
///
/// # Errors
///
/// Returns an error if the local date cannot be represented.
pub fn today_in_zone(now: chrono::DateTime<Utc>, zone: Tz) -> Result<Date, DomainError> {
    let local: chrono::NaiveDate = zone.from_utc_datetime(&now.naive_utc()).date_naive();

    let month: Month = u8::try_from(local.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("converting month of {local}"),
        })?;
    let day: u8 = u8::try_from(local.day()).map_err(|e| DomainError::DateArithmeticOverflow {
        operation: format!("converting day of {local}: {e}"),
    })?;

    Date::from_calendar_date(local.year(), month, day).map_err(|e| {
        DomainError::DateArithmeticOverflow {
            operation: format!("converting {local}: {e}"),
        }
    })
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(date_string: &str) -> Result<Date, DomainError> {
    let format: &[time::format_description::BorrowedFormatItem<'_>] =
        time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(date_string.trim(), format).map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}
