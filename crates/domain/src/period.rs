// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar period arithmetic shared by grid construction and navigation.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration, Month, Weekday};

/// The weekday that opens each calendar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Returns the first weekday of a row.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sunday,
            Self::Monday => Weekday::Monday,
        }
    }

    /// Returns the column index (0-6) of `weekday` in a row.
    #[must_use]
    pub const fn column_of(self, weekday: Weekday) -> u8 {
        match self {
            Self::Sunday => weekday.number_days_from_sunday(),
            Self::Monday => weekday.number_days_from_monday(),
        }
    }

    /// Converts this week start to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }
}

impl FromStr for WeekStart {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            _ => Err(DomainError::InvalidWeekStart(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the number of days in `month` of `year`.
#[must_use]
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Returns the first day of the month containing `date`.
///
/// # Errors
///
/// Day replacement is fallible in the date library; day 1 never fails.
pub fn first_of_month(date: Date) -> Result<Date, DomainError> {
    date.replace_day(1)
        .map_err(|e| DomainError::DateArithmeticOverflow {
            operation: format!("finding first day of month for {date}: {e}"),
        })
}

/// Returns the first day of the week containing `date`.
///
/// # Errors
///
/// Returns an error if the week begins before the earliest representable date.
pub fn start_of_week(date: Date, week_start: WeekStart) -> Result<Date, DomainError> {
    let offset: u8 = week_start.column_of(date.weekday());
    date.checked_sub(Duration::days(i64::from(offset)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("finding start of week for {date}"),
        })
}

/// Moves `date` by `delta` calendar months.
///
/// The day of month is clamped to the length of the target month, so
/// January 31 plus one month is the last day of February.
///
/// # Errors
///
/// Returns an error if the target year is outside the representable range.
pub fn add_months(date: Date, delta: i32) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("adding {delta} months to {date}"),
    };

    // Month numbers are 1-based; work on a 0-based month count.
    let month_index: i32 = i32::from(u8::from(date.month())) - 1;
    let total: i32 = date
        .year()
        .checked_mul(12)
        .and_then(|m| m.checked_add(month_index))
        .and_then(|m| m.checked_add(delta))
        .ok_or_else(overflow)?;

    let year: i32 = total.div_euclid(12);
    let month_number: u8 = u8::try_from(total.rem_euclid(12) + 1).map_err(|_| overflow())?;
    let month: Month = Month::try_from(month_number).map_err(|_| overflow())?;
    let day: u8 = date.day().min(days_in_month(year, month));

    Date::from_calendar_date(year, month, day).map_err(|_| overflow())
}
