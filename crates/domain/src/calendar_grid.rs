// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar grid construction.
//!
//! Produces the ordered days shown by a week or month calendar view.
//!
//! ## Invariants
//!
//! - Month grids always contain [`MONTH_GRID_DAYS`] days (6 rows of 7)
//! - Week grids always contain [`WEEK_GRID_DAYS`] days
//! - Dates are strictly ascending with no gaps or duplicates
//! - Month grids open with padding days from the previous month and close
//!   with padding days from the next month; only days of the viewed month
//!   are marked as focused
//! - Every day of a week grid is focused

use crate::error::DomainError;
use crate::period::{WeekStart, days_in_month, first_of_month, start_of_week};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Number of days in a month grid.
pub const MONTH_GRID_DAYS: usize = 42;

/// Number of days in a week grid.
pub const WEEK_GRID_DAYS: usize = 7;

/// The span of time a calendar view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Week,
    #[default]
    Month,
}

impl ViewMode {
    /// Converts this view mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl FromStr for ViewMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(DomainError::InvalidViewMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw grid cell before assignment data is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDay {
    /// The calendar day.
    pub date: Date,
    /// Whether the day belongs to the period being viewed rather than padding.
    pub is_in_focused_period: bool,
}

/// Builds the grid of days for the period containing `reference_date`.
///
/// # Arguments
///
/// * `reference_date` - Any day inside the period to show
/// * `view_mode` - Week or month
/// * `week_start` - The weekday that opens each row
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` only if the grid would
/// extend past the representable calendar range.
///
/// # Example
///
/// ```text
/// reference_date = 2024-03-15, Month, Sunday start
///
/// March 1 2024 is a Friday (column 5):
///   Feb 25 .. Feb 29   padding (5 days)
///   Mar 1  .. Mar 31   focused (31 days)
///   Apr 1  .. Apr 6    padding (6 days)
/// ```
pub fn build_grid(
    reference_date: Date,
    view_mode: ViewMode,
    week_start: WeekStart,
) -> Result<Vec<GridDay>, DomainError> {
    match view_mode {
        ViewMode::Month => build_month_grid(reference_date, week_start),
        ViewMode::Week => build_week_grid(reference_date, week_start),
    }
}

fn build_month_grid(
    reference_date: Date,
    week_start: WeekStart,
) -> Result<Vec<GridDay>, DomainError> {
    let first: Date = first_of_month(reference_date)?;
    let leading: usize = usize::from(week_start.column_of(first.weekday()));
    let month_len: usize = usize::from(days_in_month(first.year(), first.month()));

    // Never negative, even if a month could overflow the grid
    let trailing: usize = MONTH_GRID_DAYS.saturating_sub(leading + month_len);

    let grid_start: Date = start_of_week(first, week_start)?;
    let dates: Vec<Date> = consecutive_days(grid_start, leading + month_len + trailing)?;

    Ok(dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| GridDay {
            date,
            is_in_focused_period: (leading..leading + month_len).contains(&index),
        })
        .collect())
}

fn build_week_grid(
    reference_date: Date,
    week_start: WeekStart,
) -> Result<Vec<GridDay>, DomainError> {
    let start: Date = start_of_week(reference_date, week_start)?;
    let dates: Vec<Date> = consecutive_days(start, WEEK_GRID_DAYS)?;

    Ok(dates
        .into_iter()
        .map(|date| GridDay {
            date,
            is_in_focused_period: true,
        })
        .collect())
}

/// Returns `count` consecutive days beginning at `start`.
fn consecutive_days(start: Date, count: usize) -> Result<Vec<Date>, DomainError> {
    let days: Vec<Date> = std::iter::successors(Some(start), |d| d.next_day())
        .take(count)
        .collect();

    if days.len() != count {
        return Err(DomainError::DateArithmeticOverflow {
            operation: format!("building {count} grid days from {start}"),
        });
    }

    Ok(days)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_consecutive_days_exact_count() {
        let days: Vec<Date> = consecutive_days(date!(2024 - 02 - 27), 4).unwrap();
        assert_eq!(
            days,
            vec![
                date!(2024 - 02 - 27),
                date!(2024 - 02 - 28),
                date!(2024 - 02 - 29),
                date!(2024 - 03 - 01),
            ]
        );
    }

    #[test]
    fn test_consecutive_days_past_calendar_end() {
        let result = consecutive_days(Date::MAX, 2);
        assert!(matches!(
            result,
            Err(DomainError::DateArithmeticOverflow { .. })
        ));
    }
}
