// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Navigation;
use crate::state::CalendarViewState;
use fleet_schedule_domain::{DomainError, ViewMode, add_months};
use time::{Date, Duration};

/// Applies a navigation request to a view state, producing the new state.
///
/// # Arguments
///
/// * `view` - The current view state (unchanged)
/// * `navigation` - The requested move
/// * `today` - The current date, used by `Navigation::Today`
///
/// # Returns
///
/// The view state after the move. Month steps clamp the day of month
/// (March 31 back one month is February 29 in a leap year); week steps move
/// exactly seven days.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the move would leave the
/// representable calendar range.
pub fn navigate(
    view: CalendarViewState,
    navigation: Navigation,
    today: Date,
) -> Result<CalendarViewState, DomainError> {
    let reference_date: Date = match navigation {
        Navigation::Previous => step(view, -1)?,
        Navigation::Next => step(view, 1)?,
        Navigation::Today => today,
        Navigation::SetViewMode(view_mode) => {
            return Ok(CalendarViewState::new(view_mode, view.reference_date));
        }
    };

    Ok(CalendarViewState::new(view.view_mode, reference_date))
}

/// Moves the reference date by `direction` periods of the current view mode.
fn step(view: CalendarViewState, direction: i32) -> Result<Date, DomainError> {
    match view.view_mode {
        ViewMode::Month => add_months(view.reference_date, direction),
        ViewMode::Week => view
            .reference_date
            .checked_add(Duration::weeks(i64::from(direction)))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!(
                    "moving {direction} weeks from {}",
                    view.reference_date
                ),
            }),
    }
}
