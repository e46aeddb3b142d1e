// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::CalendarViewState;
use fleet_schedule_domain::{ViewMode, WeekStart, start_of_week};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

/// Short day format used in week labels, e.g. "Mar 10".
const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none]");

/// Formats the heading shown above the calendar.
///
/// Month views read "March 2024". Week views read "Mar 10 – Mar 16", using
/// the same start-of-week rule as the grid so the label always names the
/// first and last visible day.
///
/// # Errors
///
/// Returns an error if the week extends past the representable calendar
/// range or the date cannot be formatted.
pub fn header_label(view: CalendarViewState, week_start: WeekStart) -> Result<String, CoreError> {
    match view.view_mode {
        ViewMode::Month => Ok(format!(
            "{} {}",
            view.reference_date.month(),
            view.reference_date.year()
        )),
        ViewMode::Week => {
            let start: Date = start_of_week(view.reference_date, week_start)?;
            let end: Date = start.checked_add(Duration::days(6)).ok_or_else(|| {
                CoreError::LabelFormat(format!("week starting {start} runs past the calendar"))
            })?;
            Ok(format!("{} – {}", short_date(start)?, short_date(end)?))
        }
    }
}

fn short_date(date: Date) -> Result<String, CoreError> {
    date.format(SHORT_DATE)
        .map_err(|e| CoreError::LabelFormat(e.to_string()))
}
