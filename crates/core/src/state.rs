// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_schedule_domain::{ViewMode, WeekStart};
use serde::{Deserialize, Serialize};
use time::Date;

/// Scheduler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// The weekday that opens each calendar row.
    pub week_start: WeekStart,
}

/// Which week or month the calendar shows.
///
/// Only navigation changes this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarViewState {
    /// Week or month.
    pub view_mode: ViewMode,
    /// Any day inside the shown period.
    pub reference_date: Date,
}

impl CalendarViewState {
    /// Creates a new view state.
    #[must_use]
    pub const fn new(view_mode: ViewMode, reference_date: Date) -> Self {
        Self {
            view_mode,
            reference_date,
        }
    }
}

/// Where the scheduler is in its submission workflow.
///
/// Submission is a single atomic append, so the scheduler is back to
/// `Idle` by the time any call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerPhase {
    #[default]
    Idle,
    SubmittingAssignment,
}
