// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar_grid;
mod conflict;
mod error;
mod period;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar_grid::{GridDay, MONTH_GRID_DAYS, ViewMode, WEEK_GRID_DAYS, build_grid};
pub use conflict::{CalendarDay, ConflictSummary, active_assignments, annotate, conflict_dates};
pub use period::{WeekStart, add_months, days_in_month, first_of_month, start_of_week};
pub use status::{AssignmentStatus, derive_status};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Assignment, AssignmentId, DateRange, Driver, DriverId, ShiftType, Vehicle, VehicleCategory,
    VehicleId,
};
pub use validation::{parse_iso_date, validate_identifier};
