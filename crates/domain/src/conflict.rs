// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day assignment activity and scheduling conflict detection.
//!
//! A day is conflicted when two or more of its active assignments share a
//! vehicle (double-booked vehicle) or a driver (double-booked driver).
//!
//! ## Invariants
//!
//! - Zero or one active assignment is never a conflict
//! - The result is independent of assignment order
//! - The input assignment list is never mutated
//! - Shift type plays no part; conflicts are detected per day

use crate::calendar_grid::GridDay;
use crate::types::{Assignment, DateRange, DriverId, VehicleId};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use time::Date;

/// The identifiers that make a day conflicted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictSummary {
    /// Vehicles booked by more than one active assignment, sorted.
    pub vehicles: Vec<VehicleId>,
    /// Drivers booked by more than one active assignment, sorted.
    pub drivers: Vec<DriverId>,
}

impl ConflictSummary {
    /// Classifies the double bookings among `active`.
    fn classify(active: &[Assignment]) -> Self {
        let mut vehicle_counts: BTreeMap<&VehicleId, usize> = BTreeMap::new();
        let mut driver_counts: BTreeMap<&DriverId, usize> = BTreeMap::new();

        for assignment in active {
            *vehicle_counts.entry(&assignment.vehicle_id).or_default() += 1;
            *driver_counts.entry(&assignment.driver_id).or_default() += 1;
        }

        Self {
            vehicles: vehicle_counts
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(|(id, _)| id.clone())
                .collect(),
            drivers: driver_counts
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(|(id, _)| id.clone())
                .collect(),
        }
    }

    /// Returns whether no vehicle or driver is double-booked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty() && self.drivers.is_empty()
    }
}

/// A grid day with its assignment and conflict data attached.
///
/// Calendar days hold no independent state. They are rebuilt, never
/// mutated, whenever the view or the assignment set changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The calendar day.
    pub date: Date,
    /// Whether the day belongs to the period being viewed rather than padding.
    pub is_in_focused_period: bool,
    /// Whether the day is today.
    pub is_today: bool,
    /// Assignments covering this day, in input order.
    pub active_assignments: Vec<Assignment>,
    /// Whether any vehicle or driver is double-booked on this day.
    pub has_conflict: bool,
    /// Which vehicles and drivers are double-booked.
    pub conflicts: ConflictSummary,
}

/// Returns the assignments covering `date`, in input order.
#[must_use]
pub fn active_assignments(date: Date, assignments: &[Assignment]) -> Vec<Assignment> {
    assignments
        .iter()
        .filter(|assignment| assignment.is_active_on(date))
        .cloned()
        .collect()
}

/// Attaches assignment activity and conflict status to a grid day.
///
/// # Arguments
///
/// * `day` - The raw grid day
/// * `today` - The current date, used for the `is_today` flag
/// * `assignments` - The full assignment set
#[must_use]
pub fn annotate(day: GridDay, today: Date, assignments: &[Assignment]) -> CalendarDay {
    let active: Vec<Assignment> = active_assignments(day.date, assignments);
    let has_conflict: bool = has_double_booking(&active);
    let conflicts: ConflictSummary = if has_conflict {
        ConflictSummary::classify(&active)
    } else {
        ConflictSummary::default()
    };

    CalendarDay {
        date: day.date,
        is_in_focused_period: day.is_in_focused_period,
        is_today: day.date == today,
        active_assignments: active,
        has_conflict,
        conflicts,
    }
}

/// Returns whether any vehicle or driver id repeats among `active`.
fn has_double_booking(active: &[Assignment]) -> bool {
    if active.len() < 2 {
        return false;
    }

    let vehicles: HashSet<&VehicleId> = active.iter().map(|a| &a.vehicle_id).collect();
    let drivers: HashSet<&DriverId> = active.iter().map(|a| &a.driver_id).collect();

    vehicles.len() != active.len() || drivers.len() != active.len()
}

/// Lists the days on which a prospective assignment would double-book.
///
/// A day is listed when an existing assignment covering it uses the same
/// vehicle or the same driver. This is a read-only preview; nothing is
/// rejected on its basis.
#[must_use]
pub fn conflict_dates(
    period: &DateRange,
    vehicle_id: &VehicleId,
    driver_id: &DriverId,
    existing: &[Assignment],
) -> Vec<Date> {
    let overlapping: Vec<&Assignment> = existing
        .iter()
        .filter(|a| &a.vehicle_id == vehicle_id || &a.driver_id == driver_id)
        .filter(|a| a.start_date() <= period.end_date() && period.start_date() <= a.end_date())
        .collect();

    if overlapping.is_empty() {
        return Vec::new();
    }

    period
        .days()
        .filter(|date| overlapping.iter().any(|a| a.is_active_on(*date)))
        .collect()
}
