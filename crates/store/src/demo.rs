// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic demonstration data.
//!
//! Seeded assignments are placed at fixed day offsets around "today" so the
//! calendar shows past, current and upcoming work. Their status comes from
//! the same rule as submitted assignments.

use crate::memory::InMemoryRoster;
use fleet_schedule::{AssignmentStore, NewAssignment, RosterProvider, StoreError};
use fleet_schedule_domain::{
    Assignment, DateRange, Driver, DriverId, ShiftType, Vehicle, VehicleCategory, VehicleId,
};
use time::{Date, Duration};
use tracing::{info, warn};

/// One seeded assignment, relative to today.
struct DemoSlot {
    start_offset: i64,
    days: i64,
    driver: usize,
    vehicle: usize,
    shift_type: ShiftType,
}

const fn slot(
    start_offset: i64,
    days: i64,
    driver: usize,
    vehicle: usize,
    shift_type: ShiftType,
) -> DemoSlot {
    DemoSlot {
        start_offset,
        days,
        driver,
        vehicle,
        shift_type,
    }
}

const DEMO_SLOTS: &[DemoSlot] = &[
    slot(-12, 3, 0, 0, ShiftType::Morning),
    slot(-5, 5, 1, 1, ShiftType::Afternoon),
    slot(0, 1, 2, 2, ShiftType::FullDay),
    slot(0, 2, 0, 3, ShiftType::Night),
    slot(3, 4, 1, 0, ShiftType::Morning),
    // Shares vehicle 0 with the slot above on its last day
    slot(6, 1, 2, 0, ShiftType::Afternoon),
    slot(10, 2, 3, 1, ShiftType::FullDay),
];

/// Returns a small roster suitable for demonstrations.
#[must_use]
pub fn demo_roster() -> InMemoryRoster {
    let drivers: Vec<Driver> = [
        ("DRV-001", "Ada Park"),
        ("DRV-002", "Ben Ortiz"),
        ("DRV-003", "Cy Lund"),
        ("DRV-004", "Dee Moreau"),
    ]
    .into_iter()
    .map(|(id, name)| Driver::new(DriverId::new(id), name.to_string()))
    .collect();

    let vehicles: Vec<Vehicle> = [
        ("VEH-101", "FL-101", VehicleCategory::Van),
        ("VEH-202", "FL-202", VehicleCategory::Electric),
        ("VEH-303", "FL-303", VehicleCategory::Truck),
        ("VEH-404", "FL-404", VehicleCategory::Car),
    ]
    .into_iter()
    .map(|(id, plate, category)| {
        Vehicle::new(VehicleId::new(id), plate.to_string(), category)
    })
    .collect();

    InMemoryRoster::from_parts(drivers, vehicles)
}

/// Appends demonstration assignments around `today`.
///
/// Drivers and vehicles are picked from the roster by position, wrapping
/// around small rosters. Nothing is seeded if the roster has no drivers or
/// no vehicles.
///
/// # Errors
///
/// Returns an error if the store rejects an append.
pub fn seed_demo_assignments<R, S>(
    roster: &R,
    store: &S,
    today: Date,
) -> Result<Vec<Assignment>, StoreError>
where
    R: RosterProvider + ?Sized,
    S: AssignmentStore + ?Sized,
{
    let drivers: Vec<Driver> = roster.list_drivers();
    let vehicles: Vec<Vehicle> = roster.list_vehicles();

    if drivers.is_empty() || vehicles.is_empty() {
        warn!("Roster has no drivers or no vehicles; skipping demo data");
        return Ok(Vec::new());
    }

    let mut seeded: Vec<Assignment> = Vec::with_capacity(DEMO_SLOTS.len());
    for slot in DEMO_SLOTS {
        let Some(period) = slot_period(slot, today) else {
            warn!(
                start_offset = slot.start_offset,
                "Demo slot outside calendar range"
            );
            continue;
        };

        let assignment: Assignment = store.append_assignment(NewAssignment {
            driver: drivers[slot.driver % drivers.len()].clone(),
            vehicle: vehicles[slot.vehicle % vehicles.len()].clone(),
            period,
            shift_type: slot.shift_type,
        })?;
        seeded.push(assignment);
    }

    info!(count = seeded.len(), %today, "Seeded demo assignments");
    Ok(seeded)
}

fn slot_period(slot: &DemoSlot, today: Date) -> Option<DateRange> {
    let start: Date = today.checked_add(Duration::days(slot.start_offset))?;
    let end: Date = start.checked_add(Duration::days(slot.days - 1))?;
    DateRange::new(start, end).ok()
}
