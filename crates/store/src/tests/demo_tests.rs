// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemoryAssignmentStore, InMemoryRoster, demo_roster, seed_demo_assignments};
use fleet_schedule::{AssignmentStore, RosterProvider};
use fleet_schedule_domain::{
    Assignment, AssignmentStatus, CalendarDay, DateRange, DriverId, GridDay, VehicleId, annotate,
};
use std::collections::BTreeSet;
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2024 - 03 - 15);

fn seed() -> Vec<Assignment> {
    let roster: InMemoryRoster = demo_roster();
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::new();
    seed_demo_assignments(&roster, &store, TODAY).unwrap()
}

#[test]
fn test_demo_roster_has_unique_ids() {
    let roster: InMemoryRoster = demo_roster();

    let drivers: BTreeSet<DriverId> = roster.list_drivers().into_iter().map(|d| d.id).collect();
    let vehicles: BTreeSet<VehicleId> = roster
        .list_vehicles()
        .into_iter()
        .map(|v| v.id)
        .collect();

    assert_eq!(drivers.len(), 4);
    assert_eq!(vehicles.len(), 4);
}

#[test]
fn test_seeding_is_deterministic() {
    assert_eq!(seed(), seed());
}

#[test]
fn test_seeded_assignments_land_in_store() {
    let roster: InMemoryRoster = demo_roster();
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::new();

    let seeded: Vec<Assignment> = seed_demo_assignments(&roster, &store, TODAY).unwrap();

    assert_eq!(seeded.len(), 7);
    assert_eq!(store.list_assignments().unwrap(), seeded);
}

#[test]
fn test_seeded_statuses_span_past_present_and_future() {
    let seeded: Vec<Assignment> = seed();
    let count = |status: AssignmentStatus| {
        seeded
            .iter()
            .filter(|a| a.status_on(TODAY) == status)
            .count()
    };

    assert_eq!(count(AssignmentStatus::Completed), 2);
    assert_eq!(count(AssignmentStatus::Active), 2);
    assert_eq!(count(AssignmentStatus::Upcoming), 3);
}

#[test]
fn test_seed_contains_one_vehicle_double_booking() {
    let seeded: Vec<Assignment> = seed();
    let month: DateRange = DateRange::new(date!(2024 - 03 - 01), date!(2024 - 03 - 31)).unwrap();

    let conflicted: Vec<CalendarDay> = month
        .days()
        .map(|date| {
            let day: GridDay = GridDay {
                date,
                is_in_focused_period: true,
            };
            annotate(day, TODAY, &seeded)
        })
        .filter(|day| day.has_conflict)
        .collect();

    assert_eq!(conflicted.len(), 1);
    assert_eq!(conflicted[0].date, date!(2024 - 03 - 21));
    assert_eq!(conflicted[0].conflicts.vehicles, vec![VehicleId::new("VEH-101")]);
    assert!(conflicted[0].conflicts.drivers.is_empty());
}

#[test]
fn test_small_roster_wraps() {
    let full: InMemoryRoster = demo_roster();
    let roster: InMemoryRoster = InMemoryRoster::from_parts(
        full.drivers()[..1].to_vec(),
        full.vehicles()[..1].to_vec(),
    );
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::new();

    let seeded: Vec<Assignment> = seed_demo_assignments(&roster, &store, TODAY).unwrap();

    assert_eq!(seeded.len(), 7);
    assert!(seeded.iter().all(|a| a.vehicle_plate == "FL-101"));
}

#[test]
fn test_empty_roster_seeds_nothing() {
    let roster: InMemoryRoster = InMemoryRoster::default();
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::new();

    let seeded: Vec<Assignment> = seed_demo_assignments(&roster, &store, TODAY).unwrap();

    assert!(seeded.is_empty());
    assert!(store.is_empty().unwrap());
}
