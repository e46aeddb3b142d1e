// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_new_assignment, create_test_roster};
use crate::{InMemoryAssignmentStore, InMemoryRoster};
use fleet_schedule::{AssignmentStore, RosterProvider};
use fleet_schedule_domain::{Assignment, AssignmentId, DriverId, ShiftType, VehicleId};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;
use time::macros::date;

#[test]
fn test_roster_lookup() {
    let roster: InMemoryRoster = create_test_roster();

    assert_eq!(roster.list_drivers().len(), 2);
    assert_eq!(roster.list_vehicles().len(), 2);
    assert_eq!(
        roster.find_driver(&DriverId::new("D2")).unwrap().name,
        "Ben Ortiz"
    );
    assert_eq!(
        roster.find_vehicle(&VehicleId::new(" V2 ")).unwrap().plate,
        "FL-202"
    );
    assert!(roster.find_driver(&DriverId::new("D3")).is_none());
    assert!(roster.find_vehicle(&VehicleId::new("V3")).is_none());
}

#[test]
fn test_new_store_is_empty() {
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::new();

    assert!(store.is_empty().unwrap());
    assert!(store.list_assignments().unwrap().is_empty());
}

#[test]
fn test_append_issues_sequential_ids() {
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::default();

    let first: Assignment = store
        .append_assignment(create_new_assignment(
            date!(2024 - 03 - 01),
            date!(2024 - 03 - 03),
        ))
        .unwrap();
    let second: Assignment = store
        .append_assignment(create_new_assignment(
            date!(2024 - 03 - 02),
            date!(2024 - 03 - 02),
        ))
        .unwrap();

    assert_eq!(first.id, AssignmentId::new(1));
    assert_eq!(second.id, AssignmentId::new(2));
    assert_eq!(first.driver_name, "Ada Park");
    assert_eq!(first.vehicle_plate, "FL-101");
    assert_eq!(first.shift_type, ShiftType::Night);
    assert_eq!(store.len().unwrap(), 2);
}

#[test]
fn test_list_preserves_insertion_order() {
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::new();
    store
        .append_assignment(create_new_assignment(
            date!(2024 - 05 - 01),
            date!(2024 - 05 - 01),
        ))
        .unwrap();
    store
        .append_assignment(create_new_assignment(
            date!(2024 - 04 - 01),
            date!(2024 - 04 - 01),
        ))
        .unwrap();

    let starts: Vec<_> = store
        .list_assignments()
        .unwrap()
        .iter()
        .map(Assignment::start_date)
        .collect();

    assert_eq!(starts, vec![date!(2024 - 05 - 01), date!(2024 - 04 - 01)]);
}

#[test]
fn test_with_assignments_continues_after_highest_id() {
    let seed: InMemoryAssignmentStore = InMemoryAssignmentStore::new();
    for _ in 0..3 {
        seed.append_assignment(create_new_assignment(
            date!(2024 - 03 - 01),
            date!(2024 - 03 - 01),
        ))
        .unwrap();
    }
    let mut existing: Vec<Assignment> = seed.list_assignments().unwrap();
    existing.remove(1);

    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::with_assignments(existing);
    let next: Assignment = store
        .append_assignment(create_new_assignment(
            date!(2024 - 03 - 02),
            date!(2024 - 03 - 02),
        ))
        .unwrap();

    assert_eq!(next.id, AssignmentId::new(4));
    assert_eq!(store.len().unwrap(), 3);
}

#[test]
fn test_concurrent_appends_get_unique_ids() {
    let store: Arc<InMemoryAssignmentStore> = Arc::new(InMemoryAssignmentStore::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store: Arc<InMemoryAssignmentStore> = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..50 {
                    store
                        .append_assignment(create_new_assignment(
                            date!(2024 - 03 - 01),
                            date!(2024 - 03 - 01),
                        ))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let assignments: Vec<Assignment> = store.list_assignments().unwrap();
    let ids: BTreeSet<u64> = assignments.iter().map(|a| a.id.value()).collect();

    assert_eq!(assignments.len(), 400);
    assert_eq!(ids, (1..=400).collect::<BTreeSet<u64>>());
    // Ledger order matches issue order
    assert!(assignments.windows(2).all(|w| w[0].id < w[1].id));
}
