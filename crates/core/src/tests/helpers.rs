// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentRequest, AssignmentScheduler, AssignmentStore, CalendarViewState, FixedClock,
    NewAssignment, RosterProvider, SchedulerConfig, StoreError,
};
use fleet_schedule_domain::{
    Assignment, AssignmentId, Driver, DriverId, ShiftType, Vehicle, VehicleCategory, VehicleId,
    ViewMode,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 03 - 15);

pub type TestScheduler = AssignmentScheduler<FixedClock, TestRoster, TestStore>;

pub struct TestRoster {
    pub drivers: Vec<Driver>,
    pub vehicles: Vec<Vehicle>,
}

impl RosterProvider for TestRoster {
    fn list_drivers(&self) -> Vec<Driver> {
        self.drivers.clone()
    }

    fn list_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.clone()
    }
}

#[derive(Default)]
pub struct TestStore {
    pub assignments: Mutex<Vec<Assignment>>,
    pub reject_appends: AtomicBool,
    pub fail_lists: AtomicBool,
}

impl TestStore {
    pub fn len(&self) -> usize {
        self.assignments.lock().unwrap().len()
    }
}

impl AssignmentStore for TestStore {
    fn list_assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected {
                reason: String::from("read unavailable"),
            });
        }
        Ok(self.assignments.lock().unwrap().clone())
    }

    fn append_assignment(&self, new: NewAssignment) -> Result<Assignment, StoreError> {
        if self.reject_appends.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected {
                reason: String::from("offline"),
            });
        }
        let mut assignments = self.assignments.lock().unwrap();
        let id: AssignmentId = AssignmentId::new(assignments.len() as u64 + 1);
        let assignment: Assignment =
            Assignment::new(id, &new.driver, &new.vehicle, new.period, new.shift_type);
        assignments.push(assignment.clone());
        Ok(assignment)
    }
}

pub fn create_test_roster() -> TestRoster {
    TestRoster {
        drivers: vec![
            Driver::new(DriverId::new("D1"), String::from("Ada Park")),
            Driver::new(DriverId::new("D2"), String::from("Ben Ortiz")),
            Driver::new(DriverId::new("D3"), String::from("Cy Lund")),
        ],
        vehicles: vec![
            Vehicle::new(
                VehicleId::new("V1"),
                String::from("FL-101"),
                VehicleCategory::Van,
            ),
            Vehicle::new(
                VehicleId::new("V2"),
                String::from("FL-202"),
                VehicleCategory::Electric,
            ),
            Vehicle::new(
                VehicleId::new("V3"),
                String::from("FL-303"),
                VehicleCategory::Truck,
            ),
        ],
    }
}

pub fn create_test_scheduler(view_mode: ViewMode, reference_date: Date) -> TestScheduler {
    AssignmentScheduler::new(
        SchedulerConfig::default(),
        FixedClock(TODAY),
        create_test_roster(),
        TestStore::default(),
        CalendarViewState::new(view_mode, reference_date),
    )
    .unwrap()
}

pub fn create_test_request(
    vehicle: &str,
    driver: &str,
    start_date: Date,
    end_date: Date,
) -> AssignmentRequest {
    AssignmentRequest {
        driver_id: DriverId::new(driver),
        vehicle_id: VehicleId::new(vehicle),
        start_date,
        end_date,
        shift_type: ShiftType::Morning,
    }
}
