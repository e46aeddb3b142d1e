// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Assignment, AssignmentId, DateRange, Driver, DriverId, ShiftType, Vehicle, VehicleCategory,
    VehicleId,
};
use time::Date;

pub fn create_test_driver(id: &str) -> Driver {
    Driver::new(DriverId::new(id), format!("Driver {id}"))
}

pub fn create_test_vehicle(id: &str) -> Vehicle {
    Vehicle::new(
        VehicleId::new(id),
        format!("PLATE-{id}"),
        VehicleCategory::Van,
    )
}

/// Builds an assignment for `vehicle`/`driver` over `start..=end`.
pub fn create_test_assignment(
    id: u64,
    vehicle: &str,
    driver: &str,
    start: Date,
    end: Date,
) -> Assignment {
    Assignment::new(
        AssignmentId::new(id),
        &create_test_driver(driver),
        &create_test_vehicle(vehicle),
        DateRange::new(start, end).unwrap(),
        ShiftType::FullDay,
    )
}
