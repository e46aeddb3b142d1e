// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::InMemoryRoster;
use fleet_schedule::NewAssignment;
use fleet_schedule_domain::{
    DateRange, Driver, DriverId, ShiftType, Vehicle, VehicleCategory, VehicleId,
};
use time::Date;

pub fn create_test_roster() -> InMemoryRoster {
    InMemoryRoster::from_parts(
        vec![
            Driver::new(DriverId::new("D1"), String::from("Ada Park")),
            Driver::new(DriverId::new("D2"), String::from("Ben Ortiz")),
        ],
        vec![
            Vehicle::new(
                VehicleId::new("V1"),
                String::from("FL-101"),
                VehicleCategory::Van,
            ),
            Vehicle::new(
                VehicleId::new("V2"),
                String::from("FL-202"),
                VehicleCategory::Bus,
            ),
        ],
    )
}

pub fn create_new_assignment(start_date: Date, end_date: Date) -> NewAssignment {
    NewAssignment {
        driver: Driver::new(DriverId::new("D1"), String::from("Ada Park")),
        vehicle: Vehicle::new(
            VehicleId::new("V1"),
            String::from("FL-101"),
            VehicleCategory::Van,
        ),
        period: DateRange::new(start_date, end_date).unwrap(),
        shift_type: ShiftType::Night,
    }
}
