// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interfaces to the collaborators that own drivers, vehicles and
//! assignments.
//!
//! The scheduler reads the roster and appends assignments through these
//! traits only. Storage, networking and caching live behind them.

use crate::error::StoreError;
use fleet_schedule_domain::{
    Assignment, DateRange, Driver, DriverId, ShiftType, Vehicle, VehicleId,
};
use std::sync::Arc;

/// Provides the drivers and vehicles available for assignment.
pub trait RosterProvider {
    /// Returns every driver.
    fn list_drivers(&self) -> Vec<Driver>;

    /// Returns every vehicle.
    fn list_vehicles(&self) -> Vec<Vehicle>;

    /// Looks up a driver by identifier.
    fn find_driver(&self, id: &DriverId) -> Option<Driver> {
        self.list_drivers().into_iter().find(|d| &d.id == id)
    }

    /// Looks up a vehicle by identifier.
    fn find_vehicle(&self, id: &VehicleId) -> Option<Vehicle> {
        self.list_vehicles().into_iter().find(|v| &v.id == id)
    }
}

/// A validated assignment awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    /// The resolved driver.
    pub driver: Driver,
    /// The resolved vehicle.
    pub vehicle: Vehicle,
    /// The days covered.
    pub period: DateRange,
    /// The shift worked.
    pub shift_type: ShiftType,
}

/// Holds assignment records.
///
/// Assignments are append-only: there is no update or delete. Stores shared
/// between editors must not lose concurrent appends.
pub trait AssignmentStore {
    /// Returns every stored assignment in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_assignments(&self) -> Result<Vec<Assignment>, StoreError>;

    /// Stores a new assignment and returns it with its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the append. A failed append
    /// leaves the store unchanged.
    fn append_assignment(&self, new: NewAssignment) -> Result<Assignment, StoreError>;
}

impl<R: RosterProvider + ?Sized> RosterProvider for Arc<R> {
    fn list_drivers(&self) -> Vec<Driver> {
        (**self).list_drivers()
    }

    fn list_vehicles(&self) -> Vec<Vehicle> {
        (**self).list_vehicles()
    }

    fn find_driver(&self, id: &DriverId) -> Option<Driver> {
        (**self).find_driver(id)
    }

    fn find_vehicle(&self, id: &VehicleId) -> Option<Vehicle> {
        (**self).find_vehicle(id)
    }
}

impl<S: AssignmentStore + ?Sized> AssignmentStore for Arc<S> {
    fn list_assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        (**self).list_assignments()
    }

    fn append_assignment(&self, new: NewAssignment) -> Result<Assignment, StoreError> {
        (**self).append_assignment(new)
    }
}
