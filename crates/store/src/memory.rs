// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_schedule::{AssignmentStore, NewAssignment, RosterProvider, StoreError};
use fleet_schedule_domain::{Assignment, AssignmentId, Driver, DriverId, Vehicle, VehicleId};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// A fixed roster of drivers and vehicles held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRoster {
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
}

impl InMemoryRoster {
    /// Creates a roster from its drivers and vehicles.
    #[must_use]
    pub const fn from_parts(drivers: Vec<Driver>, vehicles: Vec<Vehicle>) -> Self {
        Self { drivers, vehicles }
    }

    /// Returns the drivers in insertion order.
    #[must_use]
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Returns the vehicles in insertion order.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

impl RosterProvider for InMemoryRoster {
    fn list_drivers(&self) -> Vec<Driver> {
        self.drivers.clone()
    }

    fn list_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.clone()
    }

    fn find_driver(&self, id: &DriverId) -> Option<Driver> {
        self.drivers.iter().find(|d| &d.id == id).cloned()
    }

    fn find_vehicle(&self, id: &VehicleId) -> Option<Vehicle> {
        self.vehicles.iter().find(|v| &v.id == id).cloned()
    }
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: u64,
    assignments: Vec<Assignment>,
}

/// An append-only assignment store.
///
/// Identifier issue and insertion happen under one lock, so identifiers
/// are unique and increase in insertion order even with concurrent writers.
#[derive(Debug)]
pub struct InMemoryAssignmentStore {
    ledger: Mutex<Ledger>,
}

impl Default for InMemoryAssignmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAssignmentStore {
    /// Creates an empty store whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                next_id: 1,
                assignments: Vec::new(),
            }),
        }
    }

    /// Creates a store holding `assignments`.
    ///
    /// New identifiers continue after the largest existing one.
    #[must_use]
    pub fn with_assignments(assignments: Vec<Assignment>) -> Self {
        let next_id: u64 = assignments
            .iter()
            .map(|a| a.id.value())
            .max()
            .map_or(1, |max| max.saturating_add(1));

        Self {
            ledger: Mutex::new(Ledger {
                next_id,
                assignments,
            }),
        }
    }

    /// Returns the number of stored assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.assignments.len())
    }

    /// Returns whether the store holds no assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.assignments.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, StoreError> {
        self.ledger.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl AssignmentStore for InMemoryAssignmentStore {
    fn list_assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        Ok(self.lock()?.assignments.clone())
    }

    fn append_assignment(&self, new: NewAssignment) -> Result<Assignment, StoreError> {
        let mut ledger: MutexGuard<'_, Ledger> = self.lock()?;

        let id: AssignmentId = AssignmentId::new(ledger.next_id);
        let next_id: u64 = ledger
            .next_id
            .checked_add(1)
            .ok_or(StoreError::SequenceExhausted)?;

        let assignment: Assignment =
            Assignment::new(id, &new.driver, &new.vehicle, new.period, new.shift_type);
        ledger.assignments.push(assignment.clone());
        ledger.next_id = next_id;

        debug!(assignment_id = %id, total = ledger.assignments.len(), "Appended assignment");

        Ok(assignment)
    }
}
