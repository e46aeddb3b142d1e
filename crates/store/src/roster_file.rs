// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON roster files.
//!
//! A roster file lists drivers, vehicles and existing assignments:
//!
//! ```json
//! {
//!   "drivers": [{ "id": "D1", "name": "Ada Park" }],
//!   "vehicles": [{ "id": "V1", "plate": "FL-101", "category": "van" }],
//!   "assignments": [{
//!     "driver_id": "D1",
//!     "vehicle_id": "V1",
//!     "start_date": "2024-03-01",
//!     "end_date": "2024-03-03",
//!     "shift_type": "morning"
//!   }]
//! }
//! ```
//!
//! Dates are ISO 8601 calendar dates. Assignment identifiers are issued by
//! the store in file order.

use crate::error::LoadError;
use crate::memory::{InMemoryAssignmentStore, InMemoryRoster};
use fleet_schedule::{AssignmentStore, NewAssignment, RosterProvider};
use fleet_schedule_domain::{
    DateRange, Driver, DriverId, ShiftType, Vehicle, VehicleCategory, VehicleId, parse_iso_date,
    validate_identifier,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use time::Date;
use tracing::info;

/// A driver entry in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: String,
    pub name: String,
}

/// A vehicle entry in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub plate: String,
    #[serde(default)]
    pub category: VehicleCategory,
}

/// An assignment entry in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub driver_id: String,
    pub vehicle_id: String,
    /// First assigned day (ISO 8601).
    pub start_date: String,
    /// Last assigned day (ISO 8601).
    pub end_date: String,
    #[serde(default)]
    pub shift_type: ShiftType,
}

/// The contents of a roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub drivers: Vec<DriverRecord>,
    #[serde(default)]
    pub vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
}

/// Reads and validates a roster file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation; see
/// [`parse_roster_file`].
pub fn load_roster_file(
    path: &Path,
) -> Result<(InMemoryRoster, InMemoryAssignmentStore), LoadError> {
    let contents: String = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let loaded = parse_roster_file(&contents)?;

    info!(
        path = %path.display(),
        drivers = loaded.0.drivers().len(),
        vehicles = loaded.0.vehicles().len(),
        "Loaded roster file"
    );

    Ok(loaded)
}

/// Parses and validates roster JSON.
///
/// # Errors
///
/// Returns an error if:
/// - The JSON does not match the roster file layout
/// - An identifier is blank or duplicated
/// - A date is malformed or an end date precedes its start date
/// - An assignment references an unknown driver or vehicle
pub fn parse_roster_file(
    contents: &str,
) -> Result<(InMemoryRoster, InMemoryAssignmentStore), LoadError> {
    let file: RosterFile = serde_json::from_str(contents)?;

    let drivers: Vec<Driver> = file
        .drivers
        .iter()
        .map(|record| -> Result<Driver, LoadError> {
            validate_identifier("driver", &record.id)?;
            Ok(Driver::new(DriverId::new(&record.id), record.name.clone()))
        })
        .collect::<Result<_, LoadError>>()?;
    ensure_unique("driver", drivers.iter().map(|d| d.id.value()))?;

    let vehicles: Vec<Vehicle> = file
        .vehicles
        .iter()
        .map(|record| -> Result<Vehicle, LoadError> {
            validate_identifier("vehicle", &record.id)?;
            Ok(Vehicle::new(
                VehicleId::new(&record.id),
                record.plate.clone(),
                record.category,
            ))
        })
        .collect::<Result<_, LoadError>>()?;
    ensure_unique("vehicle", vehicles.iter().map(|v| v.id.value()))?;

    let roster: InMemoryRoster = InMemoryRoster::from_parts(drivers, vehicles);
    let store: InMemoryAssignmentStore = InMemoryAssignmentStore::new();

    for (index, record) in file.assignments.iter().enumerate() {
        let new: NewAssignment = resolve_record(&roster, index, record)?;
        store.append_assignment(new)?;
    }

    Ok((roster, store))
}

fn resolve_record(
    roster: &InMemoryRoster,
    index: usize,
    record: &AssignmentRecord,
) -> Result<NewAssignment, LoadError> {
    let start_date: Date = parse_iso_date(&record.start_date)?;
    let end_date: Date = parse_iso_date(&record.end_date)?;
    let period: DateRange = DateRange::new(start_date, end_date)?;

    let driver: Driver = roster
        .find_driver(&DriverId::new(&record.driver_id))
        .ok_or_else(|| LoadError::UnknownReference {
            index,
            kind: "driver",
            id: record.driver_id.clone(),
        })?;
    let vehicle: Vehicle = roster
        .find_vehicle(&VehicleId::new(&record.vehicle_id))
        .ok_or_else(|| LoadError::UnknownReference {
            index,
            kind: "vehicle",
            id: record.vehicle_id.clone(),
        })?;

    Ok(NewAssignment {
        driver,
        vehicle,
        period,
        shift_type: record.shift_type,
    })
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), LoadError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(LoadError::DuplicateIdentifier {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
