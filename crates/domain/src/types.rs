// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::{AssignmentStatus, derive_status};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Identifies a driver in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DriverId {
    value: String,
}

impl DriverId {
    /// Creates a new `DriverId`.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<String> for DriverId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<DriverId> for String {
    fn from(id: DriverId) -> Self {
        id.value
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Identifies a vehicle in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VehicleId {
    value: String,
}

impl VehicleId {
    /// Creates a new `VehicleId`.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<String> for VehicleId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<VehicleId> for String {
    fn from(id: VehicleId) -> Self {
        id.value
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Opaque identifier of a stored assignment, issued by the assignment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentId(u64);

impl AssignmentId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vehicle classification.
///
/// Used for display coloring only. No scheduling rule depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    #[default]
    Car,
    Van,
    Truck,
    Bus,
    Electric,
}

impl VehicleCategory {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Van => "van",
            Self::Truck => "truck",
            Self::Bus => "bus",
            Self::Electric => "electric",
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "van" => Ok(Self::Van),
            "truck" => Ok(Self::Truck),
            "bus" => Ok(Self::Bus),
            "electric" => Ok(Self::Electric),
            _ => Err(DomainError::InvalidVehicleCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The shift an assignment covers.
///
/// Informational only: conflict detection works at day granularity and
/// ignores the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    #[default]
    Morning,
    Afternoon,
    Night,
    FullDay,
}

impl ShiftType {
    /// Converts this shift type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Night => "night",
            Self::FullDay => "full_day",
        }
    }
}

impl FromStr for ShiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "night" => Ok(Self::Night),
            "full_day" | "full-day" => Ok(Self::FullDay),
            _ => Err(DomainError::InvalidShiftType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A driver available for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// The driver's identifier.
    pub id: DriverId,
    /// The driver's display name.
    pub name: String,
}

impl Driver {
    /// Creates a new `Driver`.
    #[must_use]
    pub const fn new(id: DriverId, name: String) -> Self {
        Self { id, name }
    }
}

/// A vehicle available for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// The vehicle's identifier.
    pub id: VehicleId,
    /// The license plate or fleet number shown to users.
    pub plate: String,
    /// The vehicle's category.
    pub category: VehicleCategory,
}

impl Vehicle {
    /// Creates a new `Vehicle`.
    #[must_use]
    pub const fn new(id: VehicleId, plate: String, category: VehicleCategory) -> Self {
        Self {
            id,
            plate,
            category,
        }
    }
}

/// An inclusive range of calendar days.
///
/// The start never follows the end; this is enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start_date: Date,
    end_date: Date,
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end_date` is before `start_date`.
    pub fn new(start_date: Date, end_date: Date) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidDateRange {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Creates a range covering exactly one day.
    #[must_use]
    pub const fn single_day(date: Date) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns whether `date` falls within the range, both ends inclusive.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Iterates over every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        std::iter::successors(Some(self.start_date), |d| d.next_day())
            .take_while(|d| *d <= self.end_date)
    }
}

/// A driver-vehicle pairing over an inclusive range of days.
///
/// Assignments are immutable once created. Driver and vehicle are referenced
/// by identifier; the display fields are copied from the roster at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// The identifier issued by the assignment store.
    pub id: AssignmentId,
    /// The assigned driver.
    pub driver_id: DriverId,
    /// The driver's display name at creation time.
    pub driver_name: String,
    /// The assigned vehicle.
    pub vehicle_id: VehicleId,
    /// The vehicle's plate at creation time.
    pub vehicle_plate: String,
    /// The vehicle's category at creation time.
    pub vehicle_category: VehicleCategory,
    /// The days covered.
    pub period: DateRange,
    /// The shift worked on each covered day.
    pub shift_type: ShiftType,
}

impl Assignment {
    /// Creates a new `Assignment` pairing `driver` with `vehicle` over `period`.
    #[must_use]
    pub fn new(
        id: AssignmentId,
        driver: &Driver,
        vehicle: &Vehicle,
        period: DateRange,
        shift_type: ShiftType,
    ) -> Self {
        Self {
            id,
            driver_id: driver.id.clone(),
            driver_name: driver.name.clone(),
            vehicle_id: vehicle.id.clone(),
            vehicle_plate: vehicle.plate.clone(),
            vehicle_category: vehicle.category,
            period,
            shift_type,
        }
    }

    /// Returns the first assigned day.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.period.start_date()
    }

    /// Returns the last assigned day.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.period.end_date()
    }

    /// Returns whether this assignment covers `date`.
    #[must_use]
    pub fn is_active_on(&self, date: Date) -> bool {
        self.period.contains(date)
    }

    /// Derives the status relative to `today`.
    ///
    /// Status is never stored, so it cannot drift as days pass.
    #[must_use]
    pub fn status_on(&self, today: Date) -> AssignmentStatus {
        derive_status(self.start_date(), today)
    }
}
