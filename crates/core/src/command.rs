// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_schedule_domain::{DomainError, DriverId, ShiftType, VehicleId, ViewMode};
use time::Date;

/// A navigation request against the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Move back one period (a month or a week).
    Previous,
    /// Move forward one period (a month or a week).
    Next,
    /// Jump to the period containing today.
    Today,
    /// Switch between week and month without moving the reference date.
    SetViewMode(ViewMode),
}

/// A complete request to create an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRequest {
    /// The driver to assign.
    pub driver_id: DriverId,
    /// The vehicle to assign.
    pub vehicle_id: VehicleId,
    /// The first assigned day.
    pub start_date: Date,
    /// The last assigned day.
    pub end_date: Date,
    /// The shift worked.
    pub shift_type: ShiftType,
}

/// A pending assignment being filled in by the user.
///
/// Created by selecting a calendar day, which pre-fills both dates. The
/// draft survives a failed submission so it can be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDraft {
    /// The driver, once chosen.
    pub driver_id: Option<DriverId>,
    /// The vehicle, once chosen.
    pub vehicle_id: Option<VehicleId>,
    /// The first assigned day.
    pub start_date: Date,
    /// The last assigned day.
    pub end_date: Date,
    /// The shift worked.
    pub shift_type: ShiftType,
}

impl AssignmentDraft {
    /// Creates a draft covering only `date`.
    #[must_use]
    pub fn for_day(date: Date) -> Self {
        Self {
            driver_id: None,
            vehicle_id: None,
            start_date: date,
            end_date: date,
            shift_type: ShiftType::default(),
        }
    }

    /// Converts the draft into a submittable request.
    ///
    /// The draft itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteDraft` if no driver or no vehicle is set.
    pub fn to_request(&self) -> Result<AssignmentRequest, DomainError> {
        let driver_id: DriverId = self
            .driver_id
            .clone()
            .ok_or(DomainError::IncompleteDraft { field: "driver" })?;
        let vehicle_id: VehicleId = self
            .vehicle_id
            .clone()
            .ok_or(DomainError::IncompleteDraft { field: "vehicle" })?;

        Ok(AssignmentRequest {
            driver_id,
            vehicle_id,
            start_date: self.start_date,
            end_date: self.end_date,
            shift_type: self.shift_type,
        })
    }
}
