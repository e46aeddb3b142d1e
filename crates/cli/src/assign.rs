// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_schedule::AssignmentDraft;
use fleet_schedule_domain::{DriverId, ShiftType, VehicleId, parse_iso_date};
use std::str::FromStr;
use time::Date;

/// An assignment given on the command line as
/// `DRIVER,VEHICLE,START[,END[,SHIFT]]`.
///
/// An empty driver or vehicle field leaves that part of the draft unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignArg {
    pub draft: AssignmentDraft,
}

impl FromStr for AssignArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let [driver, vehicle, start, rest @ ..] = fields.as_slice() else {
            return Err(format!("expected DRIVER,VEHICLE,START[,END[,SHIFT]], got '{s}'"));
        };
        if rest.len() > 2 {
            return Err(format!("too many fields in '{s}'"));
        }

        let start_date: Date = parse_iso_date(start).map_err(|e| e.to_string())?;
        let mut draft: AssignmentDraft = AssignmentDraft::for_day(start_date);
        draft.driver_id = (!driver.is_empty()).then(|| DriverId::new(driver));
        draft.vehicle_id = (!vehicle.is_empty()).then(|| VehicleId::new(vehicle));

        if let Some(end) = rest.first() {
            draft.end_date = parse_iso_date(end).map_err(|e| e.to_string())?;
        }
        if let Some(shift) = rest.get(1) {
            draft.shift_type = shift.parse::<ShiftType>().map_err(|e| e.to_string())?;
        }

        Ok(Self { draft })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use fleet_schedule::AssignmentRequest;
    use fleet_schedule_domain::DomainError;
    use time::macros::date;

    #[test]
    fn test_single_day_defaults() {
        let arg: AssignArg = "D1,V1,2024-03-18".parse().unwrap();

        let request: AssignmentRequest = arg.draft.to_request().unwrap();
        assert_eq!(request.driver_id, DriverId::new("D1"));
        assert_eq!(request.vehicle_id, VehicleId::new("V1"));
        assert_eq!(request.start_date, date!(2024 - 03 - 18));
        assert_eq!(request.end_date, date!(2024 - 03 - 18));
        assert_eq!(request.shift_type, ShiftType::Morning);
    }

    #[test]
    fn test_full_form() {
        let arg: AssignArg = " D2 , V3 , 2024-03-18 , 2024-03-20 , full-day "
            .parse()
            .unwrap();

        assert_eq!(arg.draft.end_date, date!(2024 - 03 - 20));
        assert_eq!(arg.draft.shift_type, ShiftType::FullDay);
    }

    #[test]
    fn test_missing_vehicle_leaves_draft_incomplete() {
        let arg: AssignArg = "D1,,2024-03-18".parse().unwrap();

        assert_eq!(
            arg.draft.to_request(),
            Err(DomainError::IncompleteDraft { field: "vehicle" })
        );
    }

    #[test]
    fn test_malformed_arguments_are_rejected() {
        assert!("D1,V1".parse::<AssignArg>().is_err());
        assert!("D1,V1,2024-13-01".parse::<AssignArg>().is_err());
        assert!("D1,V1,2024-03-01,2024-03-02,night,extra".parse::<AssignArg>().is_err());
        assert!("D1,V1,2024-03-01,2024-03-02,evening".parse::<AssignArg>().is_err());
    }
}
