// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An assignment's end date precedes its start date.
    InvalidDateRange {
        /// The requested first day.
        start_date: Date,
        /// The requested last day.
        end_date: Date,
    },
    /// Date arithmetic left the representable calendar range.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A driver or vehicle identifier is empty or invalid.
    InvalidIdentifier(String),
    /// Shift type is not one of the known values.
    InvalidShiftType(String),
    /// Assignment status is not one of the known values.
    InvalidStatus(String),
    /// Vehicle category is not one of the known values.
    InvalidVehicleCategory(String),
    /// View mode is not one of the known values.
    InvalidViewMode(String),
    /// Week start is not one of the known values.
    InvalidWeekStart(String),
    /// Driver does not exist in the roster.
    DriverNotFound(String),
    /// Vehicle does not exist in the roster.
    VehicleNotFound(String),
    /// A pending assignment draft is missing a required field.
    IncompleteDraft {
        /// The missing field.
        field: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid date range: end date {end_date} is before start date {start_date}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {msg}"),
            Self::InvalidShiftType(value) => write!(f, "Invalid shift type: {value}"),
            Self::InvalidStatus(value) => write!(f, "Invalid assignment status: {value}"),
            Self::InvalidVehicleCategory(value) => {
                write!(f, "Invalid vehicle category: {value}")
            }
            Self::InvalidViewMode(value) => write!(f, "Invalid view mode: {value}"),
            Self::InvalidWeekStart(value) => write!(f, "Invalid week start: {value}"),
            Self::DriverNotFound(id) => write!(f, "Driver '{id}' not found in roster"),
            Self::VehicleNotFound(id) => write!(f, "Vehicle '{id}' not found in roster"),
            Self::IncompleteDraft { field } => {
                write!(f, "Assignment draft is missing required field '{field}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
