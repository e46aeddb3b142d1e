// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment status derivation.
//!
//! Status is a pure function of an assignment's start date and the current
//! day. Every caller (new submissions, seeded demonstration data, rendering)
//! goes through [`derive_status`].

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use time::Date;

/// Where an assignment sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Started before today.
    Completed,
    /// Starts today.
    Active,
    /// Starts after today.
    Upcoming,
}

impl AssignmentStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Upcoming => "upcoming",
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "active" => Ok(Self::Active),
            "upcoming" => Ok(Self::Upcoming),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives an assignment's status from its start date.
///
/// Only the start date matters: a multi-day assignment that began yesterday
/// is `Completed` even while it is still running.
#[must_use]
pub fn derive_status(start_date: Date, today: Date) -> AssignmentStatus {
    match start_date.cmp(&today) {
        Ordering::Less => AssignmentStatus::Completed,
        Ordering::Equal => AssignmentStatus::Active,
        Ordering::Greater => AssignmentStatus::Upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_derive_status_relative_to_today() {
        let today: Date = date!(2024 - 03 - 15);
        assert_eq!(
            derive_status(date!(2024 - 03 - 14), today),
            AssignmentStatus::Completed
        );
        assert_eq!(derive_status(today, today), AssignmentStatus::Active);
        assert_eq!(
            derive_status(date!(2024 - 03 - 16), today),
            AssignmentStatus::Upcoming
        );
    }

    #[test]
    fn test_status_parses_from_display_form() {
        for status in [
            AssignmentStatus::Completed,
            AssignmentStatus::Active,
            AssignmentStatus::Upcoming,
        ] {
            assert_eq!(status.to_string().parse::<AssignmentStatus>(), Ok(status));
        }
        assert!(matches!(
            "pending".parse::<AssignmentStatus>(),
            Err(DomainError::InvalidStatus(_))
        ));
    }
}
