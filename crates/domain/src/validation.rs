// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Validates that a roster identifier is usable.
///
/// # Arguments
///
/// * `kind` - What the identifier names (e.g. "driver"), used in the error
/// * `value` - The raw identifier
///
/// # Errors
///
/// Returns an error if:
/// - The identifier is empty or only whitespace
/// - The identifier contains control characters
pub fn validate_identifier(kind: &str, value: &str) -> Result<(), DomainError> {
    // Rule: identifiers must not be blank
    if value.trim().is_empty() {
        return Err(DomainError::InvalidIdentifier(format!(
            "{kind} identifier cannot be empty"
        )));
    }

    // Rule: identifiers are printable
    if value.chars().any(char::is_control) {
        return Err(DomainError::InvalidIdentifier(format!(
            "{kind} identifier '{}' contains control characters",
            value.escape_debug()
        )));
    }

    Ok(())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}
