// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, parse_iso_date, validate_identifier};
use time::macros::date;

#[test]
fn test_validate_identifier_accepts_plain_value() {
    assert!(validate_identifier("driver", "D-001").is_ok());
}

#[test]
fn test_validate_identifier_rejects_blank() {
    let result: Result<(), DomainError> = validate_identifier("vehicle", "   ");
    assert!(matches!(result, Err(DomainError::InvalidIdentifier(_))));
}

#[test]
fn test_validate_identifier_rejects_control_characters() {
    let result: Result<(), DomainError> = validate_identifier("driver", "D\u{7}1");
    assert!(matches!(result, Err(DomainError::InvalidIdentifier(_))));
}

#[test]
fn test_parse_iso_date_accepts_valid_date() {
    assert_eq!(parse_iso_date("2024-02-29").unwrap(), date!(2024 - 02 - 29));
    assert_eq!(parse_iso_date(" 2024-03-01 ").unwrap(), date!(2024 - 03 - 01));
}

#[test]
fn test_parse_iso_date_rejects_impossible_date() {
    let result = parse_iso_date("2023-02-29");
    assert!(matches!(
        result,
        Err(DomainError::DateParseError { ref date_string, .. }) if date_string == "2023-02-29"
    ));
}

#[test]
fn test_parse_iso_date_rejects_garbage() {
    assert!(parse_iso_date("03/01/2024").is_err());
    assert!(parse_iso_date("").is_err());
}
