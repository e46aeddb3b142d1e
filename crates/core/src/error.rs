// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_schedule_domain::DomainError;
use thiserror::Error;

/// Errors reported by an assignment store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store's lock was poisoned by a panicking writer.
    #[error("Assignment store lock poisoned")]
    LockPoisoned,

    /// The store ran out of assignment identifiers.
    #[error("Assignment identifier sequence exhausted")]
    SequenceExhausted,

    /// The store refused the append.
    #[error("Assignment store rejected the append: {reason}")]
    Rejected { reason: String },
}

/// Errors that can occur while scheduling.
///
/// Grid building and conflict detection are pure; only date overflow at the
/// edges of the calendar, roster misses and store failures surface here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// The assignment store failed.
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    /// The header label could not be formatted.
    #[error("Failed to format header label: {0}")]
    LabelFormat(String),
}
