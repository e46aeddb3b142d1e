// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_schedule::StoreError;
use fleet_schedule_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while loading a roster file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read roster file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid roster JSON.
    #[error("Failed to parse roster file: {0}")]
    Json(#[from] serde_json::Error),

    /// A record violates a domain rule.
    #[error("Invalid roster record: {0}")]
    Domain(#[from] DomainError),

    /// An assignment references a driver or vehicle that is not listed.
    #[error("Assignment {index} references unknown {kind} '{id}'")]
    UnknownReference {
        index: usize,
        kind: &'static str,
        id: String,
    },

    /// The same identifier appears twice.
    #[error("Duplicate {kind} identifier '{id}'")]
    DuplicateIdentifier { kind: &'static str, id: String },

    /// The store refused a record.
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}
