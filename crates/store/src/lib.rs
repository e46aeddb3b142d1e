// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! In-memory collaborators for the scheduling core.
//!
//! Provides the roster and the append-only assignment store the scheduler
//! reads from, a JSON roster file loader, and deterministic demonstration
//! data.

mod demo;
mod error;
mod memory;
mod roster_file;

#[cfg(test)]
mod tests;

pub use demo::{demo_roster, seed_demo_assignments};
pub use error::LoadError;
pub use memory::{InMemoryAssignmentStore, InMemoryRoster};
pub use roster_file::{
    AssignmentRecord, DriverRecord, RosterFile, VehicleRecord, load_roster_file,
    parse_roster_file,
};
