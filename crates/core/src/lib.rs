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

mod clock;
mod command;
mod error;
mod label;
mod navigation;
mod roster;
mod scheduler;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{AssignmentDraft, AssignmentRequest, Navigation};
pub use error::{CoreError, StoreError};
pub use label::header_label;
pub use navigation::navigate;
pub use roster::{AssignmentStore, NewAssignment, RosterProvider};
pub use scheduler::AssignmentScheduler;
pub use state::{CalendarViewState, SchedulerConfig, SchedulerPhase};
