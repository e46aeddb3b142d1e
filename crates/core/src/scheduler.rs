// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment scheduler.
//!
//! Owns the calendar view state and the visible days derived from it.
//!
//! ## Invariants
//!
//! - Visible days are rebuilt in full whenever the view state or the
//!   assignment set changes; they are never patched in place
//! - Every operation either commits a complete new view or leaves the
//!   previous one untouched
//! - A failed submission never reaches the assignment store

use crate::clock::Clock;
use crate::command::{AssignmentDraft, AssignmentRequest, Navigation};
use crate::error::CoreError;
use crate::label::header_label;
use crate::navigation::navigate;
use crate::roster::{AssignmentStore, NewAssignment, RosterProvider};
use crate::state::{CalendarViewState, SchedulerConfig, SchedulerPhase};
use fleet_schedule_domain::{
    Assignment, AssignmentStatus, CalendarDay, DateRange, DomainError, Driver, GridDay, Vehicle,
    ViewMode, annotate, build_grid, conflict_dates, validate_identifier,
};
use time::Date;
use tracing::{debug, info, warn};

/// The grid and label for one view state, before assignments are attached.
struct ViewFrame {
    view: CalendarViewState,
    grid: Vec<GridDay>,
    label: String,
}

/// Drives a calendar of driver/vehicle assignments.
pub struct AssignmentScheduler<C, R, S> {
    config: SchedulerConfig,
    clock: C,
    roster: R,
    store: S,
    view: CalendarViewState,
    phase: SchedulerPhase,
    assignments: Vec<Assignment>,
    days: Vec<CalendarDay>,
    label: String,
}

impl<C, R, S> AssignmentScheduler<C, R, S>
where
    C: Clock,
    R: RosterProvider,
    S: AssignmentStore,
{
    /// Creates a scheduler and builds its first view.
    ///
    /// # Arguments
    ///
    /// * `config` - Scheduler configuration
    /// * `clock` - Source of today's date
    /// * `roster` - Provider of drivers and vehicles
    /// * `store` - Holder of assignment records
    /// * `view` - The initial view state
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the initial grid
    /// cannot be built.
    pub fn new(
        config: SchedulerConfig,
        clock: C,
        roster: R,
        store: S,
        view: CalendarViewState,
    ) -> Result<Self, CoreError> {
        let frame: ViewFrame = frame_for(view, config)?;
        let assignments: Vec<Assignment> = store.list_assignments()?;
        let today: Date = clock.today();
        let days: Vec<CalendarDay> = annotate_grid(&frame.grid, today, &assignments);

        debug!(
            view_mode = %view.view_mode,
            reference_date = %view.reference_date,
            assignments = assignments.len(),
            "Built initial calendar view"
        );

        Ok(Self {
            config,
            clock,
            roster,
            store,
            view: frame.view,
            phase: SchedulerPhase::Idle,
            assignments,
            days,
            label: frame.label,
        })
    }

    /// Returns the days currently visible, in ascending date order.
    ///
    /// `is_today` reflects the clock at the last rebuild. Call
    /// [`refresh`](Self::refresh) after midnight to move it.
    #[must_use]
    pub fn visible_days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns the heading for the current view.
    #[must_use]
    pub fn header_label(&self) -> &str {
        &self.label
    }

    /// Returns the current view state.
    #[must_use]
    pub const fn view_state(&self) -> CalendarViewState {
        self.view
    }

    /// Returns the submission phase.
    #[must_use]
    pub const fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    /// Returns the scheduler configuration.
    #[must_use]
    pub const fn config(&self) -> SchedulerConfig {
        self.config
    }

    /// Returns the assignment set the visible days were built from.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns the roster provider.
    #[must_use]
    pub const fn roster(&self) -> &R {
        &self.roster
    }

    /// Returns the assignment store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Derives an assignment's status relative to today.
    #[must_use]
    pub fn status_of(&self, assignment: &Assignment) -> AssignmentStatus {
        assignment.status_on(self.clock.today())
    }

    /// Moves back one month or one week.
    ///
    /// # Errors
    ///
    /// Returns an error if the move leaves the representable calendar range.
    pub fn go_to_previous(&mut self) -> Result<(), CoreError> {
        self.apply_navigation(Navigation::Previous)
    }

    /// Moves forward one month or one week.
    ///
    /// # Errors
    ///
    /// Returns an error if the move leaves the representable calendar range.
    pub fn go_to_next(&mut self) -> Result<(), CoreError> {
        self.apply_navigation(Navigation::Next)
    }

    /// Shows the period containing today.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid around today cannot be built.
    pub fn go_to_today(&mut self) -> Result<(), CoreError> {
        self.apply_navigation(Navigation::Today)
    }

    /// Switches between week and month view without moving the reference date.
    ///
    /// # Errors
    ///
    /// Returns an error if the new grid cannot be built.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> Result<(), CoreError> {
        self.apply_navigation(Navigation::SetViewMode(view_mode))
    }

    /// Applies a navigation request and rebuilds the visible days.
    ///
    /// # Errors
    ///
    /// Returns an error if the move leaves the representable calendar range.
    /// The current view is kept in that case.
    pub fn apply_navigation(&mut self, navigation: Navigation) -> Result<(), CoreError> {
        let today: Date = self.clock.today();
        let view: CalendarViewState = navigate(self.view, navigation, today)?;
        let frame: ViewFrame = frame_for(view, self.config)?;

        debug!(
            ?navigation,
            view_mode = %view.view_mode,
            reference_date = %view.reference_date,
            "Navigated calendar"
        );

        self.commit(frame, today);
        Ok(())
    }

    /// Re-reads the assignment store and rebuilds the visible days.
    ///
    /// Picks up assignments appended by other editors and re-reads the
    /// clock, so `is_today` follows a date change.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read. The current view is
    /// kept in that case.
    pub fn refresh(&mut self) -> Result<(), CoreError> {
        let frame: ViewFrame = frame_for(self.view, self.config)?;
        let assignments: Vec<Assignment> = self.store.list_assignments()?;
        let today: Date = self.clock.today();

        self.assignments = assignments;
        self.commit(frame, today);
        Ok(())
    }

    /// Starts a draft for a clicked day, with both dates set to that day.
    #[must_use]
    pub fn select_day(&self, date: Date) -> AssignmentDraft {
        AssignmentDraft::for_day(date)
    }

    /// Lists the days on which `request` would double-book its driver or vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the request's date range is invalid.
    pub fn preview_conflicts(&self, request: &AssignmentRequest) -> Result<Vec<Date>, CoreError> {
        let period: DateRange = DateRange::new(request.start_date, request.end_date)?;
        Ok(conflict_dates(
            &period,
            &request.vehicle_id,
            &request.driver_id,
            &self.assignments,
        ))
    }

    /// Creates an assignment and rebuilds the visible days.
    ///
    /// Driver and vehicle display data are resolved from the roster. The
    /// append and the rebuild happen within this call; callers never see
    /// the new assignment without the matching calendar.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the store and the view untouched, if:
    /// - The end date is before the start date
    /// - The driver or vehicle id is blank or not in the roster
    /// - The store rejects the append
    pub fn submit(&mut self, request: AssignmentRequest) -> Result<Assignment, CoreError> {
        self.phase = SchedulerPhase::SubmittingAssignment;
        let result: Result<Assignment, CoreError> = self.submit_inner(&request);
        self.phase = SchedulerPhase::Idle;

        match &result {
            Ok(assignment) => info!(
                assignment_id = %assignment.id,
                driver_id = %assignment.driver_id,
                vehicle_id = %assignment.vehicle_id,
                start_date = %assignment.start_date(),
                end_date = %assignment.end_date(),
                "Assignment created"
            ),
            Err(err) => warn!(
                driver_id = %request.driver_id,
                vehicle_id = %request.vehicle_id,
                error = %err,
                "Assignment submission rejected"
            ),
        }

        result
    }

    fn submit_inner(&mut self, request: &AssignmentRequest) -> Result<Assignment, CoreError> {
        let new: NewAssignment = self.resolve(request)?;

        // Everything fallible except the append itself happens first
        let frame: ViewFrame = frame_for(self.view, self.config)?;
        let created: Assignment = self.store.append_assignment(new)?;

        let assignments: Vec<Assignment> = match self.store.list_assignments() {
            Ok(assignments) => assignments,
            Err(err) => {
                warn!(error = %err, "Could not re-read store after append; using local copy");
                let mut assignments: Vec<Assignment> = self.assignments.clone();
                assignments.push(created.clone());
                assignments
            }
        };

        let today: Date = self.clock.today();
        self.assignments = assignments;
        self.commit(frame, today);
        Ok(created)
    }

    /// Validates a request and resolves its roster references.
    fn resolve(&self, request: &AssignmentRequest) -> Result<NewAssignment, CoreError> {
        let period: DateRange = DateRange::new(request.start_date, request.end_date)?;

        validate_identifier("driver", request.driver_id.value())?;
        validate_identifier("vehicle", request.vehicle_id.value())?;

        let driver: Driver = self
            .roster
            .find_driver(&request.driver_id)
            .ok_or_else(|| DomainError::DriverNotFound(request.driver_id.to_string()))?;
        let vehicle: Vehicle = self
            .roster
            .find_vehicle(&request.vehicle_id)
            .ok_or_else(|| DomainError::VehicleNotFound(request.vehicle_id.to_string()))?;

        Ok(NewAssignment {
            driver,
            vehicle,
            period,
            shift_type: request.shift_type,
        })
    }

    /// Replaces the visible view with `frame` annotated against the current assignments.
    fn commit(&mut self, frame: ViewFrame, today: Date) {
        let days: Vec<CalendarDay> = annotate_grid(&frame.grid, today, &self.assignments);
        let conflicted: usize = days.iter().filter(|d| d.has_conflict).count();

        debug!(
            days = days.len(),
            conflicted,
            assignments = self.assignments.len(),
            "Rebuilt calendar days"
        );

        self.view = frame.view;
        self.days = days;
        self.label = frame.label;
    }
}

/// Builds the raw grid and heading for a view state.
fn frame_for(view: CalendarViewState, config: SchedulerConfig) -> Result<ViewFrame, CoreError> {
    let grid: Vec<GridDay> = build_grid(view.reference_date, view.view_mode, config.week_start)?;
    let label: String = header_label(view, config.week_start)?;
    Ok(ViewFrame { view, grid, label })
}

fn annotate_grid(grid: &[GridDay], today: Date, assignments: &[Assignment]) -> Vec<CalendarDay> {
    grid.iter()
        .map(|day| annotate(*day, today, assignments))
        .collect()
}
