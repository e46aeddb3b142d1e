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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod assign;
mod render;

use assign::AssignArg;
use clap::{Parser, ValueEnum};
use fleet_schedule::{
    AssignmentRequest, AssignmentScheduler, CalendarViewState, Clock, FixedClock,
    SchedulerConfig, SystemClock,
};
use fleet_schedule_domain::{ViewMode, WeekStart, parse_iso_date};
use fleet_schedule_store::{
    InMemoryAssignmentStore, InMemoryRoster, demo_roster, load_roster_file,
    seed_demo_assignments,
};
use std::path::PathBuf;
use time::Date;
use tracing::{info, warn};

/// Fleet Calendar - driver and vehicle assignments in a terminal calendar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON roster file. If not provided, uses the built-in demo roster.
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Date whose month or week is shown (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, value_parser = parse_date)]
    date: Option<Date>,

    /// Overrides today's date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    today: Option<Date>,

    /// Calendar view
    #[arg(short, long, value_enum, default_value_t = ViewArg::Month)]
    view: ViewArg,

    /// First day of the week
    #[arg(long, value_enum, default_value_t = WeekStartArg::Sunday)]
    week_start: WeekStartArg,

    /// Seed demonstration assignments around today
    #[arg(long)]
    demo: bool,

    /// Create an assignment: DRIVER,VEHICLE,START[,END[,SHIFT]]. May be repeated.
    #[arg(short, long)]
    assign: Vec<AssignArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    Month,
    Week,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Month => Self::Month,
            ViewArg::Week => Self::Week,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WeekStartArg {
    Sunday,
    Monday,
}

impl From<WeekStartArg> for WeekStart {
    fn from(value: WeekStartArg) -> Self {
        match value {
            WeekStartArg::Sunday => Self::Sunday,
            WeekStartArg::Monday => Self::Monday,
        }
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    parse_iso_date(value).map_err(|e| e.to_string())
}

type CliScheduler = AssignmentScheduler<FixedClock, InMemoryRoster, InMemoryAssignmentStore>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let today: Date = args.today.unwrap_or_else(|| SystemClock.today());

    let (roster, store) = if let Some(path) = &args.roster {
        load_roster_file(path)?
    } else {
        info!("No roster file given; using the demo roster");
        (demo_roster(), InMemoryAssignmentStore::new())
    };

    if args.demo {
        seed_demo_assignments(&roster, &store, today)?;
    }

    let config: SchedulerConfig = SchedulerConfig {
        week_start: args.week_start.into(),
    };
    let view: CalendarViewState =
        CalendarViewState::new(args.view.into(), args.date.unwrap_or(today));
    let mut scheduler: CliScheduler =
        AssignmentScheduler::new(config, FixedClock(today), roster, store, view)?;

    for arg in &args.assign {
        let request: AssignmentRequest = arg.draft.to_request()?;
        let conflicts: Vec<Date> = scheduler.preview_conflicts(&request)?;
        if !conflicts.is_empty() {
            warn!(
                driver_id = %request.driver_id,
                vehicle_id = %request.vehicle_id,
                ?conflicts,
                "Assignment double-books its driver or vehicle"
            );
        }
        scheduler.submit(request)?;
    }

    println!(
        "{}",
        render::render_calendar(
            scheduler.header_label(),
            scheduler.visible_days(),
            config.week_start,
            today,
        )
    );

    Ok(())
}
