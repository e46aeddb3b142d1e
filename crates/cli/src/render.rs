// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of the visible calendar.
//!
//! Each day is a fixed-width cell: `[15]` marks today, `(29)` a padding day
//! outside the viewed period, `!` a double-booked day, and a trailing number
//! the count of active assignments.

use fleet_schedule_domain::{Assignment, AssignmentId, CalendarDay, WeekStart};
use std::collections::BTreeMap;
use time::{Date, Weekday};

const DAYS_PER_ROW: usize = 7;

/// Renders the heading, the grid, the conflicts and the visible assignments.
#[must_use]
pub fn render_calendar(
    label: &str,
    days: &[CalendarDay],
    week_start: WeekStart,
    today: Date,
) -> String {
    let mut lines: Vec<String> = vec![label.to_string(), weekday_header(week_start)];
    lines.extend(days.chunks(DAYS_PER_ROW).map(render_row));
    lines.push(String::new());
    lines.extend(conflict_lines(days));
    lines.push(String::new());
    lines.extend(assignment_lines(days, today));
    lines.join("\n")
}

fn weekday_header(week_start: WeekStart) -> String {
    let mut weekday: Weekday = week_start.weekday();
    let mut names: Vec<String> = Vec::with_capacity(DAYS_PER_ROW);
    for _ in 0..DAYS_PER_ROW {
        names.push(format!(" {:<6}", short_name(weekday)));
        weekday = weekday.next();
    }
    names.join(" ").trim_end().to_string()
}

const fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn render_row(days: &[CalendarDay]) -> String {
    days.iter()
        .map(render_cell)
        .collect::<Vec<String>>()
        .join(" ")
        .trim_end()
        .to_string()
}

fn render_cell(day: &CalendarDay) -> String {
    let (open, close) = if day.is_today {
        ('[', ']')
    } else if day.is_in_focused_period {
        (' ', ' ')
    } else {
        ('(', ')')
    };
    let flag: char = if day.has_conflict { '!' } else { ' ' };
    let count: String = match day.active_assignments.len() {
        0 => String::new(),
        n => n.to_string(),
    };

    format!("{open}{:>2}{close}{flag}{count:<2}", day.date.day())
}

fn conflict_lines(days: &[CalendarDay]) -> Vec<String> {
    let conflicted: Vec<&CalendarDay> = days.iter().filter(|d| d.has_conflict).collect();
    if conflicted.is_empty() {
        return vec![String::from("Conflicts: none")];
    }

    let mut lines: Vec<String> = vec![String::from("Conflicts:")];
    lines.extend(conflicted.iter().map(|day| {
        format!(
            "  {}  vehicles: {}  drivers: {}",
            day.date,
            join_or_dash(day.conflicts.vehicles.iter().map(ToString::to_string)),
            join_or_dash(day.conflicts.drivers.iter().map(ToString::to_string)),
        )
    }));
    lines
}

fn assignment_lines(days: &[CalendarDay], today: Date) -> Vec<String> {
    let visible: BTreeMap<AssignmentId, &Assignment> = days
        .iter()
        .flat_map(|d| d.active_assignments.iter())
        .map(|a| (a.id, a))
        .collect();
    if visible.is_empty() {
        return vec![String::from("Assignments: none")];
    }

    let mut lines: Vec<String> = vec![String::from("Assignments:")];
    lines.extend(visible.values().map(|a| {
        format!(
            "  #{} {} .. {}  {} / {} ({})  {}  {}",
            a.id,
            a.start_date(),
            a.end_date(),
            a.driver_name,
            a.vehicle_plate,
            a.vehicle_category,
            a.shift_type,
            a.status_on(today),
        )
    }));
    lines
}

fn join_or_dash(items: impl Iterator<Item = String>) -> String {
    let joined: String = items.collect::<Vec<String>>().join(", ");
    if joined.is_empty() {
        String::from("-")
    } else {
        joined
    }
}
