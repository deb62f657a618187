//! Read-only roll-ups over day / week / month / year windows, used by
//! `status` and dashboard-style reporting. Derives everything from the
//! entry list plus the schedule; never mutates state.

use crate::core::calculator::daily;
use crate::models::day_record::DayRecord;
use crate::models::schedule::ScheduleConfig;
use crate::utils::date::{
    first_day_of_month, first_day_of_year, last_day_of_month, last_day_of_year, monday_of,
};
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Day,
    Week,
    Month,
    Year,
}

/// Inclusive calendar bounds of the window anchored at `anchor`.
/// Weeks run Monday..Sunday (ISO).
pub fn window_bounds(anchor: NaiveDate, window: Window) -> (NaiveDate, NaiveDate) {
    match window {
        Window::Day => (anchor, anchor),
        Window::Week => {
            let monday = monday_of(anchor);
            (monday, monday + Duration::days(6))
        }
        Window::Month => (first_day_of_month(anchor), last_day_of_month(anchor)),
        Window::Year => (first_day_of_year(anchor), last_day_of_year(anchor)),
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodStats {
    pub worked_minutes: i64,
    pub logged_work_days: i64,
    pub adjusted_target_minutes: i64,
    pub delta_minutes: i64,
}

/// Stats for the window containing `anchor`.
///
/// The target is scaled to the days actually logged as work
/// (`logged_work_days × daily_target`), mirroring the in-progress-week
/// rule of the engine rather than the completed-week rule: the delta
/// always reads "how am I doing on the days I've actually logged",
/// whether or not the period is finished.
pub fn aggregate(
    entries: &[DayRecord],
    schedule: &ScheduleConfig,
    anchor: NaiveDate,
    window: Window,
) -> PeriodStats {
    let (from, to) = window_bounds(anchor, window);
    let daily_target = schedule.daily_target_minutes();

    let mut worked = 0i64;
    let mut work_days = 0i64;
    for rec in entries.iter().filter(|r| r.date >= from && r.date <= to) {
        worked += daily::worked_minutes(rec);
        if rec.status.is_work() {
            work_days += 1;
        }
    }

    let adjusted_target = (work_days as f64 * daily_target).round() as i64;

    PeriodStats {
        worked_minutes: worked,
        logged_work_days: work_days,
        adjusted_target_minutes: adjusted_target,
        delta_minutes: worked - adjusted_target,
    }
}

/// Legacy absence-adjusted cumulative target: walk every ISO week
/// intersecting the window and sum
/// `max(0, weekly_target − absence_days_in_week × daily_target)`.
/// Absence days are counted over the whole week, including days outside
/// the window bounds.
pub fn absence_adjusted_target(
    entries: &[DayRecord],
    schedule: &ScheduleConfig,
    anchor: NaiveDate,
    window: Window,
) -> i64 {
    let (from, to) = window_bounds(anchor, window);
    let daily_target = schedule.daily_target_minutes();
    // Same zero-work-days guard as the engine: undefined daily target
    // yields a cumulative target of 0.
    let weekly_target = if schedule.work_days_per_week == 0 {
        0
    } else {
        schedule.weekly_target_minutes()
    };

    let mut total = 0i64;
    let mut week = monday_of(from);
    while week <= to {
        let week_end = week + Duration::days(6);
        let absences = entries
            .iter()
            .filter(|r| r.date >= week && r.date <= week_end && r.status.is_absence())
            .count() as i64;

        total += (weekly_target as f64 - absences as f64 * daily_target)
            .max(0.0)
            .round() as i64;

        week += Duration::days(7);
    }

    total
}
