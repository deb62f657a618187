mod common;

use common::{d, status_day, work_day, work_day_no_lunch};
use ovlogger::core::calculator::period::{Window, absence_adjusted_target, aggregate, window_bounds};
use ovlogger::models::day_status::DayStatus;
use ovlogger::models::schedule::ScheduleConfig;

#[test]
fn window_bounds_cover_the_calendar_unit() {
    let anchor = d("2024-02-14"); // a Wednesday in a leap February

    assert_eq!(window_bounds(anchor, Window::Day), (anchor, anchor));
    assert_eq!(
        window_bounds(anchor, Window::Week),
        (d("2024-02-12"), d("2024-02-18"))
    );
    assert_eq!(
        window_bounds(anchor, Window::Month),
        (d("2024-02-01"), d("2024-02-29"))
    );
    assert_eq!(
        window_bounds(anchor, Window::Year),
        (d("2024-01-01"), d("2024-12-31"))
    );
}

#[test]
fn week_window_is_monday_keyed() {
    // A Sunday anchors to the Monday six days earlier.
    let (from, to) = window_bounds(d("2024-03-10"), Window::Week);
    assert_eq!(from, d("2024-03-04"));
    assert_eq!(to, d("2024-03-10"));
}

#[test]
fn aggregate_scales_target_to_logged_work_days() {
    // Default schedule: 40h/5d, 480'/day. Two work days and a vacation
    // day inside the month; the vacation contributes no minutes and no
    // target slot.
    let entries = vec![
        work_day("2024-09-02", "09:00", "13:00", "14:00", "18:00"),
        work_day_no_lunch("2024-09-03", "08:00", "17:00"),
        status_day("2024-09-04", DayStatus::Vacation),
    ];
    let stats = aggregate(
        &entries,
        &ScheduleConfig::default(),
        d("2024-09-15"),
        Window::Month,
    );

    assert_eq!(stats.logged_work_days, 2);
    assert_eq!(stats.worked_minutes, 480 + 540);
    assert_eq!(stats.adjusted_target_minutes, 960);
    assert_eq!(stats.delta_minutes, 60);
}

#[test]
fn aggregate_ignores_entries_outside_the_window() {
    let entries = vec![
        work_day("2024-09-02", "09:00", "13:00", "14:00", "18:00"),
        work_day("2024-10-01", "09:00", "13:00", "14:00", "18:00"),
    ];
    let stats = aggregate(
        &entries,
        &ScheduleConfig::default(),
        d("2024-09-02"),
        Window::Week,
    );

    assert_eq!(stats.logged_work_days, 1);
    assert_eq!(stats.worked_minutes, 480);
}

#[test]
fn empty_window_is_all_zero() {
    let stats = aggregate(
        &[],
        &ScheduleConfig::default(),
        d("2024-09-02"),
        Window::Year,
    );
    assert_eq!(stats.worked_minutes, 0);
    assert_eq!(stats.adjusted_target_minutes, 0);
    assert_eq!(stats.delta_minutes, 0);
}

#[test]
fn legacy_target_subtracts_absences_per_week() {
    // A four-week month with one sick day: 4 × 2400 − 480.
    let entries = vec![status_day("2024-09-11", DayStatus::Sick)];
    let target = absence_adjusted_target(
        &entries,
        &ScheduleConfig::default(),
        d("2024-09-15"),
        Window::Month,
    );

    // September 2024 spans weeks starting 08-26, 09-02, ..., 09-30:
    // six ISO weeks intersect the month window.
    assert_eq!(target, 6 * 2400 - 480);
}

#[test]
fn legacy_target_floors_each_week_at_zero() {
    // Seven absences in one week cannot push that week negative.
    let entries: Vec<_> = (2..=8)
        .map(|day| status_day(&format!("2024-09-{:02}", day), DayStatus::Vacation))
        .collect();
    let target = absence_adjusted_target(
        &entries,
        &ScheduleConfig::default(),
        d("2024-09-04"),
        Window::Week,
    );

    assert_eq!(target, 0);
}

#[test]
fn zero_work_days_makes_every_target_zero() {
    let schedule = ScheduleConfig {
        work_days_per_week: 0,
        ..ScheduleConfig::default()
    };
    let entries = vec![work_day("2024-09-02", "09:00", "13:00", "14:00", "18:00")];

    let stats = aggregate(&entries, &schedule, d("2024-09-02"), Window::Week);
    assert_eq!(stats.adjusted_target_minutes, 0);
    assert_eq!(stats.delta_minutes, 480);

    let legacy = absence_adjusted_target(&entries, &schedule, d("2024-09-02"), Window::Week);
    assert_eq!(legacy, 0);
}
