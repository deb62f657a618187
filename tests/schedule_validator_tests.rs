mod common;

use common::t;
use ovlogger::core::calculator::schedule::validate;
use ovlogger::models::schedule::{DayTemplate, ScheduleConfig, ScheduleMode, WeekdaySlot};

fn uniform_config(hours: f64, days: u32, template: DayTemplate) -> ScheduleConfig {
    ScheduleConfig {
        weekly_target_hours: hours,
        work_days_per_week: days,
        mode: ScheduleMode::Uniform,
        uniform: template,
        per_day: [WeekdaySlot::default(); 7],
    }
}

fn eight_hour_template() -> DayTemplate {
    // 09:00-12:30 (3h30) + 13:30-18:00 (4h30) = 8h
    DayTemplate::new(
        Some(t("09:00")),
        Some(t("12:30")),
        Some(t("13:30")),
        Some(t("18:00")),
    )
}

#[test]
fn exact_match_is_accepted() {
    let cfg = uniform_config(40.0, 5, eight_hour_template());
    let check = validate(&cfg);

    assert!(check.valid);
    assert_eq!(check.total_minutes, 2400);
    assert_eq!(check.target_minutes, 2400);
    assert!(check.error.is_none());
}

#[test]
fn mismatch_is_rejected_with_totals() {
    // Same 8h/day schedule against a 35h target: no tolerance.
    let cfg = uniform_config(35.0, 5, eight_hour_template());
    let check = validate(&cfg);

    assert!(!check.valid);
    assert_eq!(check.total_minutes, 2400);
    assert_eq!(check.target_minutes, 2100);
    assert!(check.error.is_some());
}

#[test]
fn default_schedule_is_valid() {
    let check = validate(&ScheduleConfig::default());
    assert!(check.valid, "the seeded default must always pass");
}

#[test]
fn per_day_mode_sums_enabled_slots_only() {
    let mut cfg = uniform_config(16.0, 2, DayTemplate::default());
    cfg.mode = ScheduleMode::PerDay;

    // Monday and Wednesday enabled, 8h each, no lunch configured.
    let eight_no_lunch = DayTemplate::new(Some(t("08:00")), None, None, Some(t("16:00")));
    cfg.per_day[0] = WeekdaySlot {
        enabled: true,
        template: eight_no_lunch,
    };
    cfg.per_day[2] = WeekdaySlot {
        enabled: true,
        template: eight_no_lunch,
    };
    // A disabled slot must not count, whatever its times say.
    cfg.per_day[5] = WeekdaySlot {
        enabled: false,
        template: eight_no_lunch,
    };

    let check = validate(&cfg);
    assert!(check.valid);
    assert_eq!(check.total_minutes, 960);
}

#[test]
fn fractional_hours_validate_in_integer_minutes() {
    // 37.5h over 5 days: 09:00-12:30 (210) + 13:15-17:15 (240) = 450/day.
    let template = DayTemplate::new(
        Some(t("09:00")),
        Some(t("12:30")),
        Some(t("13:15")),
        Some(t("17:15")),
    );
    let check = validate(&uniform_config(37.5, 5, template));

    assert!(check.valid);
    assert_eq!(check.target_minutes, 2250);
}
