mod common;

use common::{d, status_day, t, work_day, work_day_no_lunch};
use ovlogger::core::calculator::daily::worked_minutes;
use ovlogger::models::day_record::DayRecord;
use ovlogger::models::day_status::DayStatus;

#[test]
fn non_work_status_always_zero() {
    // Fully populated time fields must not matter for non-work days.
    for status in [
        DayStatus::School,
        DayStatus::Vacation,
        DayStatus::Sick,
        DayStatus::Holiday,
        DayStatus::Off,
        DayStatus::Recovery,
    ] {
        let mut rec = work_day("2024-09-02", "09:00", "13:00", "14:00", "18:00");
        rec.status = status;
        assert_eq!(worked_minutes(&rec), 0, "status {:?}", status);
    }
}

#[test]
fn lunch_break_splits_the_day_in_two_halves() {
    // 09:00-13:00 (240) + 14:00-18:00 (240)
    let rec = work_day("2024-09-02", "09:00", "13:00", "14:00", "18:00");
    assert_eq!(worked_minutes(&rec), 480);
}

#[test]
fn no_lunch_is_a_single_span() {
    let rec = work_day_no_lunch("2024-09-02", "09:00", "17:00");
    assert_eq!(worked_minutes(&rec), 480);
}

#[test]
fn half_filled_lunch_falls_back_to_full_span() {
    let mut rec = work_day_no_lunch("2024-09-02", "09:00", "17:00");
    rec.lunch_start = Some(t("13:00"));
    // lunch_end missing: the break is ignored entirely
    assert_eq!(worked_minutes(&rec), 480);
}

#[test]
fn inverted_span_clamps_to_zero_not_negative() {
    let rec = work_day_no_lunch("2024-09-02", "17:00", "09:00");
    assert_eq!(worked_minutes(&rec), 0);
}

#[test]
fn each_lunch_half_clamps_independently() {
    // Morning half is inverted (lunch_start before start) and clamps to
    // 0; the afternoon half still counts its 240 minutes.
    let rec = work_day("2024-09-02", "09:00", "08:00", "14:00", "18:00");
    assert_eq!(worked_minutes(&rec), 240);
}

#[test]
fn lunch_requires_outer_boundaries() {
    let rec = DayRecord::new(
        0,
        d("2024-09-02"),
        DayStatus::Work,
        None,
        Some(t("13:00")),
        Some(t("14:00")),
        Some(t("18:00")),
        String::new(),
    );
    assert_eq!(worked_minutes(&rec), 0);
}

#[test]
fn work_day_without_times_is_zero() {
    let rec = status_day("2024-09-02", DayStatus::Work);
    assert_eq!(worked_minutes(&rec), 0);
}
