mod common;

use common::{d, t};
use ovlogger::core::calculator::overlap;
use ovlogger::models::overtime_event::OvertimeEvent;

fn recovery(date: &str, from: &str, to: &str) -> OvertimeEvent {
    OvertimeEvent::new(
        1,
        d(date),
        -120,
        Some(t(from)),
        Some(t(to)),
        String::new(),
    )
}

#[test]
fn strict_overlap_blocks() {
    let existing = vec![recovery("2024-09-02", "11:00", "13:00")];
    let check = overlap::check(d("2024-09-02"), t("10:00"), t("12:00"), &existing);

    assert!(check.blocked);
    let reason = check.reason.expect("blocked check carries a reason");
    assert!(reason.contains("11:00"));
    assert!(reason.contains("13:00"));
}

#[test]
fn overlap_check_is_symmetric() {
    let existing = vec![recovery("2024-09-02", "10:00", "12:00")];
    let check = overlap::check(d("2024-09-02"), t("11:00"), t("13:00"), &existing);
    assert!(check.blocked);
}

#[test]
fn touching_endpoints_do_not_conflict() {
    let existing = vec![recovery("2024-09-02", "10:00", "11:00")];

    let before = overlap::check(d("2024-09-02"), t("09:00"), t("10:00"), &existing);
    assert!(!before.blocked);
    assert!(before.reason.is_none());

    let after = overlap::check(d("2024-09-02"), t("11:00"), t("12:00"), &existing);
    assert!(!after.blocked);
}

#[test]
fn other_dates_are_ignored() {
    let existing = vec![recovery("2024-09-03", "10:00", "12:00")];
    let check = overlap::check(d("2024-09-02"), t("10:00"), t("12:00"), &existing);
    assert!(!check.blocked);
}

#[test]
fn events_without_a_range_are_ignored() {
    // Full-day recoveries carry no start/end and never collide.
    let existing = vec![OvertimeEvent::new(
        1,
        d("2024-09-02"),
        -480,
        None,
        None,
        String::new(),
    )];
    let check = overlap::check(d("2024-09-02"), t("09:00"), t("18:00"), &existing);
    assert!(!check.blocked);
}

#[test]
fn first_conflict_wins() {
    let existing = vec![
        recovery("2024-09-02", "09:30", "10:30"),
        recovery("2024-09-02", "11:00", "12:00"),
    ];
    let check = overlap::check(d("2024-09-02"), t("09:00"), t("12:00"), &existing);
    assert!(check.blocked);
    assert!(check.reason.expect("reason").contains("09:30"));
}
