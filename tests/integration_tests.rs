mod common;

use common::{init_db_with_data, ovl, setup_test_db};
use ovlogger::db::pool::DbPool;
use predicates::prelude::*;

#[test]
fn init_creates_a_usable_database() {
    let db = setup_test_db("init_creates");

    ovl()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    // the seeded schedule and ledger are immediately queryable
    ovl()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overtime bank"));
}

#[test]
fn db_info_reports_counts_and_ledger() {
    let db = setup_test_db("db_info");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day entries:"))
        .stdout(predicate::str::contains("2024-09-02"))
        .stdout(predicate::str::contains("2024-09-16"));

    ovl()
        .args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));
}

#[test]
fn add_reports_worked_minutes() {
    let db = setup_test_db("add_reports");
    init_db_with_data(&db);

    ovl()
        .args([
            "--db", &db, "add", "2024-09-03", "--in", "08:30", "--out", "17:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved work on 2024-09-03"))
        .stdout(predicate::str::contains("08h 30m worked"));
}

#[test]
fn add_is_an_upsert_by_date() {
    let db = setup_test_db("add_upsert");
    init_db_with_data(&db);

    // re-log the same date with shorter hours and no lunch
    ovl()
        .args([
            "--db", &db, "add", "2024-09-02", "--in", "08:00", "--out", "12:00",
        ])
        .assert()
        .success();

    ovl()
        .args(["--db", &db, "list", "--period", "2024-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("04:00"))
        .stdout(predicate::str::contains("1 entries"));
}

#[test]
fn add_rejects_an_inverted_span() {
    let db = setup_test_db("add_inverted");
    init_db_with_data(&db);

    ovl()
        .args([
            "--db", &db, "add", "2024-09-03", "--in", "17:00", "--out", "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OUT must be later than IN"));
}

#[test]
fn add_records_absence_statuses() {
    let db = setup_test_db("add_absence");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "add", "2024-09-04", "--status", "sick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved sick on 2024-09-04"))
        .stdout(predicate::str::contains("00h 00m worked"));

    ovl()
        .args(["--db", &db, "list", "--period", "2024-09", "--status", "sick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-04"))
        .stdout(predicate::str::contains("1 entries"));
}

#[test]
fn list_totals_the_period() {
    let db = setup_test_db("list_totals");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "list", "--period", "2024-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-02"))
        .stdout(predicate::str::contains("2024-09-16"))
        // configured separator line (default '-') above the totals
        .stdout(predicate::str::contains("----------"))
        .stdout(predicate::str::contains("2 entries, 16h 00m worked in total."));
}

#[test]
fn status_prints_bank_and_period_table() {
    let db = setup_test_db("status_table");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "status", "--date", "2024-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overtime bank"))
        .stdout(predicate::str::contains("PERIOD"))
        .stdout(predicate::str::contains("week"))
        .stdout(predicate::str::contains("year"));
}

#[test]
fn status_recomputes_a_stale_ledger_only_once() {
    let db = setup_test_db("status_stale");
    init_db_with_data(&db);

    // corrupt the stored row behind the CLI's back
    let pool = DbPool::new(&db).expect("open test db");
    pool.conn
        .execute("UPDATE ledger SET earned_minutes = 9999 WHERE id = 1", [])
        .expect("stale ledger");
    drop(pool);

    ovl()
        .args(["--db", &db, "status", "--date", "2024-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger was out of date"));

    // the write already happened: the second run recomputes to the same
    // values and skips the persistence write
    ovl()
        .args(["--db", &db, "status", "--date", "2024-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger was out of date").not());
}

#[test]
fn status_legacy_flag_adds_cumulative_targets() {
    let db = setup_test_db("status_legacy");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "status", "--date", "2024-09-02", "--legacy-target"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Absence-adjusted cumulative target"));
}

#[test]
fn schedule_rejects_a_mismatched_target() {
    let db = setup_test_db("schedule_reject");
    init_db_with_data(&db);

    // default template is 8h/day: 35h over 5 days cannot match
    ovl()
        .args(["--db", &db, "schedule", "--hours", "35"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schedule rejected"));

    // the stored schedule is untouched
    ovl()
        .args(["--db", &db, "schedule", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly target: 40"));
}

#[test]
fn schedule_accepts_a_consistent_update() {
    let db = setup_test_db("schedule_accept");
    init_db_with_data(&db);

    // 7h/day template to go with the 35h target
    ovl()
        .args([
            "--db",
            &db,
            "schedule",
            "--hours",
            "35",
            "--in",
            "09:00",
            "--lunch-start",
            "13:00",
            "--lunch-end",
            "14:00",
            "--out",
            "17:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule saved (35h 00m per week over 5 days)"));

    ovl()
        .args(["--db", &db, "schedule", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly target: 35"))
        .stdout(predicate::str::contains("07h 00m per day"));
}

#[test]
fn recover_consumes_balance_and_lists_as_event() {
    let db = setup_test_db("recover_range");
    init_db_with_data(&db);

    ovl()
        .args([
            "--db", &db, "recover", "2024-09-03", "--from", "10:00", "--to", "12:00", "--note",
            "dentist",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recovery of 02h 00m on 2024-09-03"));

    ovl()
        .args(["--db", &db, "events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-120"))
        .stdout(predicate::str::contains("10:00"))
        .stdout(predicate::str::contains("dentist"))
        .stdout(predicate::str::contains("used 02h 00m"));
}

#[test]
fn recover_refuses_overlapping_recoveries() {
    let db = setup_test_db("recover_overlap");
    init_db_with_data(&db);

    ovl()
        .args([
            "--db", &db, "recover", "2024-09-03", "--from", "10:00", "--to", "12:00",
        ])
        .assert()
        .success();

    ovl()
        .args([
            "--db", &db, "recover", "2024-09-03", "--from", "11:00", "--to", "13:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Time conflict"))
        .stderr(predicate::str::contains("overlaps recorded recovery"));

    // touching endpoints are fine
    ovl()
        .args([
            "--db", &db, "recover", "2024-09-03", "--from", "12:00", "--to", "13:00",
        ])
        .assert()
        .success();
}

#[test]
fn add_refuses_work_hours_over_a_recovery() {
    let db = setup_test_db("add_over_recovery");
    init_db_with_data(&db);

    ovl()
        .args([
            "--db", &db, "recover", "2024-09-03", "--from", "10:00", "--to", "12:00",
        ])
        .assert()
        .success();

    ovl()
        .args([
            "--db", &db, "add", "2024-09-03", "--in", "09:00", "--out", "18:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Time conflict"));

    // working after the recovered slot is allowed
    ovl()
        .args([
            "--db", &db, "add", "2024-09-03", "--in", "12:00", "--out", "18:00",
        ])
        .assert()
        .success();
}

#[test]
fn full_day_recovery_consumes_one_daily_target() {
    let db = setup_test_db("recover_full_day");
    init_db_with_data(&db);

    // default schedule: 40h / 5 days, one day is 8h
    ovl()
        .args(["--db", &db, "recover", "2024-09-04", "--full-day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recovery of 08h 00m on 2024-09-04"));

    ovl()
        .args(["--db", &db, "events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-480"))
        .stdout(predicate::str::contains("--:--"));
}

#[test]
fn earn_records_a_positive_credit_only() {
    let db = setup_test_db("earn_credit");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "earn", "2024-09-03", "60", "--note", "audit fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual credit of 01h 00m on 2024-09-03"));

    ovl()
        .args(["--db", &db, "earn", "2024-09-03", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid minutes value"));

    ovl()
        .args(["--db", &db, "earn", "2024-09-03", "--", "-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn removing_an_event_restores_the_balance() {
    let db = setup_test_db("events_remove");
    init_db_with_data(&db);

    ovl()
        .args([
            "--db", &db, "recover", "2024-09-03", "--from", "10:00", "--to", "12:00",
        ])
        .assert()
        .success();

    ovl()
        .args(["--db", &db, "events", "--remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed event 1"));

    ovl()
        .args(["--db", &db, "events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overtime events recorded."));

    ovl()
        .args(["--db", &db, "events", "--remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No overtime event with id 1"));
}

#[test]
fn del_removes_an_entry_once() {
    let db = setup_test_db("del_entry");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "del", "2024-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry for 2024-09-02."));

    ovl()
        .args(["--db", &db, "del", "2024-09-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry found for date 2024-09-02"));
}

#[test]
fn log_records_every_mutation() {
    let db = setup_test_db("log_trail");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "del", "2024-09-16"])
        .assert()
        .success();

    ovl()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"))
        .stdout(predicate::str::contains("Saved work entry"));
}
