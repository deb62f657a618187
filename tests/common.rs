#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use ovlogger::models::day_record::DayRecord;
use ovlogger::models::day_status::DayStatus;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ovl() -> Command {
    cargo_bin_cmd!("ovlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ovlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables, seeds schedule and ledger)
    ovl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // a couple of plain 8h work days (09:00-13:00 / 14:00-18:00)
    for date in ["2024-09-02", "2024-09-16"] {
        ovl()
            .args([
                "--db",
                db_path,
                "add",
                date,
                "--in",
                "09:00",
                "--lunch-start",
                "13:00",
                "--lunch-end",
                "14:00",
                "--out",
                "18:00",
            ])
            .assert()
            .success();
    }
}

// ---------------------------------------------------------------
// Builders for library-level tests of the accounting core
// ---------------------------------------------------------------

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("test time")
}

pub fn work_day(date: &str, start: &str, ls: &str, le: &str, end: &str) -> DayRecord {
    DayRecord::new(
        0,
        d(date),
        DayStatus::Work,
        Some(t(start)),
        Some(t(ls)),
        Some(t(le)),
        Some(t(end)),
        String::new(),
    )
}

pub fn work_day_no_lunch(date: &str, start: &str, end: &str) -> DayRecord {
    DayRecord::new(
        0,
        d(date),
        DayStatus::Work,
        Some(t(start)),
        None,
        None,
        Some(t(end)),
        String::new(),
    )
}

pub fn status_day(date: &str, status: DayStatus) -> DayRecord {
    DayRecord::new(0, d(date), status, None, None, None, None, String::new())
}
