mod common;

use common::{init_db_with_data, ovl, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn backup_copies_the_database_file() {
    let db = setup_test_db("backup_copy");
    let out = temp_out("backup_copy", "sqlite");
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    let copy = fs::metadata(&out).expect("backup exists").len();
    assert!(copy > 0);

    // the copy is a queryable database with the same data
    ovl()
        .args(["--db", &out, "list", "--period", "2024-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"));
}

#[test]
fn compressed_backup_replaces_the_plain_copy() {
    let db = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");
    let zip = out.replace(".sqlite", ".zip");
    fs::remove_file(&zip).ok();
    init_db_with_data(&db);

    ovl()
        .args(["--db", &db, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compressed:"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());
}
