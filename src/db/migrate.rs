//! Versioned schema migrations. The whole schema lives here; `init_db`
//! and `db --migrate` both funnel through `run_pending_migrations`.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::ScheduleConfig;
use crate::ui::messages::warning;
use rusqlite::{Connection, params};

/// Highest schema version this binary knows about.
const LATEST_VERSION: i64 = 1;

fn ensure_version_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn current_version(conn: &Connection) -> AppResult<i64> {
    let v: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .unwrap_or(None);
    Ok(v.unwrap_or(0))
}

fn mark_version(conn: &Connection, version: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schema_version (version, applied_at) VALUES (?1, ?2)",
        params![version, chrono::Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// v1: base schema — entries, ot_events, schedule, ledger, log.
fn migrate_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL UNIQUE,
            status      TEXT NOT NULL DEFAULT 'work'
                        CHECK(status IN ('work','school','vacation','sick','holiday','off','recovery')),
            start       TEXT,
            lunch_start TEXT,
            lunch_end   TEXT,
            end         TEXT,
            notes       TEXT NOT NULL DEFAULT '',
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);

        CREATE TABLE IF NOT EXISTS ot_events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            minutes    INTEGER NOT NULL,
            start      TEXT,
            end        TEXT,
            note       TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_ot_events_date ON ot_events(date);

        CREATE TABLE IF NOT EXISTS schedule (
            id                  INTEGER PRIMARY KEY CHECK(id = 1),
            weekly_target_hours REAL NOT NULL,
            work_days_per_week  INTEGER NOT NULL,
            mode                TEXT NOT NULL CHECK(mode IN ('uniform','per-day')),
            start               TEXT,
            lunch_start         TEXT,
            lunch_end           TEXT,
            end                 TEXT,
            per_day             TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS ledger (
            id             INTEGER PRIMARY KEY CHECK(id = 1),
            earned_minutes INTEGER NOT NULL DEFAULT 0,
            used_minutes   INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;

    // Seed the singleton rows so later code can always UPDATE them.
    conn.execute(
        "INSERT OR IGNORE INTO ledger (id, earned_minutes, used_minutes) VALUES (1, 0, 0)",
        [],
    )?;
    seed_default_schedule(conn)?;

    Ok(())
}

/// Insert the default schedule (40h over 5 uniform days) if missing.
fn seed_default_schedule(conn: &Connection) -> AppResult<()> {
    let exists: i64 = conn.query_row("SELECT COUNT(*) FROM schedule", [], |row| row.get(0))?;
    if exists > 0 {
        return Ok(());
    }

    let cfg = ScheduleConfig::default();
    crate::db::queries::save_schedule(conn, &cfg)
}

/// Apply every migration newer than the stored schema version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_version_table(conn)?;
    let mut version = current_version(conn)?;

    if version > LATEST_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than this binary supports ({})",
            version, LATEST_VERSION
        )));
    }

    while version < LATEST_VERSION {
        let next = version + 1;
        warning(format!("Applying database migration v{}...", next));

        match next {
            1 => migrate_v1(conn)?,
            _ => {
                return Err(AppError::Migration(format!(
                    "no migration registered for version {}",
                    next
                )));
            }
        }

        mark_version(conn, next)?;
        version = next;
    }

    Ok(())
}

/// `PRAGMA integrity_check` wrapper for `db --check`.
pub fn check_integrity(conn: &Connection) -> AppResult<String> {
    let out: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(out)
}

/// `VACUUM` wrapper for `db --vacuum`.
pub fn vacuum(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("VACUUM")?;
    Ok(())
}
