use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::day_status::DayStatus;
use crate::models::ledger::Ledger;
use crate::models::overtime_event::OvertimeEvent;
use crate::models::schedule::{DayTemplate, ScheduleConfig, ScheduleMode, WeekdaySlot};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(s.to_string())))
}

fn parse_db_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| conversion_err(AppError::InvalidTime(s.to_string())))
}

fn get_optional_time(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        Some(s) => Ok(Some(parse_db_time(&s)?)),
        None => Ok(None),
    }
}

fn time_to_db(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

// ---------------------------------------------------------------
// Day entries
// ---------------------------------------------------------------

pub fn map_entry_row(row: &Row) -> Result<DayRecord> {
    let date_str: String = row.get("date")?;
    let status_str: String = row.get("status")?;

    let status = DayStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_err(AppError::InvalidStatus(status_str.clone())))?;

    Ok(DayRecord {
        id: row.get("id")?,
        date: parse_db_date(&date_str)?,
        status,
        start: get_optional_time(row, "start")?,
        lunch_start: get_optional_time(row, "lunch_start")?,
        lunch_end: get_optional_time(row, "lunch_end")?,
        end: get_optional_time(row, "end")?,
        notes: row.get("notes")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn load_entry_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Option<DayRecord>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM entries WHERE date = ?1")?;

    let rec = stmt
        .query_row([date.format("%Y-%m-%d").to_string()], map_entry_row)
        .optional()?;
    Ok(rec)
}

pub fn load_all_entries(pool: &mut DbPool) -> AppResult<Vec<DayRecord>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM entries ORDER BY date ASC")?;

    let rows = stmt.query_map([], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_in_range(
    pool: &mut DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<DayRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        [
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Upsert by date: a new save for an existing date replaces the prior
/// record (no history kept) and refreshes `updated_at`.
pub fn upsert_entry(conn: &Connection, rec: &DayRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (date, status, start, lunch_start, lunch_end, end, notes, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(date) DO UPDATE SET
             status      = excluded.status,
             start       = excluded.start,
             lunch_start = excluded.lunch_start,
             lunch_end   = excluded.lunch_end,
             end         = excluded.end,
             notes       = excluded.notes,
             updated_at  = excluded.updated_at",
        params![
            rec.date.format("%Y-%m-%d").to_string(),
            rec.status.to_db_str(),
            time_to_db(rec.start),
            time_to_db(rec.lunch_start),
            time_to_db(rec.lunch_end),
            time_to_db(rec.end),
            rec.notes,
            rec.updated_at,
        ],
    )?;
    Ok(())
}

pub fn delete_entry_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<usize> {
    let n = pool.conn.execute(
        "DELETE FROM entries WHERE date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}

pub fn delete_entry_by_id(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let n = pool.conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(n)
}

// ---------------------------------------------------------------
// Overtime events
// ---------------------------------------------------------------

pub fn map_event_row(row: &Row) -> Result<OvertimeEvent> {
    let date_str: String = row.get("date")?;

    Ok(OvertimeEvent {
        id: row.get("id")?,
        date: parse_db_date(&date_str)?,
        minutes: row.get("minutes")?,
        start: get_optional_time(row, "start")?,
        end: get_optional_time(row, "end")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_events_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<OvertimeEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM ot_events
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([date.format("%Y-%m-%d").to_string()], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_events(pool: &mut DbPool) -> AppResult<Vec<OvertimeEvent>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM ot_events ORDER BY date ASC, id ASC")?;

    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(conn: &Connection, ev: &OvertimeEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO ot_events (date, minutes, start, end, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.date.format("%Y-%m-%d").to_string(),
            ev.minutes,
            time_to_db(ev.start),
            time_to_db(ev.end),
            ev.note,
            ev.created_at,
        ],
    )?;
    Ok(())
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM ot_events WHERE id = ?1", [id])?;
    Ok(())
}

// ---------------------------------------------------------------
// Schedule (singleton row)
// ---------------------------------------------------------------

pub fn load_schedule(pool: &mut DbPool) -> AppResult<ScheduleConfig> {
    let mut stmt = pool.conn.prepare("SELECT * FROM schedule WHERE id = 1")?;

    let cfg = stmt
        .query_row([], |row| {
            let mode_str: String = row.get("mode")?;
            let mode = ScheduleMode::from_db_str(&mode_str)
                .ok_or_else(|| conversion_err(AppError::Config(mode_str.clone())))?;

            let per_day_json: String = row.get("per_day")?;
            let per_day: [WeekdaySlot; 7] = serde_json::from_str(&per_day_json)
                .map_err(|e| conversion_err(AppError::Config(e.to_string())))?;

            Ok(ScheduleConfig {
                weekly_target_hours: row.get("weekly_target_hours")?,
                work_days_per_week: row.get("work_days_per_week")?,
                mode,
                uniform: DayTemplate {
                    start: get_optional_time(row, "start")?,
                    lunch_start: get_optional_time(row, "lunch_start")?,
                    lunch_end: get_optional_time(row, "lunch_end")?,
                    end: get_optional_time(row, "end")?,
                },
                per_day,
            })
        })
        .optional()?;

    cfg.ok_or_else(|| AppError::Config("no schedule configured (run `init`)".to_string()))
}

pub fn save_schedule(conn: &Connection, cfg: &ScheduleConfig) -> AppResult<()> {
    let per_day_json =
        serde_json::to_string(&cfg.per_day).map_err(|e| AppError::Config(e.to_string()))?;

    conn.execute(
        "INSERT INTO schedule
             (id, weekly_target_hours, work_days_per_week, mode,
              start, lunch_start, lunch_end, end, per_day)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(id) DO UPDATE SET
             weekly_target_hours = excluded.weekly_target_hours,
             work_days_per_week  = excluded.work_days_per_week,
             mode                = excluded.mode,
             start               = excluded.start,
             lunch_start         = excluded.lunch_start,
             lunch_end           = excluded.lunch_end,
             end                 = excluded.end,
             per_day             = excluded.per_day",
        params![
            cfg.weekly_target_hours,
            cfg.work_days_per_week,
            cfg.mode.to_db_str(),
            time_to_db(cfg.uniform.start),
            time_to_db(cfg.uniform.lunch_start),
            time_to_db(cfg.uniform.lunch_end),
            time_to_db(cfg.uniform.end),
            per_day_json,
        ],
    )?;
    Ok(())
}

// ---------------------------------------------------------------
// Ledger (singleton row + event list)
// ---------------------------------------------------------------

pub fn load_ledger(pool: &mut DbPool) -> AppResult<Ledger> {
    let (earned, used): (i64, i64) = pool.conn.query_row(
        "SELECT earned_minutes, used_minutes FROM ledger WHERE id = 1",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let events = load_all_events(pool)?;
    Ok(Ledger::new(earned, used, events))
}

/// Persist the ledger row. Returns true when a write actually happened:
/// unchanged earned/used values are skipped to avoid redundant writes.
pub fn save_ledger_if_changed(conn: &Connection, ledger: &Ledger) -> AppResult<bool> {
    let (earned, used): (i64, i64) = conn.query_row(
        "SELECT earned_minutes, used_minutes FROM ledger WHERE id = 1",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    if earned == ledger.earned_minutes && used == ledger.used_minutes {
        return Ok(false);
    }

    conn.execute(
        "UPDATE ledger SET earned_minutes = ?1, used_minutes = ?2 WHERE id = 1",
        params![ledger.earned_minutes, ledger.used_minutes],
    )?;
    Ok(true)
}

// ---------------------------------------------------------------
// Log
// ---------------------------------------------------------------

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
