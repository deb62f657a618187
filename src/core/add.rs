use crate::core::calculator::{daily, overlap};
use crate::core::recalc::recompute_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entry_by_date, load_events_by_date, upsert_entry};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::day_status::DayStatus;
use crate::ui::messages::{success, warning};
use crate::utils::mins2readable;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        status: DayStatus,
        start: Option<NaiveTime>,
        lunch_start: Option<NaiveTime>,
        lunch_end: Option<NaiveTime>,
        end: Option<NaiveTime>,
        notes: Option<String>,
    ) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        // ------------------------------------------------
        // 1️⃣ Sanity checks on the time fields
        // ------------------------------------------------
        if lunch_start.is_some() != lunch_end.is_some() {
            warning("Half-filled lunch break: it will not count towards worked time.");
        }

        if let (Some(s), Some(e)) = (start, end)
            && e <= s
        {
            return Err(AppError::InvalidTime(
                "OUT must be later than IN (cross-midnight spans are not supported).".into(),
            ));
        }

        // ------------------------------------------------
        // 2️⃣ Refuse work hours colliding with recovery time
        // ------------------------------------------------
        if status.is_work()
            && let (Some(s), Some(e)) = (start, end)
        {
            let events = load_events_by_date(pool, &date)?;
            let check = overlap::check(date, s, e, &events);
            if check.blocked {
                return Err(AppError::Overlap(
                    check.reason.unwrap_or_else(|| "time conflict".into()),
                ));
            }
        }

        // ------------------------------------------------
        // 3️⃣ Upsert by date (replaces the prior record)
        // ------------------------------------------------
        let existing = load_entry_by_date(pool, &date)?;
        let id = existing.as_ref().map(|r| r.id).unwrap_or(0);
        let notes = notes
            .or_else(|| existing.map(|r| r.notes))
            .unwrap_or_default();

        let rec = DayRecord::new(id, date, status, start, lunch_start, lunch_end, end, notes);
        upsert_entry(&pool.conn, &rec)?;

        ttlog(
            &pool.conn,
            "add",
            &date_str,
            &format!("Saved {} entry", status.to_db_str()),
        )?;

        // ------------------------------------------------
        // 4️⃣ Synchronous ledger recomputation
        // ------------------------------------------------
        let (ledger, _) = recompute_ledger(pool)?;

        let worked = daily::worked_minutes(&rec);
        success(format!(
            "Saved {} on {} ({} worked, balance {}).",
            status.to_db_str(),
            date_str,
            mins2readable(worked, false, false),
            mins2readable(ledger.balance_minutes(), true, false),
        ));

        Ok(())
    }
}
