use crate::core::calculator::overlap;
use crate::core::ledger;
use crate::core::recalc::recompute_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, load_events_by_date, load_schedule};
use crate::errors::{AppError, AppResult};
use crate::models::overtime_event::OvertimeEvent;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::time::span_minutes;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `recover` command: consume
/// overtime balance, either a time range or a full day.
pub struct RecoverLogic;

impl RecoverLogic {
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        range: Option<(NaiveTime, NaiveTime)>,
        full_day: bool,
        note: Option<String>,
    ) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let schedule = load_schedule(pool)?;

        // ------------------------------------------------
        // 1️⃣ Work out the consumed amount
        // ------------------------------------------------
        let (minutes, start, end) = if full_day {
            // A full day of recovery is normalized to the nominal daily
            // target, regardless of the configured template times: one
            // day off is always worth exactly one day of target.
            let target = schedule.daily_target_minutes_rounded();
            if target == 0 {
                return Err(AppError::Schedule(
                    "daily target is zero; configure the schedule first".into(),
                ));
            }
            (target, None, None)
        } else {
            let (s, e) = range.ok_or_else(|| {
                AppError::InvalidTime("specify --from and --to, or --full-day".into())
            })?;
            if e <= s {
                return Err(AppError::InvalidTime("--to must be later than --from".into()));
            }
            (span_minutes(s, e), Some(s), Some(e))
        };

        // ------------------------------------------------
        // 2️⃣ Refuse double-booking the same slot
        // ------------------------------------------------
        if let (Some(s), Some(e)) = (start, end) {
            let existing = load_events_by_date(pool, &date)?;
            let check = overlap::check(date, s, e, &existing);
            if check.blocked {
                return Err(AppError::Overlap(
                    check.reason.unwrap_or_else(|| "time conflict".into()),
                ));
            }
        }

        // ------------------------------------------------
        // 3️⃣ Record the consumption and update the ledger
        // ------------------------------------------------
        let event = OvertimeEvent::new(0, date, -minutes, start, end, note.unwrap_or_default());
        insert_event(&pool.conn, &event)?;

        let mut led = crate::db::queries::load_ledger(pool)?;
        ledger::add_event(&mut led, event);
        crate::db::queries::save_ledger_if_changed(&pool.conn, &led)?;

        ttlog(
            &pool.conn,
            "recover",
            &date_str,
            &format!("Recovery of {} minutes", minutes),
        )?;

        let (led, _) = recompute_ledger(pool)?;
        success(format!(
            "Recovery of {} on {} recorded (balance {}).",
            mins2readable(minutes, false, false),
            date_str,
            mins2readable(led.balance_minutes(), true, false),
        ));

        Ok(())
    }
}
