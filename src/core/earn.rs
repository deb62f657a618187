use crate::core::ledger;
use crate::core::recalc::recompute_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, load_ledger, save_ledger_if_changed};
use crate::errors::{AppError, AppResult};
use crate::models::overtime_event::OvertimeEvent;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use chrono::NaiveDate;

/// High-level business logic for the `earn` command: record a manual
/// positive credit. Under the signed convention used throughout, a
/// positive event never touches `used_minutes` and earned minutes stay
/// owned by the weekly engine, so this is bookkeeping of record only.
pub struct EarnLogic;

impl EarnLogic {
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        minutes: i64,
        note: Option<String>,
    ) -> AppResult<()> {
        if minutes <= 0 {
            return Err(AppError::InvalidMinutes(format!(
                "{} (manual credits must be positive; use `recover` to consume)",
                minutes
            )));
        }

        let date_str = date.format("%Y-%m-%d").to_string();

        let event = OvertimeEvent::new(0, date, minutes, None, None, note.unwrap_or_default());
        insert_event(&pool.conn, &event)?;

        let mut led = load_ledger(pool)?;
        ledger::add_event(&mut led, event);
        save_ledger_if_changed(&pool.conn, &led)?;

        ttlog(
            &pool.conn,
            "earn",
            &date_str,
            &format!("Manual credit of {} minutes", minutes),
        )?;

        let (led, _) = recompute_ledger(pool)?;
        success(format!(
            "Manual credit of {} on {} recorded (balance {}).",
            mins2readable(minutes, false, false),
            date_str,
            mins2readable(led.balance_minutes(), true, false),
        ));

        Ok(())
    }
}
