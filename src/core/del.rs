use crate::core::recalc::recompute_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry_by_date, delete_entry_by_id};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `del` command.
pub struct DelLogic;

impl DelLogic {
    pub fn by_date(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let n = delete_entry_by_date(pool, &date)?;
        if n == 0 {
            return Err(AppError::NoEntryForDate(date_str));
        }

        ttlog(&pool.conn, "del", &date_str, "Deleted entry")?;
        recompute_ledger(pool)?;

        success(format!("Deleted entry for {}.", date_str));
        Ok(())
    }

    pub fn by_id(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let n = delete_entry_by_id(pool, id)?;
        if n == 0 {
            return Err(AppError::NoEntryForDate(format!("id {}", id)));
        }

        ttlog(&pool.conn, "del", &id.to_string(), "Deleted entry by id")?;
        recompute_ledger(pool)?;

        success(format!("Deleted entry {}.", id));
        Ok(())
    }
}
