use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_status::DayStatus;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        status,
        now,
    } = cmd
    {
        let status_filter = match status {
            Some(code) => Some(DayStatus::from_code(code).ok_or_else(|| {
                AppError::InvalidStatus(format!("Invalid status filter '{}'", code))
            })?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ListLogic::apply(&mut pool, cfg, period, status_filter, *now)?;
    }
    Ok(())
}
