use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::earn::EarnLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Earn {
        date: date_str,
        minutes,
        note,
    } = cmd
    {
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        EarnLogic::apply(&mut pool, d, *minutes, note.clone())?;
    }

    Ok(())
}
