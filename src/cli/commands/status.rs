use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        date: anchor,
        legacy_target,
    } = cmd
    {
        let anchor = match anchor {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        StatusLogic::show(&mut pool, anchor, *legacy_target)?;
    }

    Ok(())
}
