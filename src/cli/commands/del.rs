use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DelLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date: date_str, id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match (date_str, id) {
            (_, Some(id)) => DelLogic::by_id(&mut pool, *id)?,
            (Some(date_str), None) => {
                let d = date::parse_date(date_str)
                    .ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
                DelLogic::by_date(&mut pool, d)?;
            }
            (None, None) => {
                return Err(AppError::InvalidDate(
                    "specify a date or --id to delete".into(),
                ));
            }
        }
    }

    Ok(())
}
