use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recover::RecoverLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recover {
        date: date_str,
        from,
        to,
        full_day,
        note,
    } = cmd
    {
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let from_parsed = parse_optional_time(from.as_ref())?;
        let to_parsed = parse_optional_time(to.as_ref())?;

        let range = match (from_parsed, to_parsed) {
            (Some(s), Some(e)) => Some((s, e)),
            (None, None) => None,
            _ => {
                return Err(AppError::InvalidTime(
                    "--from and --to must be given together".into(),
                ));
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;
        RecoverLogic::apply(&mut pool, d, range, *full_day, note.clone())?;
    }

    Ok(())
}
