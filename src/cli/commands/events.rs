use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::events::EventsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events { remove } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match remove {
            Some(id) => EventsLogic::remove(&mut pool, *id)?,
            None => EventsLogic::list(&mut pool)?,
        }
    }

    Ok(())
}
