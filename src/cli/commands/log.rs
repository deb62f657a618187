use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;

        let rows = load_log(&mut pool)?;
        if rows.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        for (ts, message) in rows {
            println!("{}{}{} {}", GREY, ts, RESET, message);
        }
    }

    Ok(())
}
