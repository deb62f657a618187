use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;

/// Handle the `init` command: config directory + config file (skipped
/// in test mode), then the SQLite database and all pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let db_path = match &cli.db {
        Some(custom) => custom.clone(),
        None => Config::load().database,
    };

    info("Initializing ovlogger…");
    println!("  config  : {}", Config::config_file().display());
    println!("  database: {}", db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    // Internal log write is best-effort during init.
    if let Err(e) = ttlog(&conn, "init", &db_path, "Database initialized") {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
