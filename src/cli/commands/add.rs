use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_status::DayStatus;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add or update a day entry.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        status,
        start,
        lunch_start,
        lunch_end,
        end,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse status (default = work)
        //
        let status_final = match status {
            Some(code) => DayStatus::from_code(code).ok_or_else(|| {
                AppError::InvalidStatus(format!(
                    "Invalid status '{}'. Use work, school, vacation, sick, holiday, off or recovery.",
                    code
                ))
            })?,
            None => DayStatus::Work,
        };

        //
        // 3. Parse time fields (all optional)
        //
        let start_parsed = parse_optional_time(start.as_ref())?;
        let lunch_start_parsed = parse_optional_time(lunch_start.as_ref())?;
        let lunch_end_parsed = parse_optional_time(lunch_end.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 4. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            d,
            status_final,
            start_parsed,
            lunch_start_parsed,
            lunch_end_parsed,
            end_parsed,
            notes.clone(),
        )?;
    }

    Ok(())
}
