use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{ScheduleLogic, ScheduleUpdate};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::ScheduleMode;
use crate::utils::time::parse_optional_time;

fn parse_weekday(s: &str) -> Option<usize> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Some(0),
        "tue" | "tuesday" => Some(1),
        "wed" | "wednesday" => Some(2),
        "thu" | "thursday" => Some(3),
        "fri" | "friday" => Some(4),
        "sat" | "saturday" => Some(5),
        "sun" | "sunday" => Some(6),
        _ => None,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        show,
        hours,
        days,
        mode,
        weekday,
        enable,
        disable,
        start,
        lunch_start,
        lunch_end,
        end,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let mode_parsed = match mode {
            Some(m) => Some(ScheduleMode::from_db_str(&m.to_lowercase()).ok_or_else(|| {
                AppError::Schedule(format!("invalid mode '{}': use uniform or per-day", m))
            })?),
            None => None,
        };

        let weekday_parsed = match weekday {
            Some(w) => Some(
                parse_weekday(w)
                    .ok_or_else(|| AppError::Schedule(format!("invalid weekday '{}'", w)))?,
            ),
            None => None,
        };

        if *enable && *disable {
            return Err(AppError::Schedule(
                "--enable and --disable are mutually exclusive".into(),
            ));
        }

        let update = ScheduleUpdate {
            hours: *hours,
            days: *days,
            mode: mode_parsed,
            weekday: weekday_parsed,
            enabled: if *enable {
                Some(true)
            } else if *disable {
                Some(false)
            } else {
                None
            },
            start: parse_optional_time(start.as_ref())?,
            lunch_start: parse_optional_time(lunch_start.as_ref())?,
            lunch_end: parse_optional_time(lunch_end.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
        };

        if *show || update.is_empty() {
            ScheduleLogic::show(&mut pool)?;
        } else {
            ScheduleLogic::set(&mut pool, update)?;
        }
    }

    Ok(())
}
