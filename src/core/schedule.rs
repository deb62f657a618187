use crate::core::calculator::schedule as validator;
use crate::core::recalc::recompute_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_schedule, save_schedule};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{ScheduleConfig, ScheduleMode};
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::time::format_time_opt;
use chrono::NaiveTime;

/// Pending changes collected from the CLI flags. `weekday` (0 = Monday)
/// routes the time fields to one per-day slot; without it they apply to
/// the uniform template.
#[derive(Debug, Default)]
pub struct ScheduleUpdate {
    pub hours: Option<f64>,
    pub days: Option<u32>,
    pub mode: Option<ScheduleMode>,
    pub weekday: Option<usize>,
    pub enabled: Option<bool>,
    pub start: Option<NaiveTime>,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl ScheduleUpdate {
    pub fn is_empty(&self) -> bool {
        self.hours.is_none()
            && self.days.is_none()
            && self.mode.is_none()
            && self.enabled.is_none()
            && self.start.is_none()
            && self.lunch_start.is_none()
            && self.lunch_end.is_none()
            && self.end.is_none()
    }
}

/// High-level business logic for the `schedule` command.
pub struct ScheduleLogic;

impl ScheduleLogic {
    pub fn show(pool: &mut DbPool) -> AppResult<()> {
        let cfg = load_schedule(pool)?;
        print_schedule(&cfg);
        Ok(())
    }

    /// Merge the update into the stored schedule and save it, but only
    /// if the validator accepts the result. A rejected schedule leaves
    /// the stored one untouched; the error carries the computed total
    /// and the target so the user sees the exact discrepancy.
    pub fn set(pool: &mut DbPool, update: ScheduleUpdate) -> AppResult<()> {
        let mut cfg = load_schedule(pool)?;

        if let Some(h) = update.hours {
            if h <= 0.0 {
                return Err(AppError::Schedule("weekly hours must be positive".into()));
            }
            cfg.weekly_target_hours = h;
        }
        if let Some(d) = update.days {
            if !(1..=7).contains(&d) {
                return Err(AppError::Schedule("work days must be between 1 and 7".into()));
            }
            cfg.work_days_per_week = d;
        }
        if let Some(m) = update.mode {
            cfg.mode = m;
        }

        match update.weekday {
            Some(w) => {
                let slot = cfg
                    .per_day
                    .get_mut(w)
                    .ok_or_else(|| AppError::Schedule(format!("invalid weekday index {}", w)))?;
                if let Some(en) = update.enabled {
                    slot.enabled = en;
                }
                if update.start.is_some() {
                    slot.template.start = update.start;
                }
                if update.lunch_start.is_some() {
                    slot.template.lunch_start = update.lunch_start;
                }
                if update.lunch_end.is_some() {
                    slot.template.lunch_end = update.lunch_end;
                }
                if update.end.is_some() {
                    slot.template.end = update.end;
                }
            }
            None => {
                if update.start.is_some() {
                    cfg.uniform.start = update.start;
                }
                if update.lunch_start.is_some() {
                    cfg.uniform.lunch_start = update.lunch_start;
                }
                if update.lunch_end.is_some() {
                    cfg.uniform.lunch_end = update.lunch_end;
                }
                if update.end.is_some() {
                    cfg.uniform.end = update.end;
                }
            }
        }

        let check = validator::validate(&cfg);
        if !check.valid {
            return Err(AppError::Schedule(
                check.error.unwrap_or_else(|| "invalid schedule".into()),
            ));
        }

        save_schedule(&pool.conn, &cfg)?;
        ttlog(
            &pool.conn,
            "schedule",
            "",
            &format!(
                "Schedule saved: {}h over {} days",
                cfg.weekly_target_hours, cfg.work_days_per_week
            ),
        )?;

        recompute_ledger(pool)?;

        success(format!(
            "Schedule saved ({} per week over {} days).",
            mins2readable(check.target_minutes, false, false),
            cfg.work_days_per_week,
        ));
        Ok(())
    }
}

fn print_schedule(cfg: &ScheduleConfig) {
    println!();
    println!(
        "Weekly target: {}h over {} days ({} per day)",
        cfg.weekly_target_hours,
        cfg.work_days_per_week,
        mins2readable(cfg.daily_target_minutes_rounded(), false, false),
    );
    println!("Mode: {}", cfg.mode.to_db_str());

    match cfg.mode {
        ScheduleMode::Uniform => {
            println!(
                "Template: {} → {} / {} → {}",
                format_time_opt(cfg.uniform.start),
                format_time_opt(cfg.uniform.lunch_start),
                format_time_opt(cfg.uniform.lunch_end),
                format_time_opt(cfg.uniform.end),
            );
        }
        ScheduleMode::PerDay => {
            const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
            for (name, slot) in NAMES.iter().zip(cfg.per_day.iter()) {
                if slot.enabled {
                    println!(
                        "  {}: {} → {} / {} → {}",
                        name,
                        format_time_opt(slot.template.start),
                        format_time_opt(slot.template.lunch_start),
                        format_time_opt(slot.template.lunch_end),
                        format_time_opt(slot.template.end),
                    );
                } else {
                    println!("  {}: off", name);
                }
            }
        }
    }
    println!();
}
