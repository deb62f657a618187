use crate::config::Config;
use crate::core::calculator::daily;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entries_in_range, load_schedule};
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::day_status::DayStatus;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_delta, color_for_status, colorize_optional};
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time_opt;

/// High-level business logic for the `list` command.
pub struct ListLogic;

impl ListLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        period: &Option<String>,
        status_filter: Option<DayStatus>,
        today_only: bool,
    ) -> AppResult<()> {
        let (from, to) = if today_only {
            let t = date::today();
            (t, t)
        } else if let Some(p) = period {
            parse_range(p)?
        } else {
            // Default window: the current month.
            let t = date::today();
            (date::first_day_of_month(t), date::last_day_of_month(t))
        };

        let schedule = load_schedule(pool)?;
        let daily_target = schedule.daily_target_minutes_rounded();

        let entries = load_entries_in_range(pool, &from, &to)?;
        let entries: Vec<_> = entries
            .into_iter()
            .filter(|r| status_filter.is_none_or(|s| r.status == s))
            .collect();

        if entries.is_empty() {
            info(format!("No entries between {} and {}.", from, to));
            return Ok(());
        }

        // "2024-09-02 (Mon)" needs the wider cell
        let date_width = if cfg.show_weekday { 16 } else { 10 };

        let mut table = Table::new(vec![
            Column {
                header: "DATE".into(),
                width: date_width,
            },
            Column {
                header: "STATUS".into(),
                width: 8,
            },
            Column {
                header: "IN".into(),
                width: 5,
            },
            Column {
                header: "L-OUT".into(),
                width: 5,
            },
            Column {
                header: "L-IN".into(),
                width: 5,
            },
            Column {
                header: "OUT".into(),
                width: 5,
            },
            Column {
                header: "WORKED".into(),
                width: 7,
            },
            Column {
                header: "DELTA".into(),
                width: 16,
            },
            Column {
                header: "NOTES".into(),
                width: 24,
            },
        ]);

        let mut total_worked = 0i64;
        for rec in &entries {
            let worked = daily::worked_minutes(rec);
            total_worked += worked;

            // Only work days are compared to the daily target in this
            // view; other statuses show a neutral delta.
            let delta_cell = if rec.status.is_work() {
                let delta = worked - daily_target;
                format!(
                    "{}{}{}",
                    color_for_delta(delta),
                    mins2readable(delta, true, true),
                    RESET
                )
            } else {
                colorize_optional("--:--")
            };

            table.add_row(vec![
                date::display_date(rec.date, cfg.show_weekday),
                format!(
                    "{}{}{}",
                    color_for_status(rec.status.to_db_str()),
                    rec.status.to_db_str(),
                    RESET
                ),
                colorize_optional(&format_time_opt(rec.start)),
                colorize_optional(&format_time_opt(rec.lunch_start)),
                colorize_optional(&format_time_opt(rec.lunch_end)),
                colorize_optional(&format_time_opt(rec.end)),
                mins2readable(worked, false, true),
                delta_cell,
                rec.notes.clone(),
            ]);
        }

        print!("{}", table.render());

        // Configurable separator between the table and the totals line.
        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        println!("{}", sep.to_string().repeat(table.total_width()));

        println!(
            "{} entries, {} worked in total.",
            entries.len(),
            mins2readable(total_worked, false, false),
        );

        Ok(())
    }
}
