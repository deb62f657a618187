use crate::core::calculator::period::{self, Window};
use crate::core::recalc::recompute_ledger;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_entries, load_schedule};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_delta};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// High-level business logic for the `status` command: the overtime
/// bank plus delta-vs-target roll-ups around an anchor date.
pub struct StatusLogic;

impl StatusLogic {
    pub fn show(pool: &mut DbPool, anchor: NaiveDate, legacy_target: bool) -> AppResult<()> {
        // status is read-only for the user, but it still refreshes the
        // ledger so the numbers shown can never be stale.
        let (ledger, changed) = recompute_ledger(pool)?;
        if changed {
            info("Ledger was out of date and has been recomputed.");
        }

        let entries = load_all_entries(pool)?;
        let schedule = load_schedule(pool)?;

        println!();
        println!(
            "Overtime bank: earned {} | used {} | balance {}{}{}",
            mins2readable(ledger.earned_minutes, true, false),
            mins2readable(ledger.used_minutes, false, false),
            color_for_delta(ledger.balance_minutes()),
            mins2readable(ledger.balance_minutes(), true, false),
            RESET,
        );
        println!();

        let mut table = Table::new(vec![
            Column {
                header: "PERIOD".into(),
                width: 7,
            },
            Column {
                header: "WORKED".into(),
                width: 8,
            },
            Column {
                header: "DAYS".into(),
                width: 5,
            },
            Column {
                header: "TARGET".into(),
                width: 8,
            },
            Column {
                header: "DELTA".into(),
                width: 18,
            },
        ]);

        for (label, window) in [
            ("day", Window::Day),
            ("week", Window::Week),
            ("month", Window::Month),
            ("year", Window::Year),
        ] {
            let stats = period::aggregate(&entries, &schedule, anchor, window);
            table.add_row(vec![
                label.to_string(),
                mins2readable(stats.worked_minutes, false, true),
                stats.logged_work_days.to_string(),
                mins2readable(stats.adjusted_target_minutes, false, true),
                format!(
                    "{}{} vs target{}",
                    color_for_delta(stats.delta_minutes),
                    mins2readable(stats.delta_minutes, true, false),
                    RESET,
                ),
            ]);
        }

        print!("{}", table.render());

        if legacy_target {
            let month = period::absence_adjusted_target(&entries, &schedule, anchor, Window::Month);
            let year = period::absence_adjusted_target(&entries, &schedule, anchor, Window::Year);
            println!();
            println!(
                "Absence-adjusted cumulative target: month {} | year {}",
                mins2readable(month, false, false),
                mins2readable(year, false, false),
            );
        }

        println!();
        Ok(())
    }
}
