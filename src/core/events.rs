use crate::core::ledger;
use crate::core::recalc::recompute_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_ledger, save_ledger_if_changed};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time_opt;

/// High-level business logic for the `events` command: inspect and
/// delete manual ledger adjustments.
pub struct EventsLogic;

impl EventsLogic {
    pub fn list(pool: &mut DbPool) -> AppResult<()> {
        let led = load_ledger(pool)?;

        if led.events.is_empty() {
            println!("No overtime events recorded.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "ID".into(),
                width: 5,
            },
            Column {
                header: "DATE".into(),
                width: 10,
            },
            Column {
                header: "MINUTES".into(),
                width: 8,
            },
            Column {
                header: "FROM".into(),
                width: 5,
            },
            Column {
                header: "TO".into(),
                width: 5,
            },
            Column {
                header: "NOTE".into(),
                width: 30,
            },
        ]);

        for ev in &led.events {
            table.add_row(vec![
                ev.id.to_string(),
                ev.date_str(),
                ev.minutes.to_string(),
                format_time_opt(ev.start),
                format_time_opt(ev.end),
                ev.note.clone(),
            ]);
        }

        print!("{}", table.render());
        println!(
            "\nearned {} | used {} | balance {}",
            mins2readable(led.earned_minutes, true, false),
            mins2readable(led.used_minutes, false, false),
            mins2readable(led.balance_minutes(), true, false),
        );

        Ok(())
    }

    /// Deleting a consumption restores its minutes to the balance
    /// (used_minutes clamped at zero).
    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let mut led = load_ledger(pool)?;
        let removed = ledger::remove_event(&mut led, id)?;

        delete_event(&pool.conn, id)?;
        save_ledger_if_changed(&pool.conn, &led)?;

        ttlog(
            &pool.conn,
            "events",
            &removed.date_str(),
            &format!("Removed event {} ({} minutes)", id, removed.minutes),
        )?;

        let (led, _) = recompute_ledger(pool)?;
        success(format!(
            "Removed event {} (balance {}).",
            id,
            mins2readable(led.balance_minutes(), true, false),
        ));

        Ok(())
    }
}
