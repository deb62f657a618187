use crate::core::recalc::recompute_ledger;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entry_by_date, upsert_entry};
use crate::errors::{AppError, AppResult};
use crate::export::csv;
use crate::ui::messages::success;
use std::path::Path;

/// High-level business logic for the `import` command.
///
/// Reconciliation is merge-by-date with `updated_at`-wins: an incoming
/// row only replaces the local record for its date when its write
/// timestamp is strictly newer. RFC3339 timestamps compare correctly as
/// strings, so no parsing is needed here.
pub struct ImportLogic;

impl ImportLogic {
    pub fn apply(pool: &mut DbPool, file: &str) -> AppResult<()> {
        if !Path::new(file).exists() {
            return Err(AppError::Import(format!("file '{}' not found", file)));
        }

        let incoming = csv::read_csv(file)?;
        if incoming.is_empty() {
            return Err(AppError::Import("no records in file".into()));
        }

        let mut applied = 0usize;
        let mut skipped = 0usize;

        for mut rec in incoming {
            match load_entry_by_date(pool, &rec.date)? {
                Some(existing) if existing.updated_at >= rec.updated_at => {
                    skipped += 1;
                }
                other => {
                    rec.id = other.map(|r| r.id).unwrap_or(0);
                    upsert_entry(&pool.conn, &rec)?;
                    applied += 1;
                }
            }
        }

        ttlog(
            &pool.conn,
            "import",
            file,
            &format!("Imported {} entries, {} skipped", applied, skipped),
        )?;

        recompute_ledger(pool)?;

        success(format!(
            "Import completed: {} applied, {} skipped (older than local).",
            applied, skipped
        ));
        Ok(())
    }
}
