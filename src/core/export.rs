use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_entries, load_entries_in_range};
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use std::path::Path;

/// High-level business logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    pub fn apply(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let dest = Path::new(file);
        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "file '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        let records = match range {
            Some(r) => {
                let (from, to) = parse_range(r)?;
                load_entries_in_range(pool, &from, &to)?
            }
            None => load_all_entries(pool)?,
        };

        if records.is_empty() {
            return Err(AppError::Export("no entries to export".into()));
        }

        match format {
            ExportFormat::Csv => csv::write_csv(file, &records)?,
            ExportFormat::Json => json::write_json(file, &records)?,
        }

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} entries as {}", records.len(), format.as_str()),
        )?;

        notify_export_success(format.as_str(), dest);
        Ok(())
    }
}
