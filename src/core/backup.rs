use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// High-level business logic for the `backup` command: copy the SQLite
/// file as-is, optionally replacing the copy with a zip archive.
pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(pool: &mut DbPool, db_path: &str, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Export(format!(
                "database not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // Overwriting an existing backup needs an explicit yes.
        if dest.exists() && !confirm_overwrite(dest)? {
            warning("Backup cancelled.");
            return Ok(());
        }

        fs::copy(src, dest)?;

        let final_path = if compress {
            let archive = zip_file(dest)?;
            fs::remove_file(dest)?;
            archive
        } else {
            dest.to_path_buf()
        };

        ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created (compressed)"
            } else {
                "Backup created"
            },
        )?;

        success(format!("Backup created: {}", final_path.display()));
        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!(
        "The file '{}' already exists. Overwrite? [y/N]",
        dest.display()
    ));
    print!("> ");
    stdout().flush()?;

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

/// Deflate-compress a single file into `<name>.zip` next to it.
fn zip_file(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let mut zip = ZipWriter::new(fs::File::create(&zip_path)?);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    zip.start_file(name, options).map_err(std::io::Error::other)?;
    let mut src = fs::File::open(path)?;
    std::io::copy(&mut src, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("Compressed: {}", zip_path.display());
    Ok(zip_path)
}
