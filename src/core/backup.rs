use crate::db::log::oplog;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store file to `dest_file`, optionally replacing the copy with
    /// a zip archive. Returns the path of the final artifact.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(dest, force)?;

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // Log in DB (non-blocking)
        if let Ok(conn) = Connection::open(src)
            && let Err(e) = oplog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "studydesk.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
