//! Receipt storage: derived filenames and flat-directory persistence.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Derived receipt filename: `ticket_{sequence}_{ddmmyyyy}.{ext}`.
///
/// The sequence number makes the name unique within its period; the
/// date substring ties it to the period without a directory per month.
pub fn receipt_file_name(sequence: u32, date: NaiveDate, extension: &str) -> String {
    format!(
        "ticket_{}_{}.{}",
        sequence,
        date.format("%d%m%Y"),
        extension.trim_start_matches('.').to_lowercase()
    )
}

/// Write receipt bytes under `dir/name`, creating the directory if needed.
pub fn write_receipt(dir: &Path, name: &str, bytes: &[u8]) -> AppResult<PathBuf> {
    let path = dir.join(name);

    let write = || -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        fs::write(&path, bytes)
    };

    write().map_err(|source| AppError::AttachmentWrite {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Best-effort rollback of a receipt written during a failed append.
pub fn remove_receipt(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        crate::ui::messages::warning(format!(
            "Failed to roll back attachment '{}': {}",
            path.display(),
            e
        ));
    }
}
