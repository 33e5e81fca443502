use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::store::{LedgerStore, Period};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

/// High-level bundling of one period's receipts into a zip archive.
pub struct BundleLogic;

impl BundleLogic {
    /// Write a zip of every receipt referenced by the period's rows.
    ///
    /// The attachment list comes from the table's attachment column,
    /// not from re-matching filenames on disk, so a receipt is included
    /// exactly when its owning row exists. A referenced file missing
    /// from the receipts directory is skipped with a warning.
    ///
    /// A period with zero receipts still produces a valid archive with
    /// zero entries.
    pub fn bundle(
        store: &dyn LedgerStore,
        period: &Period,
        dest_file: &str,
        force: bool,
    ) -> AppResult<()> {
        let dest = Path::new(dest_file);

        ensure_writable(dest, force)?;

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let names: Vec<String> = store
            .records(period)?
            .unwrap_or_default()
            .iter()
            .filter(|r| !r.attachment.is_empty())
            .map(|r| r.attachment.clone())
            .collect();

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut bundled = 0usize;

        for name in &names {
            let src = store.receipts_dir().join(name);

            if !src.exists() {
                warning(format!(
                    "Receipt '{}' is referenced by the table but missing on disk, skipping.",
                    name
                ));
                continue;
            }

            let mut f = fs::File::open(&src)?;
            zip.start_file(name.as_str(), options)
                .map_err(|e| AppError::Export(format!("zip entry error: {e}")))?;
            std::io::copy(&mut f, &mut zip)?;
            bundled += 1;
        }

        zip.finish()
            .map_err(|e| AppError::Export(format!("zip finish error: {e}")))?;

        if bundled == 0 {
            warning(format!("No receipts for {}: wrote an empty bundle.", period));
        }

        success(format!(
            "Bundled {} receipt(s) into {}.",
            bundled,
            dest.display()
        ));

        Ok(())
    }
}
