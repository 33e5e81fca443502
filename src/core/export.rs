// src/core/export.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{export_csv, export_json, export_pdf, export_xlsx, ExportFormat};
use crate::store::{LedgerStore, Period};
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use std::path::Path;

/// High-level export of one period's table.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the period's rows to `file`.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - a period with no table is an empty state: a warning, not an error.
    pub fn export(
        store: &dyn LedgerStore,
        period: &Period,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let records = match store.records(period)? {
            Some(rows) if !rows.is_empty() => rows,
            _ => {
                warning(format!("No expenses recorded for {}.", period));
                return Ok(());
            }
        };

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
            ExportFormat::Pdf => {
                let title = format!("Expenses for {} {}", month_name(period.month), period.year);
                export_pdf(&records, path, &title)?
            }
        }

        Ok(())
    }
}
