// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, records_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfReport;
use crate::models::record::Record;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF using PdfReport and the generated table.
pub(crate) fn export_pdf(records: &[Record], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = records_to_table(records);

    let mut pdf = PdfReport::new();
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
