// src/export/mod.rs

mod excel_date;
pub(crate) mod fs_utils;
mod json_csv;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub(crate) use json_csv::{export_csv, export_json};
pub(crate) use pdf_export::export_pdf;
pub(crate) use xlsx::export_xlsx;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}
