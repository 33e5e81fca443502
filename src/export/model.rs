// src/export/model.rs

use crate::models::record::Record;
use crate::store::table::COLUMNS;

/// Header per CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    COLUMNS.to_vec()
}

/// Convert a record into a row of display strings (for XLSX / PDF).
pub(crate) fn record_to_row(r: &Record) -> Vec<String> {
    vec![
        r.sequence.to_string(),
        r.date.to_string(),
        r.category.as_str().to_string(),
        r.counterparty.clone(),
        r.route.clone(),
        format!("{:.2}", r.distance_km),
        format!("{:.2}", r.amount),
        r.attachment.clone(),
    ]
}

pub(crate) fn records_to_table(records: &[Record]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}
