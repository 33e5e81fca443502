// src/export/excel_date.rs

use chrono::NaiveDate;

/// Try to interpret a cell as a calendar date, returning the Excel
/// serial plus the number format to apply.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(("yyyy-mm-dd", naive_date_to_excel_serial(d)))
}

fn naive_date_to_excel_serial(d: NaiveDate) -> f64 {
    // Excel's day zero, with its historical 1900 leap-year offset baked in.
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (d - excel_epoch).num_days() as f64
}
