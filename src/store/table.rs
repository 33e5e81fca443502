//! CSV persistence for a period's table.
//!
//! The schema is fixed and versionless: one header row with the columns
//! below, in this order. Round-trip holds: a saved table reloads to the
//! same rows in the same order.

use crate::config::SchemaMismatchPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::record::Record;
use chrono::NaiveDate;
use std::path::Path;

/// Fixed column set, in table order. Must match the field order of
/// `Record`.
pub const COLUMNS: [&str; 8] = [
    "sequence",
    "date",
    "category",
    "counterparty",
    "route",
    "distance_km",
    "amount",
    "attachment",
];

/// Load a period table from `path`.
///
/// With `Reject`, a header set different from [`COLUMNS`] is a
/// `SchemaMismatch`. With `Coerce`, known columns are mapped by name and
/// missing ones defaulted (a table without a date column is still
/// rejected, there is nothing sensible to default a date to).
pub fn load(path: &Path, policy: SchemaMismatchPolicy) -> AppResult<Vec<Record>> {
    let mut rdr = csv::Reader::from_path(path).map_err(|e| AppError::TableRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::TableRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .clone();

    let expected: Vec<&str> = COLUMNS.to_vec();
    let found: Vec<&str> = headers.iter().collect();

    if found == expected {
        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: Record = row.map_err(|e| AppError::TableRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        return Ok(records);
    }

    match policy {
        SchemaMismatchPolicy::Reject => Err(AppError::SchemaMismatch {
            path: path.to_path_buf(),
            expected: expected.join(", "),
            found: found.join(", "),
        }),
        SchemaMismatchPolicy::Coerce => coerce_rows(path, &headers, rdr),
    }
}

/// Persist the whole table to `path`, overwriting the previous file.
pub fn save(path: &Path, records: &[Record]) -> AppResult<()> {
    let write = || -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_path(path)?;
        for record in records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    };

    write().map_err(|e| AppError::TableWrite {
        path: path.to_path_buf(),
        source: std::io::Error::other(e.to_string()),
    })
}

/// Schema-coercion path: map whatever known columns exist by name,
/// default the rest. Sequence falls back to the row position so the
/// gapless 1..N invariant still holds after a coerced load.
fn coerce_rows(
    path: &Path,
    headers: &csv::StringRecord,
    mut rdr: csv::Reader<std::fs::File>,
) -> AppResult<Vec<Record>> {
    let col = |name: &str| headers.iter().position(|h| h == name);

    let idx_sequence = col("sequence");
    let idx_date = col("date").ok_or_else(|| AppError::SchemaMismatch {
        path: path.to_path_buf(),
        expected: COLUMNS.join(", "),
        found: headers.iter().collect::<Vec<_>>().join(", "),
    })?;
    let idx_category = col("category");
    let idx_counterparty = col("counterparty");
    let idx_route = col("route");
    let idx_distance = col("distance_km");
    let idx_amount = col("amount");
    let idx_attachment = col("attachment");

    let field = |row: &csv::StringRecord, idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i)).unwrap_or("").to_string()
    };

    let mut records = Vec::new();

    for (pos, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| AppError::TableRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let date_str = field(&row, Some(idx_date));
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            AppError::TableRead {
                path: path.to_path_buf(),
                reason: format!("row {}: invalid date '{}'", pos + 1, date_str),
            }
        })?;

        let sequence = field(&row, idx_sequence)
            .parse::<u32>()
            .unwrap_or(pos as u32 + 1);

        let category =
            Category::from_code(&field(&row, idx_category)).unwrap_or(Category::Other);

        records.push(Record {
            sequence,
            date,
            category,
            counterparty: field(&row, idx_counterparty),
            route: field(&row, idx_route),
            distance_km: field(&row, idx_distance).parse().unwrap_or(0.0),
            amount: field(&row, idx_amount).parse().unwrap_or(0.0),
            attachment: field(&row, idx_attachment),
        });
    }

    Ok(records)
}
