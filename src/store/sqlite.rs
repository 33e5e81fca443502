//! SQLite-backed ledger store.
//!
//! Stands in for deployments backed by a remote spreadsheet service:
//! the ledger is one unpartitioned sheet, the current row count is read
//! via a query and the append is a single insert. Period partitioning
//! is not supported here, so `records` returns the whole sheet
//! regardless of the requested period. Receipts still live in the
//! shared flat directory.

use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::record::{AppendOutcome, AttachmentData, Record, RecordDraft};
use crate::store::{attachments, LedgerStore, Period};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct SqliteStore {
    conn: Mutex<Connection>,
    receipts_dir: PathBuf,
}

impl SqliteStore {
    pub fn open(database: &Path, receipts_dir: PathBuf) -> AppResult<Self> {
        let conn = Connection::open(database)?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            receipts_dir,
        })
    }
}

pub fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS records (
            sequence     INTEGER NOT NULL,
            date         TEXT NOT NULL,
            category     TEXT NOT NULL,
            counterparty TEXT NOT NULL,
            route        TEXT NOT NULL,
            distance_km  REAL NOT NULL,
            amount       REAL NOT NULL,
            attachment   TEXT NOT NULL
        );",
    )?;
    Ok(())
}

impl LedgerStore for SqliteStore {
    fn append(
        &self,
        draft: RecordDraft,
        attachment: Option<AttachmentData>,
    ) -> AppResult<AppendOutcome> {
        let mut conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());

        // Count and insert inside one transaction: the single-writer
        // guarantee the file store gets from its period lock.
        let tx = conn.transaction()?;

        let count: u32 = tx.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        let sequence = count + 1;

        let mut receipt_path = None;
        let attachment_name = match &attachment {
            Some(data) => {
                let name = attachments::receipt_file_name(sequence, draft.date, &data.extension);
                receipt_path = Some(attachments::write_receipt(
                    &self.receipts_dir,
                    &name,
                    &data.bytes,
                )?);
                name
            }
            None => String::new(),
        };

        let record = draft.into_record(sequence, attachment_name.clone());

        let commit = || -> AppResult<()> {
            tx.execute(
                "INSERT INTO records
                 (sequence, date, category, counterparty, route, distance_km, amount, attachment)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    record.sequence,
                    record.date.to_string(),
                    record.category.as_str(),
                    record.counterparty,
                    record.route,
                    record.distance_km,
                    record.amount,
                    record.attachment,
                ],
            )?;
            tx.commit()?;
            Ok(())
        };

        if let Err(e) = commit() {
            if let Some(path) = receipt_path {
                attachments::remove_receipt(&path);
            }
            return Err(e);
        }

        Ok(AppendOutcome {
            sequence,
            attachment_name,
            table_file: "records".to_string(),
        })
    }

    fn records(&self, _period: &Period) -> AppResult<Option<Vec<Record>>> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());

        let mut stmt = conn.prepare(
            "SELECT sequence, date, category, counterparty, route, distance_km, amount, attachment
             FROM records
             ORDER BY sequence ASC",
        )?;

        let rows = stmt.query_map([], map_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        if records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(records))
        }
    }

    fn receipts_dir(&self) -> &Path {
        &self.receipts_dir
    }
}

/// Mapping DB row -> Record (reused for all queries).
fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    let date_str: String = row.get(1)?;
    let category_str: String = row.get(2)?;

    Ok(Record {
        sequence: row.get(0)?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?,
        category: Category::from_code(&category_str).unwrap_or(Category::Other),
        counterparty: row.get(3)?,
        route: row.get(4)?,
        distance_km: row.get(5)?,
        amount: row.get(6)?,
        attachment: row.get(7)?,
    })
}
