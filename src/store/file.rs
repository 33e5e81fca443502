//! File-backed ledger store: one CSV table per period plus a flat
//! receipts directory.

use crate::config::SchemaMismatchPolicy;
use crate::errors::AppResult;
use crate::models::record::{AppendOutcome, AttachmentData, Record, RecordDraft};
use crate::store::{attachments, lock, table, LedgerStore, Period};
use std::path::{Path, PathBuf};

pub struct FileStore {
    tables_dir: PathBuf,
    receipts_dir: PathBuf,
    schema_policy: SchemaMismatchPolicy,
}

impl FileStore {
    pub fn new(
        tables_dir: PathBuf,
        receipts_dir: PathBuf,
        schema_policy: SchemaMismatchPolicy,
    ) -> Self {
        Self {
            tables_dir,
            receipts_dir,
            schema_policy,
        }
    }

    /// Backing table path for a period, if the table exists.
    /// Absence means "no data for this period", not a fault.
    pub fn table_path(&self, period: &Period) -> Option<PathBuf> {
        let path = self.tables_dir.join(period.table_file_name());
        path.exists().then_some(path)
    }

    fn load_or_empty(&self, period: &Period) -> AppResult<Vec<Record>> {
        match self.table_path(period) {
            Some(path) => table::load(&path, self.schema_policy),
            None => Ok(Vec::new()),
        }
    }
}

impl LedgerStore for FileStore {
    fn append(
        &self,
        draft: RecordDraft,
        attachment: Option<AttachmentData>,
    ) -> AppResult<AppendOutcome> {
        let period = Period::from_date(draft.date);

        // Serialize the read-count-then-write sequence per period.
        let guard = lock::period_lock(&period.key());
        let _held = guard.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.load_or_empty(&period)?;
        let sequence = records.len() as u32 + 1;

        // Receipt first; the table write below is the commit step.
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

        records.push(draft.into_record(sequence, attachment_name.clone()));

        let table_path = self.tables_dir.join(period.table_file_name());
        if let Err(e) = std::fs::create_dir_all(&self.tables_dir)
            .map_err(crate::errors::AppError::from)
            .and_then(|_| table::save(&table_path, &records))
        {
            // All-or-nothing: no row was persisted, so the receipt must go too.
            if let Some(path) = receipt_path {
                attachments::remove_receipt(&path);
            }
            return Err(e);
        }

        Ok(AppendOutcome {
            sequence,
            attachment_name,
            table_file: period.table_file_name(),
        })
    }

    fn records(&self, period: &Period) -> AppResult<Option<Vec<Record>>> {
        match self.table_path(period) {
            Some(path) => Ok(Some(table::load(&path, self.schema_policy)?)),
            None => Ok(None),
        }
    }

    fn receipts_dir(&self) -> &Path {
        &self.receipts_dir
    }
}
