//! The ledger store: period resolution, append-with-identity, and
//! period retrieval over a pluggable backing store.

pub mod attachments;
pub mod file;
pub mod lock;
pub mod period;
pub mod sqlite;
pub mod table;

pub use file::FileStore;
pub use period::Period;
pub use sqlite::SqliteStore;

use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;
use crate::models::record::{AppendOutcome, AttachmentData, Record, RecordDraft};
use std::path::Path;

/// The append/retrieve contract shared by all backing stores.
pub trait LedgerStore {
    /// Persist one record, assigning its sequence number and optionally
    /// storing a receipt under a derived name. All-or-nothing: on
    /// failure no row survives and any written receipt is rolled back.
    fn append(
        &self,
        draft: RecordDraft,
        attachment: Option<AttachmentData>,
    ) -> AppResult<AppendOutcome>;

    /// Rows for a period, in append order. `None` means no data for the
    /// period (an empty state, not a fault). Stores without period
    /// partitioning return their whole ledger.
    fn records(&self, period: &Period) -> AppResult<Option<Vec<Record>>>;

    /// Flat directory holding receipt files.
    fn receipts_dir(&self) -> &Path;
}

/// Open the store selected by the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn LedgerStore>> {
    match cfg.storage {
        StorageBackend::File => Ok(Box::new(FileStore::new(
            cfg.tables_dir(),
            cfg.receipts_dir(),
            cfg.on_schema_mismatch,
        ))),
        StorageBackend::Sqlite => Ok(Box::new(SqliteStore::open(
            Path::new(&cfg.database),
            cfg.receipts_dir(),
        )?)),
    }
}
