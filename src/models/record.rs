use crate::models::category::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted expense entry. Field order defines the table column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based, gapless within its period, assigned at append time.
    pub sequence: u32,
    pub date: NaiveDate,
    pub category: Category,
    pub counterparty: String,
    pub route: String,
    pub distance_km: f64,
    pub amount: f64,
    /// Stored receipt filename, empty when the entry has no receipt.
    pub attachment: String,
}

/// A candidate record as supplied by the data-entry UI, before a sequence
/// number and attachment name are assigned.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub date: NaiveDate,
    pub category: Category,
    pub counterparty: String,
    pub route: String,
    pub distance_km: f64,
    pub amount: f64,
}

impl RecordDraft {
    pub fn into_record(self, sequence: u32, attachment: String) -> Record {
        Record {
            sequence,
            date: self.date,
            category: self.category,
            counterparty: self.counterparty,
            route: self.route,
            distance_km: self.distance_km,
            amount: self.amount,
            attachment,
        }
    }
}

/// Raw receipt bytes plus the original file extension.
#[derive(Debug, Clone)]
pub struct AttachmentData {
    pub bytes: Vec<u8>,
    pub extension: String,
}

/// What a successful append reports back for confirmation display.
#[derive(Debug, Clone)]
pub struct AppendOutcome {
    pub sequence: u32,
    /// Empty when no attachment was supplied.
    pub attachment_name: String,
    /// The backing table the row was appended to.
    pub table_file: String,
}
