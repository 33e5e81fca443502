use crate::errors::AppResult;
use crate::models::record::{AppendOutcome, AttachmentData, RecordDraft};
use crate::store::LedgerStore;
use crate::ui::messages::{info, success};

/// High-level business logic for the `add` command.
pub struct AppendLogic;

impl AppendLogic {
    /// Append one record, report the assigned identity back to the user.
    ///
    /// Duplicate submissions are intentionally not detected: submitting
    /// the same draft twice yields two rows with consecutive sequence
    /// numbers, matching the form-submit behaviour this tool replaces.
    pub fn apply(
        store: &dyn LedgerStore,
        draft: RecordDraft,
        attachment: Option<AttachmentData>,
    ) -> AppResult<AppendOutcome> {
        let outcome = store.append(draft, attachment)?;

        success(format!(
            "Expense saved: record {} in {}.",
            outcome.sequence, outcome.table_file
        ));

        if !outcome.attachment_name.is_empty() {
            info(format!("Receipt stored as: {}", outcome.attachment_name));
        }

        Ok(outcome)
    }
}
