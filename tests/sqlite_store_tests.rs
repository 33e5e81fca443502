//! The unpartitioned SQLite ledger, exercised through the library API.

use chrono::NaiveDate;
use expenselog::models::category::Category;
use expenselog::models::record::{AttachmentData, RecordDraft};
use expenselog::store::{LedgerStore, Period, SqliteStore};
use std::env;
use std::fs;
use std::path::PathBuf;

fn setup_store(name: &str) -> (PathBuf, SqliteStore) {
    let mut root: PathBuf = env::temp_dir();
    root.push(format!("{}_expenselog_sqlite", name));
    fs::remove_dir_all(&root).ok();
    fs::create_dir_all(&root).expect("create store dir");

    let store =
        SqliteStore::open(&root.join("ledger.sqlite"), root.join("receipts")).expect("open db");
    (root, store)
}

fn draft(y: i32, m: u32, d: u32, reason: &str) -> RecordDraft {
    RecordDraft {
        date: NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
        category: Category::Other,
        counterparty: reason.to_string(),
        route: String::new(),
        distance_km: 0.0,
        amount: 10.0,
    }
}

#[test]
fn test_sequence_spans_the_whole_ledger() {
    let (_root, store) = setup_store("whole_ledger");

    // one unpartitioned sheet: the sequence does not restart per month
    let a = store.append(draft(2024, 3, 1, "March"), None).expect("append");
    let b = store.append(draft(2024, 4, 1, "April"), None).expect("append");
    let c = store.append(draft(2025, 1, 1, "Next year"), None).expect("append");

    assert_eq!(a.sequence, 1);
    assert_eq!(b.sequence, 2);
    assert_eq!(c.sequence, 3);
}

#[test]
fn test_records_returns_the_full_sheet_for_any_period() {
    let (_root, store) = setup_store("full_sheet");

    store.append(draft(2024, 3, 1, "March"), None).expect("append");
    store.append(draft(2024, 4, 1, "April"), None).expect("append");

    let rows = store
        .records(&Period { year: 2024, month: 3 })
        .expect("load")
        .expect("rows exist");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].counterparty, "March");
    assert_eq!(rows[1].counterparty, "April");
}

#[test]
fn test_empty_ledger_is_none() {
    let (_root, store) = setup_store("empty_ledger");

    let rows = store
        .records(&Period { year: 2024, month: 3 })
        .expect("must not fail");
    assert!(rows.is_none());
}

#[test]
fn test_receipts_share_the_naming_convention() {
    let (root, store) = setup_store("sqlite_receipt");

    let outcome = store
        .append(
            draft(2024, 3, 15, "Fill up"),
            Some(AttachmentData {
                bytes: b"bytes".to_vec(),
                extension: "png".to_string(),
            }),
        )
        .expect("append with attachment");

    assert_eq!(outcome.attachment_name, "ticket_1_15032024.png");
    assert!(root.join("receipts").join("ticket_1_15032024.png").exists());

    let rows = store
        .records(&Period { year: 2024, month: 3 })
        .expect("load")
        .expect("rows exist");
    assert_eq!(rows[0].attachment, "ticket_1_15032024.png");
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
}
