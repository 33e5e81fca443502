#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn elog() -> Command {
    cargo_bin_cmd!("expenselog")
}

/// Create a unique test data dir inside the system temp dir and remove any
/// existing content
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_expenselog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test data dir");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a tiny placeholder photo and return its path
pub fn sample_photo(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_receipt.{}", name, ext));
    fs::write(&path, b"\xff\xd8\xff\xe0 not a real image").expect("write sample photo");
    path.to_string_lossy().to_string()
}

/// Add one expense via the CLI (no photo)
pub fn add_expense(data_dir: &str, date: &str, category: &str, reason: &str, amount: &str) {
    elog()
        .args([
            "--data-dir",
            data_dir,
            "--test",
            "add",
            date,
            "--category",
            category,
            "--reason",
            reason,
            "--amount",
            amount,
        ])
        .assert()
        .success();
}

/// Add one expense via the CLI with a receipt photo attached
pub fn add_expense_with_photo(
    data_dir: &str,
    date: &str,
    category: &str,
    reason: &str,
    amount: &str,
    photo: &str,
) {
    elog()
        .args([
            "--data-dir",
            data_dir,
            "--test",
            "add",
            date,
            "--category",
            category,
            "--reason",
            reason,
            "--amount",
            amount,
            "--photo",
            photo,
        ])
        .assert()
        .success();
}

/// Path of the backing table file for a period key inside a test data dir
pub fn table_path(data_dir: &str, key: &str) -> PathBuf {
    PathBuf::from(data_dir)
        .join("tables")
        .join(format!("expenses_{}.csv", key))
}

/// Path of a stored receipt inside a test data dir
pub fn receipt_path(data_dir: &str, name: &str) -> PathBuf {
    PathBuf::from(data_dir).join("receipts").join(name)
}
