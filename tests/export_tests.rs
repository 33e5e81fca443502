mod common;
use common::{add_expense, elog, setup_data_dir, temp_out};
use std::fs;

#[test]
fn test_export_csv_month() {
    let data_dir = setup_data_dir("export_csv_month");
    add_expense(&data_dir, "2024-03-01", "diesel", "Acme Corp", "85.00");
    add_expense(&data_dir, "2024-03-12", "meals", "Lunch", "14.00");

    let out = temp_out("export_csv_month", "csv");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "export", "--format", "csv", "--file", &out,
            "--period", "2024-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2024-03-01"));
    assert!(content.contains("2024-03-12"));
    assert!(content.starts_with("sequence,date,category"));
}

#[test]
fn test_export_json_month() {
    let data_dir = setup_data_dir("export_json_month");
    add_expense(&data_dir, "2024-03-01", "diesel", "Acme Corp", "85.00");

    let out = temp_out("export_json_month", "json");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "export", "--format", "json", "--file", &out,
            "--period", "2024-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"counterparty\": \"Acme Corp\""));
    assert!(content.contains("\"sequence\": 1"));
}

#[test]
fn test_export_xlsx_month() {
    let data_dir = setup_data_dir("export_xlsx_month");
    add_expense(&data_dir, "2024-03-01", "tolls", "Highway", "7.50");

    let out = temp_out("export_xlsx_month", "xlsx");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "export", "--format", "xlsx", "--file", &out,
            "--period", "2024-03",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn test_export_pdf_month() {
    let data_dir = setup_data_dir("export_pdf_month");
    add_expense(&data_dir, "2024-03-01", "other", "Parking", "3.00");

    let out = temp_out("export_pdf_month", "pdf");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "export", "--format", "pdf", "--file", &out,
            "--period", "2024-03",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert_eq!(&bytes[0..5], b"%PDF-");
}

#[test]
fn test_export_empty_period_is_not_an_error() {
    let data_dir = setup_data_dir("export_empty_period");

    let out = temp_out("export_empty_period", "csv");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "export", "--format", "csv", "--file", &out,
            "--period", "2031-01",
        ])
        .assert()
        .success();

    // empty state: nothing exported, nothing created
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_output_path() {
    let data_dir = setup_data_dir("export_relative_path");
    add_expense(&data_dir, "2024-03-01", "diesel", "Acme Corp", "85.00");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "export", "--format", "csv", "--file",
            "relative.csv", "--period", "2024-03",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let data_dir = setup_data_dir("export_force");
    add_expense(&data_dir, "2024-03-01", "diesel", "Acme Corp", "85.00");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "export", "--format", "csv", "--file", &out,
            "--period", "2024-03", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Acme Corp"));
}
