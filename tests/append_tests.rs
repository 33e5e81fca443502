mod common;
use common::{
    add_expense, add_expense_with_photo, elog, receipt_path, sample_photo, setup_data_dir,
    table_path,
};
use std::fs;

#[test]
fn test_first_append_creates_table_with_sequence_one() {
    let data_dir = setup_data_dir("first_append");

    add_expense(&data_dir, "2024-03-01", "diesel", "Acme Corp", "85.00");

    let table = table_path(&data_dir, "03_2024");
    assert!(table.exists(), "table file should be created on first append");

    let content = fs::read_to_string(&table).expect("read table");
    let mut lines = content.lines();

    assert_eq!(
        lines.next().unwrap(),
        "sequence,date,category,counterparty,route,distance_km,amount,attachment"
    );

    let row = lines.next().expect("one data row");
    assert!(row.starts_with("1,2024-03-01,diesel,Acme Corp,"));
    assert!(row.ends_with(",")); // no attachment
    assert_eq!(lines.next(), None, "exactly one row expected");
}

#[test]
fn test_sequences_are_gapless_and_in_append_order() {
    let data_dir = setup_data_dir("gapless");

    for i in 1..=5 {
        add_expense(
            &data_dir,
            "2024-04-10",
            "tolls",
            &format!("Trip {}", i),
            "10.00",
        );
    }

    let content = fs::read_to_string(table_path(&data_dir, "04_2024")).expect("read table");
    let sequences: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();

    assert_eq!(sequences, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_duplicate_submissions_are_not_deduplicated() {
    let data_dir = setup_data_dir("duplicates");

    add_expense(&data_dir, "2024-05-02", "meals", "Lunch", "12.50");
    add_expense(&data_dir, "2024-05-02", "meals", "Lunch", "12.50");

    let content = fs::read_to_string(table_path(&data_dir, "05_2024")).expect("read table");
    let rows: Vec<&str> = content.lines().skip(1).collect();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("1,"));
    assert!(rows[1].starts_with("2,"));
}

#[test]
fn test_appends_to_different_months_go_to_different_tables() {
    let data_dir = setup_data_dir("two_months");

    add_expense(&data_dir, "2024-03-31", "diesel", "March trip", "50.00");
    add_expense(&data_dir, "2024-04-01", "diesel", "April trip", "60.00");

    let march = fs::read_to_string(table_path(&data_dir, "03_2024")).expect("march table");
    let april = fs::read_to_string(table_path(&data_dir, "04_2024")).expect("april table");

    // each month restarts its own sequence
    assert!(march.contains("1,2024-03-31"));
    assert!(april.contains("1,2024-04-01"));
}

#[test]
fn test_receipt_stored_under_derived_name() {
    let data_dir = setup_data_dir("receipt_name");
    let photo = sample_photo("receipt_name", "jpg");

    add_expense_with_photo(&data_dir, "2024-03-15", "gasoline", "Fill up", "70.00", &photo);

    let receipt = receipt_path(&data_dir, "ticket_1_15032024.jpg");
    assert!(receipt.exists(), "receipt should be stored under the derived name");

    let content = fs::read_to_string(table_path(&data_dir, "03_2024")).expect("read table");
    assert!(content.contains("ticket_1_15032024.jpg"));
}

#[test]
fn test_invalid_category_is_rejected() {
    let data_dir = setup_data_dir("bad_category");

    elog()
        .args([
            "--data-dir",
            &data_dir,
            "--test",
            "add",
            "2024-03-01",
            "--category",
            "entertainment",
            "--reason",
            "Cinema",
            "--amount",
            "9.00",
        ])
        .assert()
        .failure();
}

#[test]
fn test_invalid_date_is_rejected() {
    let data_dir = setup_data_dir("bad_date");

    elog()
        .args([
            "--data-dir",
            &data_dir,
            "--test",
            "add",
            "01/03/2024",
            "--category",
            "diesel",
            "--reason",
            "Trip",
            "--amount",
            "5.00",
        ])
        .assert()
        .failure();
}

#[test]
fn test_negative_amount_is_rejected() {
    let data_dir = setup_data_dir("negative_amount");

    elog()
        .args([
            "--data-dir",
            &data_dir,
            "--test",
            "add",
            "2024-03-01",
            "--category",
            "diesel",
            "--reason",
            "Trip",
            "--amount=-5.00",
        ])
        .assert()
        .failure();

    assert!(
        !table_path(&data_dir, "03_2024").exists(),
        "no row may be written on a failed append"
    );
}

#[test]
fn test_photo_with_unsupported_extension_is_rejected() {
    let data_dir = setup_data_dir("bad_photo_ext");
    let photo = sample_photo("bad_photo_ext", "gif");

    elog()
        .args([
            "--data-dir",
            &data_dir,
            "--test",
            "add",
            "2024-03-01",
            "--category",
            "diesel",
            "--reason",
            "Trip",
            "--amount",
            "5.00",
            "--photo",
            &photo,
        ])
        .assert()
        .failure();
}
