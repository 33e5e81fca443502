mod common;
use common::{add_expense, add_expense_with_photo, elog, sample_photo, setup_data_dir, temp_out};
use std::fs;

fn zip_entry_names(path: &str) -> Vec<String> {
    let file = fs::File::open(path).expect("open zip");
    let archive = zip::ZipArchive::new(file).expect("read zip");
    archive.file_names().map(|n| n.to_string()).collect()
}

#[test]
fn test_bundle_contains_all_period_receipts() {
    let data_dir = setup_data_dir("bundle_two");
    let jpg = sample_photo("bundle_two_a", "jpg");
    let png = sample_photo("bundle_two_b", "png");

    add_expense_with_photo(&data_dir, "2024-03-05", "diesel", "Fill up", "60.00", &jpg);
    add_expense_with_photo(&data_dir, "2024-03-20", "meals", "Dinner", "25.00", &png);

    let out = temp_out("bundle_two", "zip");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "bundle", "--file", &out, "--period", "2024-03",
        ])
        .assert()
        .success();

    let mut names = zip_entry_names(&out);
    names.sort();

    assert_eq!(
        names,
        vec![
            "ticket_1_05032024.jpg".to_string(),
            "ticket_2_20032024.png".to_string(),
        ]
    );
}

#[test]
fn test_bundle_skips_rows_without_receipts() {
    let data_dir = setup_data_dir("bundle_mixed");
    let jpg = sample_photo("bundle_mixed", "jpg");

    add_expense(&data_dir, "2024-06-01", "tolls", "Highway", "7.00");
    add_expense_with_photo(&data_dir, "2024-06-02", "diesel", "Fill up", "55.00", &jpg);

    let out = temp_out("bundle_mixed", "zip");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "bundle", "--file", &out, "--period", "2024-06",
        ])
        .assert()
        .success();

    assert_eq!(zip_entry_names(&out), vec!["ticket_2_02062024.jpg".to_string()]);
}

#[test]
fn test_bundle_empty_period_produces_empty_archive() {
    let data_dir = setup_data_dir("bundle_empty");

    let out = temp_out("bundle_empty", "zip");

    elog()
        .args([
            "--data-dir", &data_dir, "--test", "bundle", "--file", &out, "--period", "2030-12",
        ])
        .assert()
        .success();

    assert!(zip_entry_names(&out).is_empty());
}
