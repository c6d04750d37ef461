//! End-to-end runs of the check command against files on disk.

use std::fs;
use std::path::Path;

use pdv_cli::commands::run_check;
use pdv_cli::summary::summary_lines;
use pdv_cli::types::CheckRequest;
use pdv_model::Field;
use tempfile::TempDir;

const BATCH: &str = r#"[
  {
    "telephone": "+7-(912)-345-67-89",
    "height": 1.75,
    "snils": "12345678901",
    "passport_number": "654321",
    "age": 33,
    "occupation": "Инженер",
    "political_views": "аполитичен",
    "worldview": "Атеизм",
    "address": "ул. Ленина 5"
  },
  {
    "telephone": "8 912 345 67 89",
    "height": 1.75,
    "snils": "12345678901",
    "passport_number": "654321",
    "age": 33,
    "occupation": "Инженер",
    "political_views": "аполитичен",
    "worldview": "Атеизм",
    "address": "ул. Ленина 5"
  },
  {
    "telephone": "+7-(912)-345-67-89",
    "height": 1.75,
    "snils": "12345678901",
    "passport_number": "654321",
    "age": 33,
    "occupation": "Инженер",
    "political_views": "аполитичен",
    "worldview": "Храм Трибунала",
    "address": "ул. Ленина 5"
  }
]"#;

fn write_cp1251(path: &Path, content: &str) {
    let (bytes, _, had_errors) = pdv_ingest::input_encoding().encode(content);
    assert!(!had_errors);
    fs::write(path, bytes).unwrap();
}

fn request(dir: &TempDir) -> CheckRequest {
    CheckRequest {
        input: dir.path().join("records.json"),
        output: dir.path().join("valid_records.txt"),
        show_progress: false,
    }
}

#[test]
fn test_three_record_batch_end_to_end() {
    let dir = TempDir::new().unwrap();
    let request = request(&dir);
    write_cp1251(&request.input, BATCH);

    let result = run_check(&request).unwrap();

    let summary = &result.summary;
    assert_eq!(summary.valid_count(), 1);
    assert_eq!(summary.invalid_count(), 2);
    assert_eq!(summary.failures(Field::Telephone), 1);
    assert_eq!(summary.failures(Field::Worldview), 1);
    let zero_rows = summary_lines(summary)
        .iter()
        .filter(|(_, count)| *count == 0)
        .count();
    assert_eq!(zero_rows, 7);

    let report = fs::read_to_string(&request.output).unwrap();
    insta::assert_snapshot!(report.trim_end(), @r"
    Telephone: +7-(912)-345-67-89
    Height: 1.75
    SNILS: 12345678901
    Passport number: 654321
    Age: 33
    Occupation: Инженер
    Political views: аполитичен
    Worldview: Атеизм
    Address: ул. Ленина 5
    ----------------------------------------
    ");
}

#[test]
fn test_missing_input_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let request = request(&dir);

    let error = run_check(&request).unwrap_err();

    assert!(format!("{error:#}").contains("input file not found"));
    assert!(!request.output.exists());
}

#[test]
fn test_malformed_json_is_fatal() {
    let dir = TempDir::new().unwrap();
    let request = request(&dir);
    write_cp1251(&request.input, r#"{"records": []}"#);

    let error = run_check(&request).unwrap_err();

    assert!(format!("{error:#}").contains("expected a JSON array"));
    assert!(!request.output.exists());
}

#[test]
fn test_no_valid_records_yields_empty_report() {
    let dir = TempDir::new().unwrap();
    let request = request(&dir);
    write_cp1251(&request.input, r#"[{"telephone": "+7-(912)-345-67-89"}, {}]"#);

    let result = run_check(&request).unwrap();

    assert_eq!(result.summary.valid_count(), 0);
    assert_eq!(result.summary.failures(Field::Height), 1);
    assert_eq!(result.summary.failures(Field::Telephone), 1);
    assert_eq!(fs::read_to_string(&request.output).unwrap(), "");
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut request = request(&dir);
    write_cp1251(&request.input, "[]");
    request.output = dir.path().join("missing-dir").join("valid_records.txt");

    let error = run_check(&request).unwrap_err();

    assert!(format!("{error:#}").contains("write valid-record report"));
}
