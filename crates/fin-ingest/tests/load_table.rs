//! End-to-end loading tests against temporary files.

use std::io::Write;
use std::path::Path;

use fin_ingest::{IngestError, SourceFormat, load_table};
use polars::prelude::DataType;
use rust_xlsxwriter::Workbook;
use tempfile::Builder;

fn write_table(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn loads_wide_income_statement() {
    let file = write_table(
        ".csv",
        "Metric,2022,2023,2024\nRevenue,\"$1,000\",\"$1,100\",\"$1,250\"\nNet Income,(50),25,N/A\n",
    );
    let table = load_table(file.path()).unwrap();

    assert_eq!(table.format, SourceFormat::Csv);
    assert!(table.file_name.ends_with(".csv"));
    assert_eq!(table.frame.height(), 2);
    assert_eq!(
        table.frame.get_column_names_str(),
        vec!["Metric", "2022", "2023", "2024"]
    );
    for column in table.frame.get_columns() {
        assert_eq!(column.dtype(), &DataType::String);
    }
    let y2024 = table.frame.column("2024").unwrap().str().unwrap();
    assert_eq!(y2024.get(1), Some("N/A"));
}

#[test]
fn loads_tab_separated() {
    let file = write_table(".tsv", "Account\tAmount\nCash\t$5,000\n");
    let table = load_table(file.path()).unwrap();

    assert_eq!(table.format, SourceFormat::Tsv);
    assert_eq!(table.frame.width(), 2);
    let amount = table.frame.column("Amount").unwrap().str().unwrap();
    assert_eq!(amount.get(0), Some("$5,000"));
}

#[test]
fn blank_header_gets_generated_name() {
    let file = write_table(".csv", ",2023\nRevenue,100\n");
    let table = load_table(file.path()).unwrap();

    let first = table.frame.get_column_names_str()[0].to_string();
    assert!(!first.trim().is_empty());
}

#[test]
fn loads_first_sheet_of_workbook() {
    let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
    let mut workbook = Workbook::new();
    let statement = workbook.add_worksheet();
    statement.write_string(0, 0, "Metric").unwrap();
    statement.write_string(0, 1, "2023").unwrap();
    statement.write_string(0, 2, "2024").unwrap();
    statement.write_string(1, 0, "Revenue").unwrap();
    statement.write_string(1, 1, "$1,100").unwrap();
    statement.write_number(1, 2, 1250.0).unwrap();
    statement.write_string(2, 0, "Net Income").unwrap();
    statement.write_string(2, 1, "(50)").unwrap();
    let notes = workbook.add_worksheet();
    notes.write_string(0, 0, "Notes").unwrap();
    workbook.save(file.path()).unwrap();

    let table = load_table(file.path()).unwrap();

    assert_eq!(table.format, SourceFormat::Excel);
    assert!(table.file_name.ends_with(".xlsx"));
    assert_eq!(
        table.frame.get_column_names_str(),
        vec!["Metric", "2023", "2024"]
    );
    for column in table.frame.get_columns() {
        assert_eq!(column.dtype(), &DataType::String);
    }
    let y2023 = table.frame.column("2023").unwrap().str().unwrap();
    assert_eq!(y2023.get(1), Some("(50)"));
    let y2024 = table.frame.column("2024").unwrap().str().unwrap();
    assert_eq!(y2024.get(0), Some("1250"));
    assert_eq!(y2024.get(1), None);
}

#[test]
fn corrupt_workbook_is_load_failure() {
    let file = write_table(".xlsx", "not really a workbook");
    let result = load_table(file.path());

    assert!(matches!(result, Err(IngestError::Workbook { .. })));
}

#[test]
fn rejects_unknown_extension() {
    let file = write_table(".pdf", "%PDF-1.7");
    let result = load_table(file.path());

    assert!(matches!(
        result,
        Err(IngestError::UnsupportedExtension { .. })
    ));
}

#[test]
fn missing_file_is_not_found() {
    let result = load_table(Path::new("/definitely/not/here/q4.csv"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn empty_file_is_empty_table() {
    let file = write_table(".csv", "");
    let result = load_table(file.path());

    assert!(matches!(result, Err(IngestError::EmptyTable { .. })));
}
