//! Financial table loading.
//!
//! This crate turns uploaded spreadsheet exports into in-memory Polars
//! DataFrames for the profiler. It is the only place a load can fail hard:
//! once a table exists, messy content is tolerated downstream.
//!
//! # Features
//!
//! - **Delimited files**: `.csv`, `.tsv` and `.txt` with every column read as text
//! - **Workbooks**: `.xlsx`, `.xlsm` and `.xls`, first sheet only, cells kept as displayed text
//! - **Pre-flight checks**: existence, size limit, and UTF-16 detection
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fin_ingest::load_table;
//!
//! let table = load_table(Path::new("exports/income_statement.csv"))?;
//! println!("{} rows from {}", table.frame.height(), table.file_name);
//! ```

mod csv;
mod error;
mod excel;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_TABLE_FILE_SIZE, check_file_size, check_file_size_with_limit, read_delimited,
    validate_encoding,
};

// === Spreadsheet Reading ===
pub use excel::read_workbook;

// === Table Loading ===
pub use loader::{LoadedTable, SourceFormat, load_table};
