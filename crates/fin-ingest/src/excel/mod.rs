//! Spreadsheet reading utilities.

mod reader;

pub use reader::read_workbook;
