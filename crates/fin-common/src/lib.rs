//! Shared utilities for the financial table crates.
//!
//! This crate provides the raw [`CellValue`] model that every other crate in
//! the workspace speaks, plus Polars `AnyValue` helpers used to move between
//! DataFrames and cells.

pub mod any_value;
pub mod cell;

pub use cell::CellValue;

// Re-export commonly used functions at crate root for convenience
pub use any_value::{any_to_string, column_cells, format_numeric, is_numeric_dtype};
