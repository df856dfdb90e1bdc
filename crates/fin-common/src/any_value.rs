//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including conversion into [`CellValue`] and string formatting.

use polars::prelude::{AnyValue, Column, DataType, PolarsResult};

use crate::cell::CellValue;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use fin_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("Revenue")), "Revenue");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    CellValue::from(value).as_text().into_owned()
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use fin_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Returns true for integer and floating-point dtypes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Reads every cell of a column, in row order.
pub fn column_cells(column: &Column) -> PolarsResult<Vec<CellValue>> {
    let mut cells = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        cells.push(CellValue::from(column.get(idx)?));
    }
    Ok(cells)
}

impl From<AnyValue<'_>> for CellValue {
    fn from(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => Self::Absent,
            AnyValue::Int8(v) => Self::Integer(i64::from(v)),
            AnyValue::Int16(v) => Self::Integer(i64::from(v)),
            AnyValue::Int32(v) => Self::Integer(i64::from(v)),
            AnyValue::Int64(v) => Self::Integer(v),
            AnyValue::UInt8(v) => Self::Integer(i64::from(v)),
            AnyValue::UInt16(v) => Self::Integer(i64::from(v)),
            AnyValue::UInt32(v) => Self::Integer(i64::from(v)),
            AnyValue::UInt64(v) => match i64::try_from(v) {
                Ok(v) => Self::Integer(v),
                Err(_) => Self::Float(v as f64),
            },
            AnyValue::Float32(v) => Self::Float(f64::from(v)),
            AnyValue::Float64(v) => Self::Float(v),
            AnyValue::String(s) => Self::Text(s.to_string()),
            AnyValue::StringOwned(s) => Self::Text(s.to_string()),
            AnyValue::Boolean(b) => Self::Text(b.to_string()),
            // For any other type, use Display but strip outer quotes if present
            other => {
                let s = other.to_string();
                if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                    Self::Text(s[1..s.len() - 1].to_string())
                } else {
                    Self::Text(s)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_numbers() {
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::Float64(1.50)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(2024.0)), "2024");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(-0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(1.259), "1.259");
    }

    #[test]
    fn test_cell_from_any_value() {
        assert_eq!(CellValue::from(AnyValue::Null), CellValue::Absent);
        assert_eq!(CellValue::from(AnyValue::Int32(7)), CellValue::Integer(7));
        assert_eq!(CellValue::from(AnyValue::Float32(0.5)), CellValue::Float(0.5));
        assert_eq!(
            CellValue::from(AnyValue::String("(1,500)")),
            CellValue::text("(1,500)")
        );
        assert_eq!(
            CellValue::from(AnyValue::Boolean(true)),
            CellValue::text("true")
        );
    }

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(is_numeric_dtype(&DataType::Int32));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_column_cells_preserves_order() {
        let column = Series::new("2023".into(), &[Some("$1"), None, Some("2%")]).into_column();
        let cells = column_cells(&column).unwrap();
        assert_eq!(
            cells,
            vec![CellValue::text("$1"), CellValue::Absent, CellValue::text("2%")]
        );
    }
}
