//! Whole-column normalization.
//!
//! Column helpers only replace cell payloads; they never reorder, drop, or
//! add rows.

use fin_common::{CellValue, column_cells};
use polars::prelude::{AnyValue, Column, IntoColumn, NamedFrom, Series};

use crate::error::ColumnProcessingFailure;
use crate::fallback::fallback_convert;
use crate::normalizer::normalize_lenient;

/// The result of normalizing one column of plain cells.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedColumn {
    /// The column was excluded and is returned untouched.
    Passthrough(Vec<CellValue>),
    /// Canonical values, one per input cell.
    Numeric(Vec<Option<f64>>),
}

impl NormalizedColumn {
    pub fn len(&self) -> usize {
        match self {
            Self::Passthrough(values) => values.len(),
            Self::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the canonical values, or `None` for a passthrough column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match self {
            Self::Numeric(values) => Some(values),
            Self::Passthrough(_) => None,
        }
    }
}

/// Normalizes every cell unless the column is excluded.
pub fn normalize_column(values: &[CellValue], excluded: bool) -> NormalizedColumn {
    if excluded {
        return NormalizedColumn::Passthrough(values.to_vec());
    }
    NormalizedColumn::Numeric(values.iter().map(normalize_lenient).collect())
}

/// Normalizes a Polars column into a `Float64` column of the same name.
pub fn normalize_series(column: &Column) -> Result<Column, ColumnProcessingFailure> {
    let name = column.name().clone();
    let span = tracing::debug_span!("normalize_column", column = %name);
    let _guard = span.enter();

    let cells = column_cells(column).map_err(|source| ColumnProcessingFailure::Read {
        column: name.to_string(),
        source,
    })?;
    let values: Vec<Option<f64>> = cells.iter().map(normalize_lenient).collect();
    Ok(Series::new(name, values).into_column())
}

/// Cleans a Polars column with the simplified fallback converter.
///
/// Unreadable cells become null rather than failing the column.
pub fn fallback_series(column: &Column) -> Column {
    let values: Vec<Option<f64>> = (0..column.len())
        .map(|idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            fallback_convert(&CellValue::from(value))
        })
        .collect();
    Series::new(column.name().clone(), values).into_column()
}
