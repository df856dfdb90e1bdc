//! Per-column descriptive statistics and the row preview.

use std::collections::HashSet;

use fin_common::{CellValue, column_cells, is_numeric_dtype};
use polars::prelude::{Column, DataFrame};

use crate::types::{ColumnKind, ColumnProfile, ColumnStats, DistinctStats, NumericStats};

/// Cells of a column, or an empty list when they cannot be read.
pub(crate) fn column_values(column: &Column) -> Vec<CellValue> {
    column_cells(column).unwrap_or_else(|error| {
        tracing::warn!(column = %column.name(), %error, "column could not be read");
        Vec::new()
    })
}

/// Min, max and mean over finite values, plus the missing count.
pub fn numeric_stats(values: &[CellValue]) -> NumericStats {
    let null_count = values.iter().filter(|cell| cell.is_absent()).count();
    let finite: Vec<f64> = values
        .iter()
        .filter_map(CellValue::as_number)
        .filter(|v| v.is_finite())
        .collect();

    if finite.is_empty() {
        return NumericStats {
            min: None,
            max: None,
            mean: None,
            null_count,
        };
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    NumericStats {
        min: Some(min),
        max: Some(max),
        mean: Some(mean),
        null_count,
    }
}

/// Distinct count (missing counts once) and the first `limit` distinct
/// non-missing values.
pub fn distinct_stats(values: &[CellValue], limit: usize) -> DistinctStats {
    let mut seen: HashSet<String> = HashSet::new();
    let mut has_missing = false;
    let mut sample_values = Vec::new();

    for cell in values {
        if cell.is_absent() {
            has_missing = true;
            continue;
        }
        if seen.insert(cell.as_text().into_owned()) && sample_values.len() < limit {
            sample_values.push(cell.clone());
        }
    }

    DistinctStats {
        unique_values: seen.len() + usize::from(has_missing),
        sample_values,
    }
}

/// Describes one column of the normalized table.
///
/// A non-numeric first column is the table's category column.
pub fn describe_column(column: &Column, position: usize, sample_limit: usize) -> ColumnProfile {
    let values = column_values(column);
    let numeric = is_numeric_dtype(column.dtype());

    let (kind, stats) = if numeric {
        (ColumnKind::Numeric, ColumnStats::Numeric(numeric_stats(&values)))
    } else {
        let kind = if position == 0 {
            ColumnKind::Category
        } else {
            ColumnKind::Text
        };
        (kind, ColumnStats::Distinct(distinct_stats(&values, sample_limit)))
    };

    ColumnProfile {
        name: column.name().to_string(),
        kind,
        stats,
    }
}

/// The first `count` rows, each aligned with the column order.
pub fn sample_rows(df: &DataFrame, count: usize) -> Vec<Vec<CellValue>> {
    let rows = df.height().min(count);
    (0..rows)
        .map(|row| {
            df.get_columns()
                .iter()
                .map(|column| column.get(row).map(CellValue::from).unwrap_or_default())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_numeric_stats_skip_missing() {
        let values = vec![
            CellValue::Float(10.0),
            CellValue::Absent,
            CellValue::Float(-4.0),
            CellValue::Float(f64::NAN),
        ];
        let stats = numeric_stats(&values);
        assert_eq!(stats.min, Some(-4.0));
        assert_eq!(stats.max, Some(10.0));
        assert_eq!(stats.mean, Some(3.0));
        assert_eq!(stats.null_count, 2);
    }

    #[test]
    fn test_all_missing_numeric_column() {
        let values = vec![CellValue::Absent; 4];
        let stats = numeric_stats(&values);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.null_count, 4);
    }

    #[test]
    fn test_distinct_stats_first_occurrence() {
        let values: Vec<CellValue> = ["b", "a", "b", "c", "d", "e", "f"]
            .into_iter()
            .map(CellValue::text)
            .chain([CellValue::Absent])
            .collect();
        let stats = distinct_stats(&values, 5);
        assert_eq!(stats.unique_values, 7);
        assert_eq!(
            stats.sample_values,
            ["b", "a", "c", "d", "e"].map(CellValue::text).to_vec()
        );
    }

    #[test]
    fn test_describe_first_text_column_as_category() {
        let labels = Series::new("Metric".into(), &["Revenue", "Costs"]).into_column();
        let notes = Series::new("Notes".into(), &["ok", "ok"]).into_column();
        let amounts = Series::new("2023".into(), &[Some(5.0), None]).into_column();

        assert_eq!(describe_column(&labels, 0, 5).kind, ColumnKind::Category);
        assert_eq!(describe_column(&notes, 2, 5).kind, ColumnKind::Text);
        let numeric = describe_column(&amounts, 1, 5);
        assert_eq!(numeric.kind, ColumnKind::Numeric);
        assert_eq!(numeric.numeric_stats().unwrap().null_count, 1);
    }

    #[test]
    fn test_sample_rows_are_positional() {
        let df = DataFrame::new(vec![
            Series::new("Metric".into(), &["Revenue", "Costs", "Tax", "Net"]).into_column(),
            Series::new("2023".into(), &[Some(1.5), None, Some(3.0), Some(4.0)]).into_column(),
        ])
        .unwrap();
        let rows = sample_rows(&df, 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![CellValue::text("Revenue"), CellValue::Float(1.5)]);
        assert_eq!(rows[1], vec![CellValue::text("Costs"), CellValue::Absent]);
    }
}
