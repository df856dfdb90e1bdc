//! Header cleanup and label-column detection.

use fin_common::is_numeric_dtype;
use polars::prelude::{Column, DataFrame};

use crate::options::ProfilerOptions;

/// Name given to an unnamed non-numeric first column.
pub const METRIC_COLUMN: &str = "Metric";

/// Returns true for header names that carry no meaning of their own.
fn is_unnamed(name: &str) -> bool {
    let name = name.trim();
    name.is_empty()
        || name.eq_ignore_ascii_case("index")
        || name == "column_1"
        || name.starts_with("Unnamed: ")
}

/// Trims header names and names an anonymous first column `Metric`.
///
/// A rename that would collide with an existing header is skipped.
pub fn clean_headers(table: &DataFrame) -> DataFrame {
    let mut df = table.clone();
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for (idx, old) in names.iter().enumerate() {
        let new = if idx == 0
            && is_unnamed(old)
            && !df
                .get_columns()
                .first()
                .is_some_and(|column| is_numeric_dtype(column.dtype()))
        {
            METRIC_COLUMN.to_string()
        } else {
            old.trim().to_string()
        };
        if &new == old {
            continue;
        }
        if let Err(error) = df.rename(old, new.as_str().into()) {
            tracing::warn!(column = %old, renamed = %new, %error, "header rename skipped");
        }
    }

    df
}

/// Position of the designated label column: metrics in a wide table,
/// periods in a long one.
pub const LABEL_COLUMN_POSITION: usize = 0;

/// Decides whether a column is left out of numeric normalization.
///
/// The designated label column is always excluded, whatever its cells look
/// like, so codes such as `0100` keep their text. Any other column named like
/// a label is excluded as well.
pub fn is_excluded(column: &Column, position: usize, options: &ProfilerOptions) -> bool {
    position == LABEL_COLUMN_POSITION || options.is_label_name(column.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn text_column(name: &str, values: &[&str]) -> Column {
        Series::new(name.into(), values).into_column()
    }

    #[test]
    fn test_unnamed_first_column_becomes_metric() {
        let df = DataFrame::new(vec![
            text_column("", &["Revenue", "Costs"]),
            text_column(" 2023 ", &["100", "50"]),
        ])
        .unwrap();
        let cleaned = clean_headers(&df);
        assert_eq!(cleaned.get_column_names_str(), vec!["Metric", "2023"]);
    }

    #[test]
    fn test_numeric_index_keeps_its_name() {
        let df = DataFrame::new(vec![
            Series::new("index".into(), &[0i64, 1]).into_column(),
            text_column("2023", &["100", "50"]),
        ])
        .unwrap();
        let cleaned = clean_headers(&df);
        assert_eq!(cleaned.get_column_names_str(), vec!["index", "2023"]);
    }

    #[test]
    fn test_label_name_excluded_anywhere() {
        let options = ProfilerOptions::default();
        let column = text_column("Account", &["100", "200"]);
        assert!(is_excluded(&column, 3, &options));
    }

    #[test]
    fn test_label_column_excluded_whatever_its_content() {
        let options = ProfilerOptions::default();
        let labels = text_column("Line item", &["Revenue", "Costs", "N/A"]);
        assert!(is_excluded(&labels, 0, &options));

        let codes = text_column("Code", &["0100", "0200", "1,000"]);
        assert!(is_excluded(&codes, 0, &options));
    }

    #[test]
    fn test_other_columns_need_a_label_name() {
        let options = ProfilerOptions::default();
        let notes = text_column("Notes", &["see above", "restated"]);
        assert!(!is_excluded(&notes, 1, &options));

        let amounts = text_column("Q1", &["$100", "(20)"]);
        assert!(!is_excluded(&amounts, 2, &options));
    }
}
