//! Orientation detection and period/metric discovery.

use std::collections::HashSet;
use std::sync::LazyLock;

use fin_common::CellValue;
use polars::prelude::{Column, DataFrame};
use regex::Regex;

use crate::options::ProfilerOptions;
use crate::stats::column_values;
use crate::types::Orientation;

/// Year-like header (1900-2099), anywhere in the name, e.g. `FY2023`.
static YEAR_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)[0-9]{2}").expect("Invalid year header regex"));

/// Number of headers that contain a year.
pub fn count_year_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> usize {
    headers
        .into_iter()
        .filter(|header| YEAR_HEADER.is_match(header))
        .count()
}

/// Decides whether periods run across columns or down rows.
///
/// Financial statements are wide by convention, so a table without year
/// headers is still reported as wide. Long is only produced by an explicit
/// override in the options.
pub fn detect_orientation<'a>(
    headers: impl IntoIterator<Item = &'a str>,
    options: &ProfilerOptions,
) -> Orientation {
    if let Some(forced) = options.orientation {
        tracing::debug!(orientation = %forced, "orientation set by options");
        return forced;
    }
    let year_columns = count_year_headers(headers);
    if year_columns >= options.min_year_columns {
        tracing::debug!(year_columns, "year headers found, table is wide");
    } else {
        tracing::debug!(year_columns, "no year header pattern, assuming wide");
    }
    Orientation::Wide
}

/// Distinct non-missing values of a column as text, by first occurrence.
fn distinct_labels(column: &Column) -> Vec<String> {
    let mut seen = HashSet::new();
    column_values(column)
        .iter()
        .filter(|cell| !cell.is_absent())
        .map(CellValue::as_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty() && seen.insert(text.clone()))
        .collect()
}

/// Discovers `(periods, metrics)` from the normalized table.
pub fn discover_vocabulary(df: &DataFrame, orientation: Orientation) -> (Vec<String>, Vec<String>) {
    let Some(first) = df.get_columns().first() else {
        return (Vec::new(), Vec::new());
    };
    let other_headers: Vec<String> = df
        .get_column_names()
        .iter()
        .skip(1)
        .map(|name| name.to_string())
        .collect();

    match orientation {
        Orientation::Wide => (other_headers, distinct_labels(first)),
        Orientation::Long => (distinct_labels(first), other_headers),
    }
}
