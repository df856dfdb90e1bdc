//! Profile data types.

use std::fmt;

use fin_common::CellValue;
use serde::{Deserialize, Serialize};

/// Table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Periods are columns, line items are rows.
    #[default]
    Wide,
    /// Periods are rows, line items are columns.
    Long,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column is described in the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Non-numeric first column holding line-item labels.
    Category,
    Numeric,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Numeric => write!(f, "numeric"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Statistics for a numeric column. Each is `None` when no finite value exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub null_count: usize,
}

/// Distinct-value statistics for a category or text column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistinctStats {
    /// Distinct values, counting missing as one value.
    pub unique_values: usize,
    /// First few distinct non-missing values by first occurrence.
    pub sample_values: Vec<CellValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Distinct(DistinctStats),
}

/// Descriptor for one column of the normalized table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    #[serde(flatten)]
    pub stats: ColumnStats,
}

impl ColumnProfile {
    pub fn numeric_stats(&self) -> Option<&NumericStats> {
        match &self.stats {
            ColumnStats::Numeric(stats) => Some(stats),
            ColumnStats::Distinct(_) => None,
        }
    }

    pub fn distinct_stats(&self) -> Option<&DistinctStats> {
        match &self.stats {
            ColumnStats::Distinct(stats) => Some(stats),
            ColumnStats::Numeric(_) => None,
        }
    }
}

/// Structured description of one profiled table.
///
/// `periods` and `metrics` are the vocabulary downstream consumers validate
/// query parameters against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetProfile {
    pub file_name: String,
    pub row_count: usize,
    pub column_count: usize,
    #[serde(rename = "format")]
    pub orientation: Orientation,
    pub periods: Vec<String>,
    pub metrics: Vec<String>,
    pub columns: Vec<ColumnProfile>,
    /// First normalized rows, positional and aligned with `columns`.
    pub sample_rows: Vec<Vec<CellValue>>,
}

impl DatasetProfile {
    /// Returns true when `period` is one of the discovered periods.
    pub fn has_period(&self, period: &str) -> bool {
        let period = period.trim();
        self.periods.iter().any(|p| p == period)
    }

    /// Returns true when `metric` is one of the discovered metrics.
    pub fn has_metric(&self, metric: &str) -> bool {
        let metric = metric.trim();
        self.metrics.iter().any(|m| m == metric)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|column| column.name == name)
    }
}
