//! Profiler tunables.

use serde::{Deserialize, Serialize};

use crate::types::Orientation;

/// Configuration for [`DatasetProfiler`](crate::DatasetProfiler).
///
/// Every field has a default, so a partial TOML table is enough to override
/// a single setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerOptions {
    /// Column names (case-insensitive) that mark a label column.
    pub label_columns: Vec<String>,

    /// Number of normalized rows kept as the profile preview.
    pub sample_rows: usize,

    /// Number of distinct sample values reported for non-numeric columns.
    pub sample_values: usize,

    /// Forces the orientation instead of detecting it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Minimum count of year-like headers for the year heuristic to fire.
    pub min_year_columns: usize,
}

impl Default for ProfilerOptions {
    fn default() -> Self {
        Self {
            label_columns: ["metric", "metrics", "account", "item"]
                .into_iter()
                .map(String::from)
                .collect(),
            sample_rows: 3,
            sample_values: 5,
            orientation: None,
            min_year_columns: 2,
        }
    }
}

impl ProfilerOptions {
    /// Returns true when `name` is one of the configured label column names.
    pub fn is_label_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.label_columns
            .iter()
            .any(|label| label.trim().eq_ignore_ascii_case(name))
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}
