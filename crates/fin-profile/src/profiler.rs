//! The profiling pass.

use fin_normalize::{ValueNormalizer, fallback_series};
use polars::prelude::{Column, DataFrame};

use crate::audit::{TableFormatAudit, audit_table};
use crate::exclusion::{clean_headers, is_excluded};
use crate::options::ProfilerOptions;
use crate::orientation::{detect_orientation, discover_vocabulary};
use crate::stats::{describe_column, sample_rows};
use crate::types::{DatasetProfile, Orientation};

/// Applies value normalization across a table and describes the result.
///
/// Stateless between calls; one profiler can serve many tables.
#[derive(Debug, Clone, Default)]
pub struct DatasetProfiler {
    normalizer: ValueNormalizer,
    options: ProfilerOptions,
}

impl DatasetProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ProfilerOptions) -> Self {
        Self {
            normalizer: ValueNormalizer::new(),
            options,
        }
    }

    pub fn options(&self) -> &ProfilerOptions {
        &self.options
    }

    /// Profiles a loaded table.
    ///
    /// Never fails: unreadable cells become missing values and a column whose
    /// cleaning fails is converted with the simplified fallback instead.
    /// Returns the profile together with the normalized table.
    pub fn profile(&self, table: &DataFrame, display_name: &str) -> (DatasetProfile, DataFrame) {
        let span = tracing::info_span!(
            "profile",
            file = %display_name,
            rows = table.height(),
            columns = table.width()
        );
        let _guard = span.enter();

        let headed = clean_headers(table);
        let orientation = detect_orientation(
            headed.get_column_names().iter().map(|name| name.as_str()),
            &self.options,
        );
        let normalized = self.normalize_table(&headed, orientation);

        let (periods, metrics) = discover_vocabulary(&normalized, orientation);

        let columns = normalized
            .get_columns()
            .iter()
            .enumerate()
            .map(|(position, column)| {
                describe_column(column, position, self.options.sample_values)
            })
            .collect();

        let profile = DatasetProfile {
            file_name: display_name.to_string(),
            row_count: normalized.height(),
            column_count: normalized.width(),
            orientation,
            periods,
            metrics,
            columns,
            sample_rows: sample_rows(&normalized, self.options.sample_rows),
        };

        tracing::info!(
            orientation = %profile.orientation,
            periods = profile.periods.len(),
            metrics = profile.metrics.len(),
            "profiled table"
        );

        (profile, normalized)
    }

    /// Audits the number formats of a raw table.
    pub fn audit(&self, table: &DataFrame) -> TableFormatAudit {
        audit_table(&clean_headers(table))
    }

    /// Normalizes every non-excluded column of a header-cleaned table.
    fn normalize_table(&self, table: &DataFrame, orientation: Orientation) -> DataFrame {
        let columns: Vec<Column> = table
            .get_columns()
            .iter()
            .enumerate()
            .map(|(position, column)| self.normalize_column(column, position, orientation))
            .collect();

        DataFrame::new(columns).unwrap_or_else(|error| {
            tracing::warn!(%error, "normalized table could not be assembled, keeping raw table");
            table.clone()
        })
    }

    fn normalize_column(
        &self,
        column: &Column,
        position: usize,
        orientation: Orientation,
    ) -> Column {
        if is_excluded(column, position, &self.options) {
            let holds = match orientation {
                Orientation::Wide => "metrics",
                Orientation::Long => "periods",
            };
            tracing::debug!(column = %column.name(), holds, "label column left unconverted");
            return column.clone();
        }
        match self.normalizer.normalize_series(column) {
            Ok(cleaned) => cleaned,
            Err(error) => {
                tracing::error!(
                    column = %column.name(),
                    %error,
                    "column cleaning failed, using fallback converter"
                );
                fallback_series(column)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_profiler_is_send_sync() {
        assert_send_sync::<DatasetProfiler>();
    }

    #[test]
    fn test_empty_table() {
        let profiler = DatasetProfiler::new();
        let (profile, normalized) = profiler.profile(&DataFrame::empty(), "empty.csv");
        assert_eq!(profile.row_count, 0);
        assert_eq!(profile.column_count, 0);
        assert!(profile.periods.is_empty());
        assert!(profile.sample_rows.is_empty());
        assert_eq!(normalized.width(), 0);
    }
}
