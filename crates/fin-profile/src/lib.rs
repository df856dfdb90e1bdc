//! Financial dataset profiling.
//!
//! Takes a loaded table, normalizes every numeric column, and describes the
//! result: orientation, the period and metric vocabulary, per-column
//! statistics, and a short preview of normalized rows.
//!
//! # Example
//!
//! ```
//! use fin_profile::{DatasetProfiler, Orientation};
//! use polars::prelude::*;
//!
//! let table = df!(
//!     "Metric" => ["Revenue", "Net Income"],
//!     "2023" => ["$1,000", "(50)"],
//!     "2024" => ["$1,250", "N/A"],
//! )
//! .unwrap();
//!
//! let (profile, normalized) = DatasetProfiler::new().profile(&table, "pnl.csv");
//! assert_eq!(profile.orientation, Orientation::Wide);
//! assert_eq!(profile.periods, ["2023", "2024"]);
//! assert!(profile.has_metric("Net Income"));
//! assert_eq!(normalized.column("2023").unwrap().f64().unwrap().get(1), Some(-50.0));
//! ```

mod audit;
mod exclusion;
mod options;
mod orientation;
mod profiler;
mod stats;
mod types;

// === Profiling ===
pub use profiler::DatasetProfiler;

// === Configuration ===
pub use options::ProfilerOptions;

// === Profile Types ===
pub use types::{
    ColumnKind, ColumnProfile, ColumnStats, DatasetProfile, DistinctStats, NumericStats,
    Orientation,
};

// === Building Blocks ===
pub use audit::{TableFormatAudit, audit_table};
pub use exclusion::{LABEL_COLUMN_POSITION, METRIC_COLUMN, clean_headers, is_excluded};
pub use orientation::{count_year_headers, detect_orientation, discover_vocabulary};
pub use stats::{describe_column, distinct_stats, numeric_stats, sample_rows};
