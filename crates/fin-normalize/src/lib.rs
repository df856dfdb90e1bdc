//! Financial value normalization.
//!
//! Converts raw spreadsheet cells such as `$26,914`, `($1,500)`, `125.9%`,
//! `1.5e6` or `3/4` into canonical `Option<f64>` values, where `None` marks a
//! missing value.
//!
//! # Overview
//!
//! - **Rules**: one ordered table of format rules, shared by conversion and
//!   by the diagnostic format audit so the two can never disagree
//! - **Normalizer**: single-cell conversion with first-match-wins precedence
//!   and an embedded-number extraction fallback
//! - **Columns**: whole-column helpers over plain cells and Polars columns
//! - **Fallback**: the simplified converter used when a whole column fails
//! - **Audit**: per-category counts and examples for messy inputs
//!
//! # Example
//!
//! ```
//! use fin_common::CellValue;
//! use fin_normalize::ValueNormalizer;
//!
//! let normalizer = ValueNormalizer::new();
//! assert_eq!(normalizer.normalize(&CellValue::text("($1,500)")), Ok(Some(-1500.0)));
//! assert_eq!(normalizer.normalize(&CellValue::text("N/A")), Ok(None));
//! ```
//!
//! # Design Principles
//!
//! - **Never fatal**: bad cells degrade to `None` with a logged warning
//! - **Pure**: a value's result depends only on the cell and the static rules
//! - **Order preserving**: column helpers never reorder or drop rows

mod audit;
mod category;
mod column;
mod error;
mod fallback;
mod normalizer;
mod rules;

pub use audit::{FormatAuditReport, FormatBucket, MAX_AUDIT_EXAMPLES, classify_distribution};
pub use category::FormatCategory;
pub use column::{NormalizedColumn, fallback_series, normalize_column, normalize_series};
pub use error::{ColumnProcessingFailure, ConversionFailure, NormalizeWarning};
pub use fallback::fallback_convert;
pub use normalizer::{ValueNormalizer, classify, normalize, normalize_lenient};
pub use rules::{MISSING_TOKENS, is_missing_token};
