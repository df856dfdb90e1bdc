//! Non-fatal error types for value normalization.

use thiserror::Error;

use crate::category::FormatCategory;

/// Why a syntactically matched value could not produce a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionFailure {
    /// The numeric payload left after stripping symbols does not parse.
    #[error("invalid numeric payload '{0}'")]
    InvalidNumber(String),

    /// A fraction with a zero denominator.
    #[error("division by zero")]
    DivideByZero,

    /// The payload parses but is too large for a finite `f64`.
    #[error("numeric payload '{0}' is out of range")]
    OutOfRange(String),
}

/// A value that degraded to missing during normalization.
///
/// These never abort a pipeline; callers log them and record `None`.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NormalizeWarning {
    /// A rule matched but its payload could not be converted.
    #[error("failed to convert '{raw}' as {category}: {reason}")]
    FormatConversion {
        raw: String,
        category: FormatCategory,
        #[source]
        reason: ConversionFailure,
    },

    /// No rule matched, even after embedded-number extraction.
    #[error("no numeric format recognized in '{raw}'")]
    Unparseable { raw: String },
}

impl NormalizeWarning {
    /// The raw text that triggered the warning.
    pub fn raw(&self) -> &str {
        match self {
            Self::FormatConversion { raw, .. } | Self::Unparseable { raw } => raw,
        }
    }
}

/// An entire column's cleaning pipeline failed.
///
/// The profiler answers this by running the simplified fallback converter on
/// that column only.
#[derive(Debug, Error)]
pub enum ColumnProcessingFailure {
    /// Reading cells from the source column failed.
    #[error("failed to read column '{column}': {source}")]
    Read {
        column: String,
        #[source]
        source: polars::error::PolarsError,
    },
}
