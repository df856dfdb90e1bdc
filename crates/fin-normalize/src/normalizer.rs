//! Single-cell normalization.

use fin_common::CellValue;
use polars::prelude::Column;

use crate::audit::{FormatAuditReport, classify_distribution};
use crate::category::FormatCategory;
use crate::column::{NormalizedColumn, normalize_column, normalize_series};
use crate::error::{ColumnProcessingFailure, NormalizeWarning};
use crate::rules::{classify_text, extract_embedded, is_missing_token, matching_rule};

/// Converts one raw cell into its canonical value.
///
/// `Ok(None)` means the cell is a recognized missing marker. An `Err` is a
/// non-fatal warning: the caller should record `None` and move on.
///
/// Precedence, first match wins:
/// missing token, currency, negative currency, percentage, accounting
/// negative, scientific, fraction, comma-grouped number, plain number, and
/// finally extraction of an embedded currency, percentage, or number.
pub fn normalize(raw: &CellValue) -> Result<Option<f64>, NormalizeWarning> {
    match raw {
        CellValue::Absent => Ok(None),
        CellValue::Integer(v) => Ok(Some(*v as f64)),
        CellValue::Float(v) if v.is_nan() => Ok(None),
        CellValue::Float(v) if v.is_finite() => Ok(Some(*v)),
        CellValue::Float(v) => Err(NormalizeWarning::Unparseable { raw: v.to_string() }),
        CellValue::Text(text) => normalize_text(text),
    }
}

fn normalize_text(text: &str) -> Result<Option<f64>, NormalizeWarning> {
    let trimmed = text.trim();
    if is_missing_token(trimmed) {
        return Ok(None);
    }

    if let Some(rule) = matching_rule(trimmed) {
        return rule
            .convert(trimmed)
            .map(Some)
            .map_err(|reason| NormalizeWarning::FormatConversion {
                raw: trimmed.to_string(),
                category: rule.category,
                reason,
            });
    }

    // Last resort: pull a number out of mixed text ("Revenue: $1,234").
    match extract_embedded(trimmed) {
        Some((extractor, fragment)) => extractor.convert(fragment).map(Some).map_err(|reason| {
            NormalizeWarning::FormatConversion {
                raw: trimmed.to_string(),
                category: extractor.category,
                reason,
            }
        }),
        None => Err(NormalizeWarning::Unparseable {
            raw: trimmed.to_string(),
        }),
    }
}

/// Like [`normalize`], but logs warnings and degrades them to `None`.
pub fn normalize_lenient(raw: &CellValue) -> Option<f64> {
    match normalize(raw) {
        Ok(value) => value,
        Err(warning @ NormalizeWarning::FormatConversion { .. }) => {
            tracing::warn!(value = %warning.raw(), error = %warning, "Failed to convert value, setting to null");
            None
        }
        Err(warning) => {
            tracing::debug!(value = %warning.raw(), "Unrecognized value, setting to null");
            None
        }
    }
}

/// Buckets a raw cell into its format category.
///
/// Numbers are classified by their textual form, so `26914.0` reports as a
/// comma-grouped number, the same as the text `26914`.
pub fn classify(raw: &CellValue) -> FormatCategory {
    if raw.is_absent() {
        return FormatCategory::Missing;
    }
    classify_text(raw.as_text().trim())
}

/// Owned handle on the normalization rules.
///
/// Holds no mutable state; the rule table is static and shared read-only, so
/// one normalizer can serve any number of tables or threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueNormalizer;

impl ValueNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// See [`normalize`].
    pub fn normalize(&self, raw: &CellValue) -> Result<Option<f64>, NormalizeWarning> {
        normalize(raw)
    }

    /// See [`normalize_lenient`].
    pub fn normalize_lenient(&self, raw: &CellValue) -> Option<f64> {
        normalize_lenient(raw)
    }

    /// See [`classify`].
    pub fn classify(&self, raw: &CellValue) -> FormatCategory {
        classify(raw)
    }

    /// See [`normalize_column`].
    pub fn normalize_column(&self, values: &[CellValue], excluded: bool) -> NormalizedColumn {
        normalize_column(values, excluded)
    }

    /// See [`normalize_series`].
    pub fn normalize_series(&self, column: &Column) -> Result<Column, ColumnProcessingFailure> {
        normalize_series(column)
    }

    /// See [`classify_distribution`].
    pub fn classify_distribution<'a, I>(&self, values: I) -> FormatAuditReport
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        classify_distribution(values)
    }
}
