//! Format distribution audits.
//!
//! Diagnostic only: the audit never feeds back into conversion decisions. It
//! classifies with the same rule table as the converter.

use std::collections::BTreeMap;

use fin_common::CellValue;
use serde::Serialize;

use crate::category::FormatCategory;
use crate::normalizer::classify;

/// Maximum number of raw examples kept per category.
pub const MAX_AUDIT_EXAMPLES: usize = 5;

/// Count and first few raw examples for one format category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormatBucket {
    pub count: usize,
    pub examples: Vec<String>,
}

/// How many raw values fell into each format category.
///
/// Only categories that occurred are present, in precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormatAuditReport {
    buckets: BTreeMap<FormatCategory, FormatBucket>,
}

impl FormatAuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one value. `raw` is `None` for cells with no text at all.
    pub fn record(&mut self, category: FormatCategory, raw: Option<&str>) {
        let bucket = self.buckets.entry(category).or_default();
        bucket.count += 1;
        if let Some(raw) = raw
            && bucket.examples.len() < MAX_AUDIT_EXAMPLES
        {
            bucket.examples.push(raw.to_string());
        }
    }

    pub fn get(&self, category: FormatCategory) -> Option<&FormatBucket> {
        self.buckets.get(&category)
    }

    /// Number of values recorded for a category (0 when absent).
    pub fn count(&self, category: FormatCategory) -> usize {
        self.get(category).map_or(0, |bucket| bucket.count)
    }

    /// Total number of values recorded.
    pub fn total(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormatCategory, &FormatBucket)> {
        self.buckets.iter().map(|(category, bucket)| (*category, bucket))
    }
}

/// Classifies every raw value and tallies the categories.
pub fn classify_distribution<'a, I>(values: I) -> FormatAuditReport
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut report = FormatAuditReport::new();
    for value in values {
        let category = classify(value);
        if value.is_absent() {
            report.record(category, None);
        } else {
            report.record(category, Some(value.as_text().trim()));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<CellValue> {
        values.iter().copied().map(CellValue::text).collect()
    }

    #[test]
    fn test_counts_by_category() {
        let values = cells(&["$1", "$2", "(3)", "4%", "n/a", "abc", "($5)"]);
        let report = classify_distribution(&values);

        assert_eq!(report.count(FormatCategory::Currency), 2);
        assert_eq!(report.count(FormatCategory::NegativeCurrency), 1);
        assert_eq!(report.count(FormatCategory::AccountingNegative), 1);
        assert_eq!(report.count(FormatCategory::Percentage), 1);
        assert_eq!(report.count(FormatCategory::Missing), 1);
        assert_eq!(report.count(FormatCategory::Unrecognized), 1);
        assert_eq!(report.count(FormatCategory::Fraction), 0);
        assert_eq!(report.total(), values.len());
    }

    #[test]
    fn test_examples_capped_at_five() {
        let values = cells(&["1", "2", "3", "4", "5", "6", "7"]);
        let report = classify_distribution(&values);
        let bucket = report.get(FormatCategory::CommaGroupedNumber).unwrap();

        assert_eq!(bucket.count, 7);
        assert_eq!(bucket.examples, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_absent_cells_count_without_examples() {
        let values = vec![CellValue::Absent, CellValue::text(" NULL ")];
        let report = classify_distribution(&values);
        let bucket = report.get(FormatCategory::Missing).unwrap();

        assert_eq!(bucket.count, 2);
        assert_eq!(bucket.examples, vec!["NULL"]);
    }

    #[test]
    fn test_iterates_in_precedence_order() {
        let values = cells(&["abc", "9,439", "$1"]);
        let report = classify_distribution(&values);
        let order: Vec<FormatCategory> = report.iter().map(|(category, _)| category).collect();

        assert_eq!(
            order,
            vec![
                FormatCategory::Currency,
                FormatCategory::CommaGroupedNumber,
                FormatCategory::Unrecognized
            ]
        );
    }
}
