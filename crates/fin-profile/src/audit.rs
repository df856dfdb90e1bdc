//! Table-level format audit over the raw, un-normalized table.

use fin_normalize::{FormatAuditReport, classify_distribution};
use polars::prelude::DataFrame;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::exclusion::METRIC_COLUMN;
use crate::stats::column_values;

/// Format audits per column, in table column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFormatAudit {
    columns: Vec<(String, FormatAuditReport)>,
}

impl TableFormatAudit {
    pub fn get(&self, column: &str) -> Option<&FormatAuditReport> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, report)| report)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormatAuditReport)> {
        self.columns
            .iter()
            .map(|(name, report)| (name.as_str(), report))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for TableFormatAudit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, report) in &self.columns {
            map.serialize_entry(name, report)?;
        }
        map.end()
    }
}

/// Audits the number formats of every data column.
///
/// The first column and any column named `Metric` are skipped, missing cells
/// are dropped, and columns left with no values are omitted.
pub fn audit_table(table: &DataFrame) -> TableFormatAudit {
    let columns = table
        .get_columns()
        .iter()
        .skip(1)
        .filter(|column| column.name().as_str() != METRIC_COLUMN)
        .filter_map(|column| {
            let values: Vec<_> = column_values(column)
                .into_iter()
                .filter(|cell| !cell.is_absent())
                .collect();
            if values.is_empty() {
                return None;
            }
            Some((column.name().to_string(), classify_distribution(&values)))
        })
        .collect();

    TableFormatAudit { columns }
}
