//! Raw scalar cells as they arrive from a loaded table.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::any_value::format_numeric;

/// A raw scalar cell before normalization.
///
/// Serializes untagged, so a cell renders as a JSON string, number, or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value at all (null in the source table).
    #[default]
    Absent,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for absent cells and NaN floats.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Returns the numeric payload of integer and float cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the textual form of the cell.
    ///
    /// Absent cells render as an empty string and floats drop trailing zeros.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed(""),
            Self::Integer(v) => Cow::Owned(v.to_string()),
            Self::Float(v) => Cow::Owned(format_numeric(*v)),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
