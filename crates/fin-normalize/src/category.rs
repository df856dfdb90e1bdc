//! Format categories recognized by the rule table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The textual number format a raw value was recognized as.
///
/// Variants are declared in rule precedence order, which is also the order
/// categories appear in audit reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    /// `$26,914`
    Currency,
    /// `($1,500)`
    NegativeCurrency,
    /// `125.9%`
    Percentage,
    /// `(1,500)`
    AccountingNegative,
    /// `1.5e6`
    Scientific,
    /// `3/4`
    Fraction,
    /// `9,439`
    CommaGroupedNumber,
    /// `123.45`
    PlainNumber,
    Unrecognized,
    Missing,
}

impl FormatCategory {
    /// All categories in precedence order.
    pub const ALL: [FormatCategory; 10] = [
        Self::Currency,
        Self::NegativeCurrency,
        Self::Percentage,
        Self::AccountingNegative,
        Self::Scientific,
        Self::Fraction,
        Self::CommaGroupedNumber,
        Self::PlainNumber,
        Self::Unrecognized,
        Self::Missing,
    ];

    /// Stable snake_case name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::NegativeCurrency => "negative_currency",
            Self::Percentage => "percentage",
            Self::AccountingNegative => "accounting_negative",
            Self::Scientific => "scientific",
            Self::Fraction => "fraction",
            Self::CommaGroupedNumber => "comma_grouped_number",
            Self::PlainNumber => "plain_number",
            Self::Unrecognized => "unrecognized",
            Self::Missing => "missing",
        }
    }

    /// Returns true for categories that carry a numeric payload.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Unrecognized | Self::Missing)
    }
}

impl fmt::Display for FormatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
