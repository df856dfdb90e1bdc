//! The ordered format rule table.
//!
//! Conversion and classification both walk [`RULES`] in order, so what the
//! converter accepts and what the audit reports always agree.

use std::sync::LazyLock;

use regex::Regex;

use crate::category::FormatCategory;
use crate::error::ConversionFailure;

/// Case-sensitive tokens that mean "no value" in spreadsheet exports.
pub const MISSING_TOKENS: &[&str] = &[
    "-", "N/A", "n/a", "NA", "na", "NULL", "null", "None", "none", "", " ", "NaN", "nan", "#N/A",
    "#VALUE!", "#REF!", "#DIV/0!", "#NAME?", "#NUM!", "#NULL!",
];

const CURRENCY_SYMBOLS: &[char] = &['$', '£', '€', '¥', '₹'];

type Converter = fn(&str) -> Result<f64, ConversionFailure>;

/// One full-string format rule.
pub(crate) struct Rule {
    pub(crate) category: FormatCategory,
    pattern: Regex,
    convert: Converter,
}

impl Rule {
    fn new(category: FormatCategory, pattern: &str, convert: Converter) -> Self {
        Self {
            category,
            pattern: Regex::new(pattern).expect("Invalid format rule regex"),
            convert,
        }
    }

    pub(crate) fn convert(&self, value: &str) -> Result<f64, ConversionFailure> {
        (self.convert)(value)
    }
}

/// Full-string rules, first match wins. A symbol-bearing parenthetical must
/// be tested before the bare accounting negative.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            FormatCategory::Currency,
            r"^[$£€¥₹][0-9,]+\.?[0-9]*$",
            convert_currency,
        ),
        Rule::new(
            FormatCategory::NegativeCurrency,
            r"^\([$£€¥₹][0-9,]+\.?[0-9]*\)$",
            convert_negative_currency,
        ),
        Rule::new(
            FormatCategory::Percentage,
            r"^-?[0-9,]+\.?[0-9]*%$",
            convert_percentage,
        ),
        Rule::new(
            FormatCategory::AccountingNegative,
            r"^\([0-9,]+\.?[0-9]*\)$",
            convert_accounting_negative,
        ),
        Rule::new(
            FormatCategory::Scientific,
            r"^-?[0-9.]+[eE][+-]?[0-9]+$",
            parse_payload,
        ),
        Rule::new(FormatCategory::Fraction, r"^[0-9]+/[0-9]+$", convert_fraction),
        Rule::new(
            FormatCategory::CommaGroupedNumber,
            r"^-?[0-9,]+\.?[0-9]*$",
            convert_comma_grouped,
        ),
        Rule::new(FormatCategory::PlainNumber, r"^-?[0-9.]+$", parse_payload),
    ]
});

/// Embedded-number searches for free text, tried in order.
static EXTRACTORS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            FormatCategory::Currency,
            r"[$£€¥₹][0-9,]+\.?[0-9]*",
            convert_currency,
        ),
        Rule::new(
            FormatCategory::Percentage,
            r"[0-9,]+\.?[0-9]*%",
            convert_percentage,
        ),
        Rule::new(
            FormatCategory::CommaGroupedNumber,
            r"[0-9,]+\.?[0-9]*",
            convert_comma_grouped,
        ),
    ]
});

/// Returns true if the trimmed text is a missing-value token.
pub fn is_missing_token(trimmed: &str) -> bool {
    MISSING_TOKENS.contains(&trimmed)
}

/// Finds the first full-string rule matching the trimmed text.
pub(crate) fn matching_rule(trimmed: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.pattern.is_match(trimmed))
}

/// Finds the first embedded number in free text.
///
/// Returns the extractor that fired and the matched fragment.
pub(crate) fn extract_embedded(text: &str) -> Option<(&'static Rule, &str)> {
    EXTRACTORS.iter().find_map(|extractor| {
        extractor
            .pattern
            .find(text)
            .map(|found| (extractor, found.as_str()))
    })
}

/// Classifies trimmed text by the same precedence the converter uses.
pub(crate) fn classify_text(trimmed: &str) -> FormatCategory {
    if is_missing_token(trimmed) {
        return FormatCategory::Missing;
    }
    matching_rule(trimmed).map_or(FormatCategory::Unrecognized, |rule| rule.category)
}

fn strip(value: &str, drop: &[char]) -> String {
    value.chars().filter(|ch| !drop.contains(ch)).collect()
}

fn strip_symbols_and_commas(value: &str) -> String {
    value
        .chars()
        .filter(|ch| *ch != ',' && !CURRENCY_SYMBOLS.contains(ch))
        .collect()
}

fn parse_payload(value: &str) -> Result<f64, ConversionFailure> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| ConversionFailure::InvalidNumber(value.to_string()))?;
    if !parsed.is_finite() {
        return Err(ConversionFailure::OutOfRange(value.to_string()));
    }
    Ok(parsed)
}

fn convert_currency(value: &str) -> Result<f64, ConversionFailure> {
    parse_payload(&strip_symbols_and_commas(value))
}

fn convert_negative_currency(value: &str) -> Result<f64, ConversionFailure> {
    let inner = strip(value, &['(', ')']);
    convert_currency(&inner).map(|v| -v)
}

fn convert_percentage(value: &str) -> Result<f64, ConversionFailure> {
    parse_payload(&strip(value, &[',', '%'])).map(|v| v / 100.0)
}

fn convert_accounting_negative(value: &str) -> Result<f64, ConversionFailure> {
    parse_payload(&strip(value, &['(', ')', ','])).map(|v| -v)
}

fn convert_fraction(value: &str) -> Result<f64, ConversionFailure> {
    let (numerator, denominator) = value
        .split_once('/')
        .ok_or_else(|| ConversionFailure::InvalidNumber(value.to_string()))?;
    // Both terms are plain digit runs, so only the zero check needs the text.
    if denominator.trim_start_matches('0').is_empty() {
        return Err(ConversionFailure::DivideByZero);
    }
    let quotient = parse_payload(numerator)? / parse_payload(denominator)?;
    if !quotient.is_finite() {
        return Err(ConversionFailure::OutOfRange(value.to_string()));
    }
    Ok(quotient)
}

fn convert_comma_grouped(value: &str) -> Result<f64, ConversionFailure> {
    parse_payload(&strip(value, &[',']))
}
