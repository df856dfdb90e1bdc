//! Simplified converter used when a whole column fails to clean.

use fin_common::CellValue;

/// Best-effort numeric conversion with no format rules.
///
/// Keeps only ASCII digits, `.` and `-`, then divides by 100 when the text
/// carried a `%`. Anything that still does not parse becomes `None`.
pub fn fallback_convert(raw: &CellValue) -> Option<f64> {
    match raw {
        CellValue::Absent => None,
        CellValue::Integer(v) => Some(*v as f64),
        CellValue::Float(v) if v.is_nan() => None,
        CellValue::Float(v) => Some(*v),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed == "-" {
                return None;
            }
            let kept: String = trimmed
                .chars()
                .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
                .collect();
            let value = kept.parse::<f64>().ok()?;
            if trimmed.contains('%') {
                Some(value / 100.0)
            } else {
                Some(value)
            }
        }
    }
}
