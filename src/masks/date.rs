//! Date formatters producing `DD/MM/YYYY` as digits arrive.

use super::strip_digits_capped;

const DATE_DIGITS: usize = 8;

/// Canonical date payload: at most 8 digits, `DDMMYYYY`.
pub(crate) fn strip_date(raw: &str) -> String {
    strip_digits_capped(raw, DATE_DIGITS)
}

/// Format a birth date from typed digits.
///
/// At most eight digits; each slash appears once the group after it has
/// begun, so `"010"` becomes `"01/0"` and `"01011990"` becomes
/// `"01/01/1990"`.
pub fn format_birth_date(raw: &str) -> String {
    let digits = strip_date(raw);

    let mut parts = Vec::new();
    if !digits.is_empty() {
        parts.push(&digits[..digits.len().min(2)]);
    }
    if digits.len() > 2 {
        parts.push(&digits[2..digits.len().min(4)]);
    }
    if digits.len() > 4 {
        parts.push(&digits[4..]);
    }
    parts.join("/")
}

/// Format a paperwork date (licensing, maturity, contract end) as
/// `DD/MM/YYYY`.
///
/// Output matches [`format_birth_date`] for every input; each date field
/// keeps its own entry point.
pub fn format_generic_date(raw: &str) -> String {
    let digits = strip_date(raw);

    if digits.len() <= 2 {
        digits
    } else if digits.len() <= 4 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..])
    }
}
