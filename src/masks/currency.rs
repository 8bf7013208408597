//! Currency formatters for R$ amounts keyed in as centavos.

use super::strip_digits;

/// Insert `.` thousands separators into an integer part, right to left.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format centavos digits as the user types them (`R$ 1.234,56`).
///
/// The last two digits are centavos, the rest reais. Nothing is zero-padded
/// while typing: a single digit renders as `R$ ,1`, and leading zeros stay
/// where the user put them. Empty input stays empty.
pub fn format_currency_live(raw: &str) -> String {
    let digits = strip_digits(raw);
    if digits.is_empty() {
        return String::new();
    }

    let split = digits.len().saturating_sub(2);
    let reais = &digits[..split];
    let centavos = &digits[split..];

    format!("R$ {},{}", group_thousands(reais), centavos)
}

/// Format a stored amount for display (`R$ 0,00` when empty).
///
/// Pads to at least one real digit and two centavos digits, trims leading
/// zeros from the reais part, and groups thousands. The reais part has no
/// upper bound.
///
/// # Example
///
/// ```ignore
/// use mascara::format_currency_display;
///
/// assert_eq!(format_currency_display(""), "R$ 0,00");
/// assert_eq!(format_currency_display("5"), "R$ 0,05");
/// assert_eq!(format_currency_display("0012345"), "R$ 123,45");
/// ```
pub fn format_currency_display(raw: &str) -> String {
    let digits = strip_digits(raw);
    let padded = format!("{:0>3}", digits);

    let split = padded.len() - 2;
    let reais = padded[..split].trim_start_matches('0');
    let reais = if reais.is_empty() { "0" } else { reais };
    let centavos = &padded[split..];

    format!("R$ {},{}", group_thousands(reais), centavos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
        assert_eq!(group_thousands("1234567"), "1.234.567");
        assert_eq!(group_thousands("00123"), "00.123");
    }

    #[test]
    fn test_live_empty() {
        assert_eq!(format_currency_live(""), "");
        assert_eq!(format_currency_live("abc"), "");
    }

    #[test]
    fn test_live_short_values_stay_unpadded() {
        assert_eq!(format_currency_live("1"), "R$ ,1");
        assert_eq!(format_currency_live("12"), "R$ ,12");
        assert_eq!(format_currency_live("123"), "R$ 1,23");
    }

    #[test]
    fn test_live_grouping() {
        assert_eq!(format_currency_live("12345"), "R$ 123,45");
        assert_eq!(format_currency_live("123456789"), "R$ 1.234.567,89");
    }

    #[test]
    fn test_live_keeps_leading_zeros() {
        assert_eq!(format_currency_live("0012345"), "R$ 00.123,45");
    }

    #[test]
    fn test_live_idempotent() {
        for raw in ["1", "12", "12345", "123456789", "0012345"] {
            let once = format_currency_live(raw);
            assert_eq!(format_currency_live(&once), once);
        }
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(format_currency_display(""), "R$ 0,00");
        assert_eq!(format_currency_display("abc"), "R$ 0,00");
    }

    #[test]
    fn test_display_pads_and_trims() {
        assert_eq!(format_currency_display("5"), "R$ 0,05");
        assert_eq!(format_currency_display("50"), "R$ 0,50");
        assert_eq!(format_currency_display("0012345"), "R$ 123,45");
    }

    #[test]
    fn test_display_unbounded_reais() {
        assert_eq!(
            format_currency_display("123456789012345678901"),
            "R$ 1.234.567.890.123.456.789,01"
        );
    }

    #[test]
    fn test_display_idempotent() {
        for raw in ["", "5", "12345", "0012345", "123456789"] {
            let once = format_currency_display(raw);
            assert_eq!(format_currency_display(&once), once);
        }
    }
}
