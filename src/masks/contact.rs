//! Formatters for contact data: phone numbers and CEP postal codes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{group, push_group, strip_digits, strip_digits_capped};

/// A mobile number: 2-digit area code plus 9 digits.
const MOBILE_LEN: usize = 11;
/// A landline: 2-digit area code plus at most 8 digits.
const LANDLINE_MAX: usize = 10;

const POSTAL_CODE_MAX: usize = 8;

static MOBILE_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{0,2})([0-9]{0,5})([0-9]{0,4})$")
        .expect("valid mobile pattern")
});

static LANDLINE_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{0,2})([0-9]{0,4})([0-9]{0,4})$")
        .expect("valid landline pattern")
});

static POSTAL_CODE_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{0,5})([0-9]{0,3})$")
        .expect("valid CEP pattern")
});

/// Canonical phone payload: 11 digits for a mobile number, otherwise the
/// first 10.
pub(crate) fn strip_phone(raw: &str) -> String {
    let digits = strip_digits(raw);
    if digits.len() == MOBILE_LEN {
        digits
    } else {
        digits[..digits.len().min(LANDLINE_MAX)].to_string()
    }
}

/// Canonical CEP payload: at most 8 digits.
pub(crate) fn strip_postal_code(raw: &str) -> String {
    strip_digits_capped(raw, POSTAL_CODE_MAX)
}

/// Format a phone number as the user types it.
///
/// Exactly eleven digits are grouped as a mobile number (`(11) 99887-7665`),
/// anything else as a landline capped at ten (`(11) 2345-6789`). The
/// area-code parenthesis opens as soon as the first digit arrives.
///
/// # Example
///
/// ```ignore
/// use mascara::format_phone;
///
/// assert_eq!(format_phone("11"), "(11");
/// assert_eq!(format_phone("119988"), "(11) 9988");
/// assert_eq!(format_phone("11998877665"), "(11) 99887-7665");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits = strip_phone(raw);
    let pattern = if digits.len() == MOBILE_LEN {
        &MOBILE_GROUPS
    } else {
        &LANDLINE_GROUPS
    };

    match pattern.captures(&digits) {
        Some(caps) => {
            let mut out = String::new();
            push_group(&mut out, "(", group(&caps, 1));
            push_group(&mut out, ") ", group(&caps, 2));
            push_group(&mut out, "-", group(&caps, 3));
            out
        }
        None => digits,
    }
}

/// Format a CEP postal code (`12345-678`).
///
/// Digits only, capped at eight; the hyphen appears once the sixth digit
/// arrives.
pub fn format_postal_code(raw: &str) -> String {
    let digits = strip_postal_code(raw);

    match POSTAL_CODE_GROUPS.captures(&digits) {
        Some(caps) => {
            let mut out = String::new();
            out.push_str(group(&caps, 1));
            push_group(&mut out, "-", group(&caps, 2));
            out
        }
        None => digits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_mobile() {
        assert_eq!(format_phone("11998877665"), "(11) 99887-7665");
    }

    #[test]
    fn test_phone_landline() {
        assert_eq!(format_phone("1123456789"), "(11) 2345-6789");
    }

    #[test]
    fn test_phone_progressive() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("119988"), "(11) 9988");
        assert_eq!(format_phone("1199887"), "(11) 9988-7");
    }

    #[test]
    fn test_phone_strips_noise() {
        assert_eq!(format_phone("(11) 99887-7665"), "(11) 99887-7665");
        assert_eq!(format_phone("+55 11 2345 6789"), "(55) 1123-4567");
    }

    #[test]
    fn test_phone_truncates_over_cap() {
        // Twelve digits are not a mobile number, so the landline cap applies
        assert_eq!(format_phone("123456789012"), "(12) 3456-7890");
    }

    #[test]
    fn test_phone_idempotent() {
        for raw in ["11998877665", "1123456789", "119988", "1", "123456789012"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once);
        }
    }

    #[test]
    fn test_postal_code_full() {
        assert_eq!(format_postal_code("12345678"), "12345-678");
    }

    #[test]
    fn test_postal_code_progressive() {
        assert_eq!(format_postal_code(""), "");
        assert_eq!(format_postal_code("12345"), "12345");
        assert_eq!(format_postal_code("123456"), "12345-6");
    }

    #[test]
    fn test_postal_code_truncates_over_cap() {
        assert_eq!(format_postal_code("12345678901234567890"), "12345-678");
    }

    #[test]
    fn test_postal_code_idempotent() {
        for raw in ["12345678", "123456", "12345", "12345-678"] {
            let once = format_postal_code(raw);
            assert_eq!(format_postal_code(&once), once);
        }
    }
}
