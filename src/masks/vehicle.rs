//! Vehicle plate formatter.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{group, push_group};

/// Three characters, a hyphen, then four more. Mercosul plates mix a letter
/// into the second block, so both blocks accept letters and digits.
const PLATE_MAX: usize = 7;

static PLATE_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Z]{0,3})([0-9A-Z]{0,4})$")
        .expect("valid plate pattern")
});

/// Canonical plate payload: uppercase letters and digits, at most seven.
pub(crate) fn strip_plate(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(PLATE_MAX)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Format a vehicle plate (`ABC-1D23`).
///
/// Letters are uppercased, everything but letters and digits is dropped, and
/// the hyphen appears once the fourth character arrives.
pub fn format_plate(raw: &str) -> String {
    let cleaned = strip_plate(raw);

    match PLATE_GROUPS.captures(&cleaned) {
        Some(caps) => {
            let mut out = String::new();
            out.push_str(group(&caps, 1));
            push_group(&mut out, "-", group(&caps, 2));
            out
        }
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_full() {
        assert_eq!(format_plate("ABC1234"), "ABC-1234");
    }

    #[test]
    fn test_plate_mercosul() {
        assert_eq!(format_plate("abc1d23"), "ABC-1D23");
    }

    #[test]
    fn test_plate_progressive() {
        assert_eq!(format_plate(""), "");
        assert_eq!(format_plate("a"), "A");
        assert_eq!(format_plate("abc"), "ABC");
        assert_eq!(format_plate("abc1"), "ABC-1");
    }

    #[test]
    fn test_plate_strips_noise() {
        assert_eq!(format_plate("ABC-1234"), "ABC-1234");
        assert_eq!(format_plate(" ab c1*23 4"), "ABC-1234");
    }

    #[test]
    fn test_plate_truncates_over_cap() {
        assert_eq!(format_plate("ABC1234XYZ"), "ABC-1234");
    }

    #[test]
    fn test_plate_idempotent() {
        for raw in ["abc1d23", "ABC", "abc1", "ABC1234XYZ"] {
            let once = format_plate(raw);
            assert_eq!(format_plate(&once), once);
        }
    }
}
