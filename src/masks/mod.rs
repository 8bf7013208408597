//! Mask formatters for Brazilian registration data.
//!
//! Every formatter is a pure function over raw user input: punctuation and
//! other noise are stripped first, then canonical separators are re-inserted
//! for however many characters are present. Partial input gets partial
//! punctuation, so values can be masked keystroke by keystroke, and running a
//! formatter over its own output returns it unchanged.

pub mod contact;
pub mod currency;
pub mod date;
pub mod document;
pub mod vehicle;

// Re-export the formatter functions
pub use contact::{format_phone, format_postal_code};
pub use currency::{format_currency_display, format_currency_live};
pub use date::{format_birth_date, format_generic_date};
pub use document::{format_national_id, format_tax_id};
pub use vehicle::format_plate;

use regex::Captures;

/// Drop everything except ASCII digits.
pub(crate) fn strip_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Drop everything except ASCII digits, keeping at most `max` of them.
pub(crate) fn strip_digits_capped(raw: &str, max: usize) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// The capture group's text, or `""` when it matched nothing.
pub(crate) fn group<'a>(caps: &'a Captures<'_>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Append `sep` followed by `group` when the group is non-empty.
pub(crate) fn push_group(out: &mut String, sep: &str, group: &str) {
    if !group.is_empty() {
        out.push_str(sep);
        out.push_str(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_digits_drops_noise() {
        assert_eq!(strip_digits("111.444.777-35"), "11144477735");
        assert_eq!(strip_digits("abc"), "");
        assert_eq!(strip_digits(""), "");
    }

    #[test]
    fn test_strip_digits_capped_truncates() {
        assert_eq!(strip_digits_capped("123456789", 4), "1234");
        assert_eq!(strip_digits_capped("1a2b3c", 10), "123");
    }

    #[test]
    fn test_push_group_skips_empty() {
        let mut out = String::from("12");
        push_group(&mut out, ".", "345");
        push_group(&mut out, "-", "");
        assert_eq!(out, "12.345");
    }
}
