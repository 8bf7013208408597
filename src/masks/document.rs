//! Formatters for Brazilian identity documents: CPF/CNPJ taxpayer ids and RG
//! registry ids.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{group, push_group, strip_digits_capped};

/// A CPF has 11 digits; anything longer is treated as a CNPJ, capped at 14.
const CPF_LEN: usize = 11;
const TAX_ID_MAX: usize = 14;

/// An RG carries up to 8 digits plus an optional `X` check character.
const NATIONAL_ID_MAX: usize = 9;

static CPF_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{0,3})([0-9]{0,3})([0-9]{0,3})([0-9]{0,2})$")
        .expect("valid CPF pattern")
});

static CNPJ_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{0,2})([0-9]{0,3})([0-9]{0,3})([0-9]{0,4})([0-9]{0,2})$")
        .expect("valid CNPJ pattern")
});

static NATIONAL_ID_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})([0-9]{0,3})([0-9]{0,3})([0-9X]?)$")
        .expect("valid RG pattern")
});

/// Canonical taxpayer-id payload: at most 14 digits.
pub(crate) fn strip_tax_id(raw: &str) -> String {
    strip_digits_capped(raw, TAX_ID_MAX)
}

/// Canonical RG payload: digits plus an uppercased `X`, at most 9 characters.
pub(crate) fn strip_national_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(*c, 'X' | 'x'))
        .take(NATIONAL_ID_MAX)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Format a CPF or CNPJ taxpayer id as the user types it.
///
/// Input is reduced to digits and capped at 14. More than 11 digits are
/// grouped as a CNPJ (`11.222.333/0001-81`), otherwise as a CPF
/// (`111.444.777-35`). Each separator appears only once the group after it
/// has at least one digit.
///
/// # Example
///
/// ```ignore
/// use mascara::format_tax_id;
///
/// assert_eq!(format_tax_id("11144477735"), "111.444.777-35");
/// assert_eq!(format_tax_id("11222333000181"), "11.222.333/0001-81");
/// assert_eq!(format_tax_id("1114"), "111.4");
/// ```
pub fn format_tax_id(raw: &str) -> String {
    let digits = strip_tax_id(raw);

    if digits.len() > CPF_LEN {
        match CNPJ_GROUPS.captures(&digits) {
            Some(caps) => {
                let mut out = String::new();
                out.push_str(group(&caps, 1));
                push_group(&mut out, ".", group(&caps, 2));
                push_group(&mut out, ".", group(&caps, 3));
                push_group(&mut out, "/", group(&caps, 4));
                push_group(&mut out, "-", group(&caps, 5));
                out
            }
            None => digits,
        }
    } else {
        match CPF_GROUPS.captures(&digits) {
            Some(caps) => {
                let mut out = String::new();
                out.push_str(group(&caps, 1));
                push_group(&mut out, ".", group(&caps, 2));
                push_group(&mut out, ".", group(&caps, 3));
                push_group(&mut out, "-", group(&caps, 4));
                out
            }
            None => digits,
        }
    }
}

/// Format an RG registry id (`12.345.678-9`).
///
/// Keeps digits and a literal check character `X` (either case), capped at
/// nine characters. A payload the grouping pattern cannot account for, such
/// as a check character anywhere but the final position, is returned stripped
/// but ungrouped.
pub fn format_national_id(raw: &str) -> String {
    let cleaned = strip_national_id(raw);

    match NATIONAL_ID_GROUPS.captures(&cleaned) {
        Some(caps) => {
            let mut out = String::new();
            out.push_str(group(&caps, 1));
            push_group(&mut out, ".", group(&caps, 2));
            push_group(&mut out, ".", group(&caps, 3));
            push_group(&mut out, "-", group(&caps, 4));
            out
        }
        None => cleaned,
    }
}
