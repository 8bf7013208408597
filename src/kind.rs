//! The set of value kinds the mask engine understands.
//!
//! Dispatch is explicit: a caller names the kind it wants instead of relying
//! on field-name conventions, so every mask applied is visible at the call
//! site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::masks;

/// A value class with its own masking rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    /// CPF or CNPJ taxpayer id.
    TaxId,
    /// Vehicle plate.
    Plate,
    /// RG registry id.
    NationalId,
    /// Birth date.
    BirthDate,
    /// Licensing, maturity, and contract-end dates.
    GenericDate,
    /// Landline or mobile phone number.
    Phone,
    /// CEP postal code.
    PostalCode,
    /// R$ amount keyed in as centavos.
    Currency,
}

impl MaskKind {
    /// Every supported kind, in display order.
    pub const ALL: [MaskKind; 8] = [
        MaskKind::TaxId,
        MaskKind::Plate,
        MaskKind::NationalId,
        MaskKind::BirthDate,
        MaskKind::GenericDate,
        MaskKind::Phone,
        MaskKind::PostalCode,
        MaskKind::Currency,
    ];

    /// Canonical snake_case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            MaskKind::TaxId => "tax_id",
            MaskKind::Plate => "plate",
            MaskKind::NationalId => "national_id",
            MaskKind::BirthDate => "birth_date",
            MaskKind::GenericDate => "generic_date",
            MaskKind::Phone => "phone",
            MaskKind::PostalCode => "postal_code",
            MaskKind::Currency => "currency",
        }
    }

    /// Apply this kind's mask to raw input.
    ///
    /// `Currency` uses the live-typing form; call
    /// [`format_currency_display`](crate::format_currency_display) directly
    /// to render stored amounts.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            MaskKind::TaxId => masks::format_tax_id(raw),
            MaskKind::Plate => masks::format_plate(raw),
            MaskKind::NationalId => masks::format_national_id(raw),
            MaskKind::BirthDate => masks::format_birth_date(raw),
            MaskKind::GenericDate => masks::format_generic_date(raw),
            MaskKind::Phone => masks::format_phone(raw),
            MaskKind::PostalCode => masks::format_postal_code(raw),
            MaskKind::Currency => masks::format_currency_live(raw),
        }
    }

    /// Apply this kind's mask to an optional value; absent behaves as empty.
    pub fn apply_opt(&self, raw: Option<&str>) -> String {
        self.apply(raw.unwrap_or(""))
    }

    /// The canonical unformatted payload for this kind, as submitted to a
    /// backing API: digits for most kinds, digits plus a trailing check
    /// character for RG, uppercase letters and digits for plates.
    ///
    /// Stripping is capped the same way formatting is, so
    /// `apply(strip(x)) == apply(x)` holds for every input.
    pub fn strip(&self, raw: &str) -> String {
        match self {
            MaskKind::TaxId => masks::document::strip_tax_id(raw),
            MaskKind::Plate => masks::vehicle::strip_plate(raw),
            MaskKind::NationalId => masks::document::strip_national_id(raw),
            MaskKind::BirthDate | MaskKind::GenericDate => masks::date::strip_date(raw),
            MaskKind::Phone => masks::contact::strip_phone(raw),
            MaskKind::PostalCode => masks::contact::strip_postal_code(raw),
            MaskKind::Currency => masks::strip_digits(raw),
        }
    }

    /// A sample raw payload for this kind, used by the CLI listing.
    pub fn sample(&self) -> &'static str {
        match self {
            MaskKind::TaxId => "11144477735",
            MaskKind::Plate => "ABC1D23",
            MaskKind::NationalId => "12345678X",
            MaskKind::BirthDate => "01011990",
            MaskKind::GenericDate => "31122025",
            MaskKind::Phone => "11998877665",
            MaskKind::PostalCode => "12345678",
            MaskKind::Currency => "123456",
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tax_id" | "cpf" | "cnpj" | "documento" => Ok(MaskKind::TaxId),
            "plate" | "placa" => Ok(MaskKind::Plate),
            "national_id" | "rg" => Ok(MaskKind::NationalId),
            "birth_date" | "birth" => Ok(MaskKind::BirthDate),
            "generic_date" | "date" | "data" => Ok(MaskKind::GenericDate),
            "phone" | "telefone" | "celular" => Ok(MaskKind::Phone),
            "postal_code" | "cep" => Ok(MaskKind::PostalCode),
            "currency" | "price" | "valor" => Ok(MaskKind::Currency),
            other => Err(format!(
                "Unknown mask kind: '{}'. Supported kinds: tax_id, plate, national_id, \
                 birth_date, generic_date, phone, postal_code, currency",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatches_to_formatters() {
        assert_eq!(MaskKind::TaxId.apply("11144477735"), "111.444.777-35");
        assert_eq!(MaskKind::Plate.apply("abc1d23"), "ABC-1D23");
        assert_eq!(MaskKind::NationalId.apply("12345678X"), "12.345.678-X");
        assert_eq!(MaskKind::BirthDate.apply("01011990"), "01/01/1990");
        assert_eq!(MaskKind::GenericDate.apply("31122025"), "31/12/2025");
        assert_eq!(MaskKind::Phone.apply("11998877665"), "(11) 99887-7665");
        assert_eq!(MaskKind::PostalCode.apply("12345678"), "12345-678");
        assert_eq!(MaskKind::Currency.apply("12345"), "R$ 123,45");
    }

    #[test]
    fn test_apply_opt_absent_is_empty() {
        for kind in MaskKind::ALL {
            assert_eq!(kind.apply_opt(None), "");
            assert_eq!(kind.apply_opt(None), kind.apply(""));
        }
        assert_eq!(MaskKind::Phone.apply_opt(Some("119988")), "(11) 9988");
    }

    #[test]
    fn test_strip_inverts_apply() {
        for kind in MaskKind::ALL {
            let sample = kind.sample();
            let formatted = kind.apply(sample);
            assert_eq!(kind.strip(&formatted), kind.strip(sample));
            assert_eq!(kind.apply(&kind.strip(sample)), formatted);
        }
    }

    #[test]
    fn test_from_str_canonical_names() {
        for kind in MaskKind::ALL {
            assert_eq!(kind.name().parse::<MaskKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("cpf".parse::<MaskKind>(), Ok(MaskKind::TaxId));
        assert_eq!("CNPJ".parse::<MaskKind>(), Ok(MaskKind::TaxId));
        assert_eq!("rg".parse::<MaskKind>(), Ok(MaskKind::NationalId));
        assert_eq!("cep".parse::<MaskKind>(), Ok(MaskKind::PostalCode));
        assert_eq!("placa".parse::<MaskKind>(), Ok(MaskKind::Plate));
        assert_eq!("telefone".parse::<MaskKind>(), Ok(MaskKind::Phone));
        assert_eq!("valor".parse::<MaskKind>(), Ok(MaskKind::Currency));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "ssn".parse::<MaskKind>().unwrap_err();
        assert!(err.contains("Unknown mask kind"));
        assert!(err.contains("ssn"));
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(MaskKind::PostalCode.to_string(), "postal_code");
        assert_eq!(MaskKind::TaxId.to_string(), "tax_id");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&MaskKind::NationalId).unwrap();
        assert_eq!(json, "\"national_id\"");

        let kind: MaskKind = serde_json::from_str("\"birth_date\"").unwrap();
        assert_eq!(kind, MaskKind::BirthDate);
    }
}
