//! # Mascara: Input Masking for Brazilian Registration Data
//!
//! Mascara turns raw user input into the punctuated display strings used by
//! fleet-registration forms: CPF/CNPJ taxpayer ids, vehicle plates, RG
//! registry ids, dates, phone numbers, CEP postal codes, and R$ amounts.
//!
//! ## Features
//!
//! - **Pure formatters**: Total functions over arbitrary input; noise is stripped, separators re-inserted, nothing ever panics
//! - **Progressive masking**: Partial input gets partial punctuation, so values can be formatted keystroke by keystroke
//! - **Idempotent output**: Running a formatter over its own output returns it unchanged
//! - **Explicit dispatch**: `MaskKind` names each value class instead of guessing from field names
//! - **Validity dates**: Registration expiry computed from a driver's contract category
//!
//! ## Example: masking keystrokes
//!
//! ```ignore
//! use mascara::{format_phone, format_tax_id};
//!
//! assert_eq!(format_tax_id("11144477735"), "111.444.777-35");
//! assert_eq!(format_tax_id("11222333000181"), "11.222.333/0001-81");
//! assert_eq!(format_phone("119988"), "(11) 9988");
//! ```
//!
//! ## Example: kind dispatch
//!
//! ```ignore
//! use mascara::MaskKind;
//!
//! let kind: MaskKind = "cep".parse()?;
//! assert_eq!(kind.apply("12345678"), "12345-678");
//! assert_eq!(kind.strip("12345-678"), "12345678");
//! ```

// Mask formatters, one module per value family
pub mod masks;

// Explicit kind dispatch
pub mod kind;

// Registration validity arithmetic
pub mod validity;

// JSON output for masked records
pub mod serialization;

// Re-export key types
pub use kind::MaskKind;
pub use masks::{
    format_birth_date, format_currency_display, format_currency_live, format_generic_date,
    format_national_id, format_phone, format_plate, format_postal_code, format_tax_id,
};
pub use serialization::{JsonArrayWriter, MaskedRecord, NdjsonWriter, SerializationError};
pub use validity::{validity_date, DriverCategory, ValidityError};
