//! Registration validity dates derived from a driver's contract category.
//!
//! A third-party driver is registered for a single day; aggregated and fleet
//! drivers are registered for six months. The expiry date is rendered
//! `DD/MM/YYYY`, ready for the same date fields the mask formatters feed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Error type for validity computations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidityError {
    UnknownCategory(String),
    InvalidDate(String),
    OutOfRange(String),
}

impl fmt::Display for ValidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityError::UnknownCategory(name) => {
                write!(f, "Unknown driver category: '{}'. Supported categories: terceiro, agregado, frota", name)
            }
            ValidityError::InvalidDate(value) => {
                write!(f, "Unparseable registration date: '{}'", value)
            }
            ValidityError::OutOfRange(value) => {
                write!(f, "Validity date out of range for: '{}'", value)
            }
        }
    }
}

impl std::error::Error for ValidityError {}

/// Contract category of a registered driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverCategory {
    /// Outside contractor; registration holds for one day.
    Terceiro,
    /// Aggregated driver; registration holds for six months.
    Agregado,
    /// Company fleet driver; registration holds for six months.
    Frota,
}

impl DriverCategory {
    /// Every supported category.
    pub const ALL: [DriverCategory; 3] = [
        DriverCategory::Terceiro,
        DriverCategory::Agregado,
        DriverCategory::Frota,
    ];

    /// Canonical lowercase name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            DriverCategory::Terceiro => "terceiro",
            DriverCategory::Agregado => "agregado",
            DriverCategory::Frota => "frota",
        }
    }
}

impl fmt::Display for DriverCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DriverCategory {
    type Err = ValidityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terceiro" => Ok(DriverCategory::Terceiro),
            "agregado" => Ok(DriverCategory::Agregado),
            "frota" => Ok(DriverCategory::Frota),
            other => Err(ValidityError::UnknownCategory(other.to_string())),
        }
    }
}

/// Parse a registration timestamp in any of the shapes the backing API and
/// the date fields produce.
fn parse_created_at(value: &str) -> Result<NaiveDate, ValidityError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Ok(date);
    }

    Err(ValidityError::InvalidDate(trimmed.to_string()))
}

/// Compute the expiry date of a driver registration.
///
/// An expiry landing past a short month is clamped to that month's last day
/// rather than rolling over.
///
/// # Arguments
///
/// * `created_at` - Registration timestamp: RFC 3339, `YYYY-MM-DD`, or `DD/MM/YYYY`
/// * `category` - The driver's contract category
///
/// # Returns
///
/// * `Ok(String)` - Expiry date formatted `DD/MM/YYYY`
/// * `Err(ValidityError)` - Unparseable timestamp or out-of-range arithmetic
///
/// # Example
///
/// ```ignore
/// use mascara::{validity_date, DriverCategory};
///
/// let expiry = validity_date("2024-03-15T10:30:00Z", DriverCategory::Frota)?;
/// assert_eq!(expiry, "15/09/2024");
/// ```
pub fn validity_date(created_at: &str, category: DriverCategory) -> Result<String, ValidityError> {
    let start = parse_created_at(created_at)?;

    let expiry = match category {
        DriverCategory::Terceiro => start.checked_add_days(Days::new(1)),
        DriverCategory::Agregado | DriverCategory::Frota => {
            start.checked_add_months(Months::new(6))
        }
    }
    .ok_or_else(|| ValidityError::OutOfRange(created_at.to_string()))?;

    Ok(expiry.format("%d/%m/%Y").to_string())
}
