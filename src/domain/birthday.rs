//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted input formats, tried in order.
const INPUT_FORMATS: [&str; 2] = ["%d.%m.%Y", "%d/%m/%Y"];

/// Canonical display format.
const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// A calendar date of birth.
///
/// Parsed from `DD.MM.YYYY` or `DD/MM/YYYY`; always displayed as
/// `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let dotted = Birthday::new("01.02.2000").unwrap();
/// let slashed = Birthday::new("01/02/2000").unwrap();
/// assert_eq!(dotted, slashed);
/// assert_eq!(slashed.to_string(), "01.02.2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from one of the accepted formats.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if no format matches or
    /// the date does not exist.
    pub fn new(date: impl AsRef<str>) -> Result<Self, ValidationError> {
        let date = date.as_ref().trim();

        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(date.to_string()))
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The occurrence of this birthday in `year`.
    ///
    /// 29 February falls on 1 March in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
