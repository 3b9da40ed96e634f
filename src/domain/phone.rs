//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A normalized phone number consisting only of digits.
///
/// A single leading `+` and any whitespace, `(`, `)` or `-` characters are
/// removed before validation.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits.
    pub const MIN_LEN: usize = 5;

    /// Maximum number of digits.
    pub const MAX_LEN: usize = 17;

    /// Create a new Phone, normalizing and validating the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the normalized number
    /// contains anything but ASCII digits or its length is outside
    /// [`Phone::MIN_LEN`]..=[`Phone::MAX_LEN`].
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let normalized = Self::normalize(raw);

        if !Self::is_valid(&normalized) {
            return Err(ValidationError::InvalidPhone(raw.trim().to_string()));
        }

        Ok(Self(normalized))
    }

    fn normalize(phone: &str) -> String {
        let phone = phone.trim();
        let phone = phone.strip_prefix('+').unwrap_or(phone);
        phone
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | '-') && !c.is_whitespace())
            .collect()
    }

    fn is_valid(digits: &str) -> bool {
        (Self::MIN_LEN..=Self::MAX_LEN).contains(&digits.len())
            && digits.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
