//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is too short or consists only of digits.
    InvalidName(String),

    /// The phone number has non-digit characters or a bad length.
    InvalidPhone(String),

    /// The email address does not match the accepted pattern.
    InvalidEmail(String),

    /// The date is in neither `DD.MM.YYYY` nor `DD/MM/YYYY` form.
    InvalidBirthday(String),

    /// A phone index typed at a prompt is not a number.
    InvalidIndex(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid name: {}", name),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidBirthday(date) => write!(f, "Invalid birth date: {}", date),
            Self::InvalidIndex(index) => write!(f, "Invalid phone index: {}", index),
        }
    }
}

impl std::error::Error for ValidationError {}
