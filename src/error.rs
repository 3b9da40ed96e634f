//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while running an address book operation.
#[derive(Error, Debug)]
pub enum BookError {
    /// Wrong number of arguments for the command
    #[error("Bad arguments")]
    BadArguments,

    /// Arguments given to a command that takes none
    #[error("Command takes no arguments")]
    UnexpectedArguments,

    /// No record under this name
    #[error("Unknown contact: {0}")]
    UnknownContact(String),

    /// A field value failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The record already has a birthday
    #[error("Birthday already set")]
    DuplicateBirthday,

    /// The record has no birthday to count down to
    #[error("Birthday not set")]
    NoBirthday,

    /// The record has no phone equal to the one given
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// A 1-based phone index outside the record's phone list
    #[error("Phone index {index} out of range (contact has {len} phones)")]
    PhoneIndexOutOfRange { index: usize, len: usize },

    /// The user declined a confirmation or input ended mid-prompt
    #[error("Cancelled")]
    Cancelled,

    /// Terminal input or output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
