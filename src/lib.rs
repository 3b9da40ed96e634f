//! Contact Book - an interactive command-line address book.
//!
//! Contacts (name, phone numbers, email, birthday) live in memory for the
//! lifetime of a session. Each field is validated on entry, and free-text
//! commands typed by the user are parsed into typed operations.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, emails and birthdays
//! - **models**: The contact record and birthday countdown
//! - **book**: The in-memory address book with paginated listing
//! - **commands**: Command table, parser, handlers and user messages
//! - **session**: The dispatch loop and its explicit state
//! - **console**: Terminal and scripted line I/O
//! - **matching**: Fuzzy "did you mean" suggestions
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod session;

pub use book::{AddressBook, Insertion, Pages};
pub use commands::{parse, Command, ParsedLine};
pub use config::Config;
pub use console::{Console, ScriptedConsole, TerminalConsole};
pub use domain::{Birthday, Email, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{BirthdayCountdown, Record};
pub use session::Session;
