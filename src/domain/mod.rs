//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers, email addresses and birthdays. These value objects
//! normalize and validate at construction time and prevent invalid data
//! from being represented in the address book.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
