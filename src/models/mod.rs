//! Data models for address book entities.
//!
//! This module contains the contact record and the countdown type returned
//! by birthday queries.

pub mod record;

pub use record::{BirthdayCountdown, Record};
