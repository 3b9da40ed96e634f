//! Fuzzy suggestions for mistyped input.

mod suggest;

pub use suggest::{Suggester, Suggestion, DEFAULT_MIN_CONFIDENCE};
