//! Command table, parser and handlers.
//!
//! A raw input line is turned into a [`ParsedLine`] by [`parse`]; the
//! session then runs the matching handler and renders any error with
//! [`user_message`].

pub mod handlers;
mod messages;
mod parser;

pub use messages::{user_message, UNKNOWN_COMMAND};
pub use parser::{parse, ParsedLine};

use std::fmt;

/// Every operation a user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    AddEmail,
    AddBirthday,
    Add,
    Congrat,
    Change,
    Phone,
    ShowAll,
    DelPhone,
    DelBirthday,
    DelEmail,
    DelContact,
    Exit,
    Help,
}

/// Command phrases as typed by the user, in the order `help` lists them.
pub const PHRASES: [(&str, Command); 16] = [
    ("hello", Command::Hello),
    ("add email", Command::AddEmail),
    ("add b_day", Command::AddBirthday),
    ("add", Command::Add),
    ("congrat", Command::Congrat),
    ("change", Command::Change),
    ("phone", Command::Phone),
    ("show all", Command::ShowAll),
    ("del phone", Command::DelPhone),
    ("del b_day", Command::DelBirthday),
    ("del email", Command::DelEmail),
    ("del contact", Command::DelContact),
    ("close", Command::Exit),
    ("good bye", Command::Exit),
    ("exit", Command::Exit),
    ("help", Command::Help),
];

impl Command {
    /// The phrase shown for this command in messages.
    pub fn phrase(self) -> &'static str {
        PHRASES
            .iter()
            .find(|(_, command)| *command == self)
            .map(|(phrase, _)| *phrase)
            .unwrap_or_default()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}
