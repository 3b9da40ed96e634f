//! User-facing text for failed commands.
//!
//! The error variant decides what went wrong; the command only tailors the
//! guidance shown for a wrong argument shape.

use super::Command;
use crate::domain::{Name, Phone, ValidationError};
use crate::error::BookError;

/// Reply to input that matches no command phrase.
pub const UNKNOWN_COMMAND: &str = "No such command!";

const UNKNOWN_CONTACT: &str = "No such contact! to add one use \"add\" command";

fn phone_hint() -> String {
    format!(
        "Give me name and phone please. Minimum phone number length is {} digits. Maximum {}. Letters not allowed!",
        Phone::MIN_LEN,
        Phone::MAX_LEN
    )
}

fn bad_arguments(command: Command) -> String {
    match command {
        Command::Add | Command::Change => phone_hint(),
        Command::AddBirthday => "input name and date".to_string(),
        Command::AddEmail => "input name and e-mail".to_string(),
        Command::DelPhone => "input contact name and, optionally, the phone to delete".to_string(),
        Command::Congrat
        | Command::Phone
        | Command::DelBirthday
        | Command::DelEmail
        | Command::DelContact => "Enter contact name".to_string(),
        Command::Hello | Command::ShowAll | Command::Exit | Command::Help => {
            "Command needs no arguments".to_string()
        }
    }
}

fn invalid_field(err: &ValidationError) -> String {
    match err {
        ValidationError::InvalidName(_) => format!(
            "Name cannot consist of only digits and min name length is {}.",
            Name::MIN_LEN
        ),
        ValidationError::InvalidPhone(_) => phone_hint(),
        ValidationError::InvalidEmail(_) => "invalid email format".to_string(),
        ValidationError::InvalidBirthday(_) => {
            "use date format DD.MM.YYYY or DD/MM/YYYY".to_string()
        }
        ValidationError::InvalidIndex(index) => {
            format!("\"{}\" is not a phone index, enter a number from the list", index)
        }
    }
}

/// Render the message shown to the user when `command` fails with `err`.
pub fn user_message(command: Command, err: &BookError) -> String {
    match err {
        BookError::BadArguments => bad_arguments(command),
        BookError::UnexpectedArguments => "Command needs no arguments".to_string(),
        BookError::UnknownContact(_) => UNKNOWN_CONTACT.to_string(),
        BookError::Invalid(validation) => invalid_field(validation),
        BookError::DuplicateBirthday => "Birth date already entered, only one allowed".to_string(),
        BookError::NoBirthday => {
            "Birth date is not set for this contact, use \"add b_day\" first".to_string()
        }
        BookError::PhoneNotFound(_) => "this contact doesn't have such phone number".to_string(),
        BookError::PhoneIndexOutOfRange { len: 0, .. } => "this contact has no phones.".to_string(),
        BookError::PhoneIndexOutOfRange { index, len } => {
            format!("there is no phone with index {}, choose 1 to {}", index, len)
        }
        BookError::Cancelled => "Cancelled.".to_string(),
        BookError::Io(e) => e.to_string(),
    }
}
