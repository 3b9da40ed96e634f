//! One handler per [`Command`].
//!
//! Handlers check the argument shape first, then validate field values,
//! then touch the address book. Follow-up questions (which phone, are you
//! sure) go through the session's [`Console`].

use super::{Command, PHRASES};
use crate::book::{total_line, AddressBook};
use crate::console::Console;
use crate::domain::{Birthday, Email, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::session::Session;

/// Positional arguments produced by the parser.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a>(&'a [String]);

impl<'a> Args<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self(args)
    }

    fn none(self) -> BookResult<()> {
        match self.0 {
            [] => Ok(()),
            _ => Err(BookError::UnexpectedArguments),
        }
    }

    fn two(self) -> BookResult<(&'a str, &'a str)> {
        match self.0 {
            [first, second] => Ok((first.as_str(), second.as_str())),
            _ => Err(BookError::BadArguments),
        }
    }

    /// The whole remainder as one name, for commands that take nothing else.
    fn name(self) -> BookResult<String> {
        match self.0 {
            [] => Err(BookError::BadArguments),
            parts => Ok(parts.join(" ")),
        }
    }

    fn one_or_two(self) -> BookResult<(&'a str, Option<&'a str>)> {
        match self.0 {
            [first] => Ok((first.as_str(), None)),
            [first, second] => Ok((first.as_str(), Some(second.as_str()))),
            _ => Err(BookError::BadArguments),
        }
    }

    /// A contact name with an optional trailing phone.
    ///
    /// When the last word does not leave a known name in front of it but
    /// the whole remainder is a known name, the whole remainder is the name.
    fn contact_and_phone(self, book: &AddressBook) -> BookResult<(String, Option<&'a str>)> {
        let (name, phone) = self.one_or_two()?;
        if phone.is_some() && !book.contains(name) {
            let whole = self.name()?;
            if book.contains(&whole) {
                return Ok((whole, None));
            }
        }
        Ok((name.to_string(), phone))
    }
}

/// Run `command` against the session.
pub fn run(
    command: Command,
    args: Args<'_>,
    session: &mut Session,
    console: &mut dyn Console,
) -> BookResult<String> {
    match command {
        Command::Hello => greet(args),
        Command::Add => add(session, args),
        Command::AddEmail => add_email(session, args),
        Command::AddBirthday => add_birthday(session, args),
        Command::Congrat => congrat(session, args),
        Command::Change => change(session, args, console),
        Command::Phone => phone(session, args),
        Command::ShowAll => show_all(session, args, console),
        Command::DelPhone => del_phone(session, args, console),
        Command::DelBirthday => del_birthday(session, args),
        Command::DelEmail => del_email(session, args),
        Command::DelContact => del_contact(session, args, console),
        Command::Exit => exit(session, args),
        Command::Help => help(args),
    }
}

fn greet(args: Args<'_>) -> BookResult<String> {
    args.none()?;
    Ok("How can I help you?".to_string())
}

fn add(session: &mut Session, args: Args<'_>) -> BookResult<String> {
    let (name, phone) = args.one_or_two()?;
    let name = Name::new(name)?;
    let phone = phone.map(Phone::new).transpose()?;

    let exists = session.book.contains(name.as_str());
    match (exists, phone) {
        (false, phone) => {
            let shown = phone.as_ref().map_or("-".to_string(), Phone::to_string);
            let record = match phone {
                Some(phone) => Record::with_phone(name.clone(), phone),
                None => Record::new(name.clone()),
            };
            session.book.add_record(record);
            Ok(format!(
                "Added contact \"{}\" with phone number: {}",
                name, shown
            ))
        }
        // An existing contact only gains a phone.
        (true, None) => Err(BookError::BadArguments),
        (true, Some(phone)) => {
            let shown = phone.to_string();
            session
                .book
                .add_record(Record::with_phone(name.clone(), phone));
            Ok(format!(
                "Updated existing contact \"{}\" with new phone number: {}",
                name, shown
            ))
        }
    }
}

fn add_email(session: &mut Session, args: Args<'_>) -> BookResult<String> {
    let (name, email) = args.two()?;
    let email = Email::new(email)?;

    let record = session.book.get_mut(name)?;
    record.add_email(email.clone());
    tracing::info!(contact = %name, "Email set");

    Ok(format!(
        "Updated existing contact \"{}\" with new email: {}",
        name, email
    ))
}

fn add_birthday(session: &mut Session, args: Args<'_>) -> BookResult<String> {
    let (name, date) = args.two()?;
    let birthday = Birthday::new(date)?;

    session.book.get_mut(name)?.add_birthday(birthday)?;
    tracing::info!(contact = %name, "Birthday set");

    Ok(format!(
        "Updated existing contact \"{}\" with a birth date: {}",
        name, birthday
    ))
}

fn congrat(session: &Session, args: Args<'_>) -> BookResult<String> {
    let name = args.name()?;
    let countdown = session.book.get(&name)?.days_to_birthday()?;
    Ok(countdown.to_string())
}

fn change(
    session: &mut Session,
    args: Args<'_>,
    console: &mut dyn Console,
) -> BookResult<String> {
    let (name, phone) = args.contact_and_phone(&session.book)?;
    let record = session.book.get_mut(&name)?;

    console.say(&record.show_phones())?;

    if record.phones().is_empty() {
        let phone = match phone {
            Some(phone) => Phone::new(phone)?,
            None => ask_phone(console, "If you want to add the phone enter phone number:")?,
        };
        let shown = phone.to_string();
        record.add_phone(phone);
        return Ok(format!(
            "Changed phone number to {} for contact \"{}\"",
            shown, name
        ));
    }

    let index = match record.phones().len() {
        1 => 1,
        len => ask_index(console, "which one do you want to change (enter index):", len)?,
    };
    let new_phone = match phone {
        Some(phone) => Phone::new(phone)?,
        None => ask_phone(console, "Please enter new phone number:")?,
    };
    let shown = new_phone.to_string();
    let old_phone = record.edit_phone(new_phone, index)?;
    tracing::info!(contact = %name, index, "Phone changed");

    Ok(format!(
        "Changed phone number {} to {} for contact \"{}\"",
        old_phone, shown, name
    ))
}

fn phone(session: &Session, args: Args<'_>) -> BookResult<String> {
    let name = args.name()?;
    Ok(format!(
        "Contact \"{}\". {}",
        name,
        session.book.show_phone(&name)?
    ))
}

fn show_all(
    session: &Session,
    args: Args<'_>,
    console: &mut dyn Console,
) -> BookResult<String> {
    args.none()?;

    let page_size = session.config.page_size;
    if session.book.len() < page_size {
        return Ok(session.book.show_all());
    }

    let mut pages = session.book.pages(page_size).peekable();
    while let Some(page) = pages.next() {
        if pages.peek().is_none() {
            return Ok(page);
        }
        console.say(page.trim_end())?;
        console.say(&"*".repeat(50))?;
        if console.ask("Press Enter to continue")?.is_none() {
            break;
        }
    }

    Ok(total_line(session.book.len()))
}

fn del_phone(
    session: &mut Session,
    args: Args<'_>,
    console: &mut dyn Console,
) -> BookResult<String> {
    let (name, phone) = args.contact_and_phone(&session.book)?;
    let record = session.book.get_mut(&name)?;

    let index = match phone {
        Some(phone) => {
            let phone = Phone::new(phone)?;
            record
                .find_phone(&phone)
                .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?
        }
        None => {
            console.say(&record.show_phones())?;
            match record.phones() {
                [] => 1,
                [only] => {
                    let question = format!(
                        "Contact {} has only 1 phone {}. Are you sure? (Y/N)",
                        record.name(),
                        only
                    );
                    if !confirm(console, &question)? {
                        return Err(BookError::Cancelled);
                    }
                    1
                }
                phones => ask_index(
                    console,
                    "which one do you want to delete (enter index):",
                    phones.len(),
                )?,
            }
        }
    };

    let removed = record.del_phone(index)?;
    tracing::info!(contact = %name, index, "Phone deleted");
    Ok(format!("Phone {} deleted!", removed))
}

fn del_email(session: &mut Session, args: Args<'_>) -> BookResult<String> {
    // A trailing email argument is accepted and ignored.
    let name = match args.one_or_two() {
        Ok((name, Some(email))) if Email::new(email).is_ok() => name.to_string(),
        _ => args.name()?,
    };
    session.book.get_mut(&name)?.remove_email();
    tracing::info!(contact = %name, "Email deleted");
    Ok(format!("Contact {}, email deleted", name))
}

fn del_birthday(session: &mut Session, args: Args<'_>) -> BookResult<String> {
    let name = args.name()?;
    session.book.get_mut(&name)?.remove_birthday();
    tracing::info!(contact = %name, "Birthday deleted");
    Ok(format!("Contact {}, birthday deleted", name))
}

fn del_contact(
    session: &mut Session,
    args: Args<'_>,
    console: &mut dyn Console,
) -> BookResult<String> {
    let name = args.name()?;
    session.book.get(&name)?;

    let question = format!("Are you sure to delete contact {}? (Y/N)", name);
    if !confirm(console, &question)? {
        return Err(BookError::Cancelled);
    }

    let removed = session.book.remove_record(&name)?;
    Ok(format!("Contact {} deleted!", removed.name()))
}

fn help(args: Args<'_>) -> BookResult<String> {
    args.none()?;
    let phrases: Vec<&str> = PHRASES.iter().map(|(phrase, _)| *phrase).collect();
    Ok(format!("available commands: {}", phrases.join(", ")))
}

fn exit(session: &mut Session, args: Args<'_>) -> BookResult<String> {
    args.none()?;
    session.finished = true;
    Ok("Good bye!".to_string())
}

/// Ask until the answer is yes or no. End of input counts as no.
fn confirm(console: &mut dyn Console, question: &str) -> BookResult<bool> {
    loop {
        let Some(answer) = console.ask(question)? else {
            return Ok(false);
        };
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

fn ask_phone(console: &mut dyn Console, prompt: &str) -> BookResult<Phone> {
    let answer = console.ask(prompt)?.ok_or(BookError::Cancelled)?;
    Ok(Phone::new(answer)?)
}

/// Ask for a 1-based index into a list of `len` phones.
fn ask_index(console: &mut dyn Console, prompt: &str, len: usize) -> BookResult<usize> {
    let answer = console.ask(prompt)?.ok_or(BookError::Cancelled)?;
    let answer = answer.trim();
    let index: usize = answer
        .parse()
        .map_err(|_| ValidationError::InvalidIndex(answer.to_string()))?;

    if index == 0 || index > len {
        return Err(BookError::PhoneIndexOutOfRange { index, len });
    }
    Ok(index)
}
