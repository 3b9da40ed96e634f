//! The interactive dispatch loop.
//!
//! A [`Session`] owns the address book and the termination flag. Each input
//! line is parsed into a command, run, and answered with either the
//! command's reply or a message describing why it failed.

use crate::book::AddressBook;
use crate::commands::{self, handlers, Command, ParsedLine, PHRASES};
use crate::config::Config;
use crate::console::Console;
use crate::error::BookError;
use crate::matching::Suggester;
use std::io;
use tracing::{debug, info, warn};

/// Explicit context for one run of the contact book.
#[derive(Debug)]
pub struct Session {
    pub(crate) book: AddressBook,
    pub(crate) config: Config,
    pub(crate) finished: bool,
    suggester: Suggester,
}

impl Session {
    /// Start a session with an empty address book.
    pub fn new(config: Config) -> Self {
        Self::with_book(config, AddressBook::new())
    }

    /// Start a session over an existing address book.
    pub fn with_book(config: Config, book: AddressBook) -> Self {
        Self {
            book,
            config,
            finished: false,
            suggester: Suggester::default(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether an exit command has been run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Read and run commands until exit or end of input.
    pub fn run(&mut self, console: &mut dyn Console) -> io::Result<()> {
        info!(page_size = self.config.page_size, "Session started");

        while !self.finished {
            let Some(line) = console.ask(&self.config.prompt)? else {
                debug!("End of input");
                break;
            };

            let reply = self.execute(&line, console)?;
            if !reply.is_empty() {
                console.say(&reply)?;
            }
        }

        info!(contacts = self.book.len(), "Session ended");
        Ok(())
    }

    /// Run a single input line and return the text to show.
    ///
    /// Blank lines produce an empty reply. Command failures are turned into
    /// user-facing messages; only console I/O errors are returned.
    pub fn execute(&mut self, line: &str, console: &mut dyn Console) -> io::Result<String> {
        if line.trim().is_empty() {
            return Ok(String::new());
        }

        let Some(ParsedLine { command, args }) = commands::parse(line) else {
            debug!(input = %line, "Unrecognized input");
            return Ok(self.unknown_command(line));
        };

        debug!(command = ?command, args = args.len(), "Dispatching command");

        match handlers::run(command, handlers::Args::new(&args), self, console) {
            Ok(reply) => Ok(reply),
            Err(BookError::Io(e)) => Err(e),
            Err(err) => {
                warn!(command = ?command, error = %err, "Command rejected");
                Ok(self.failure_message(command, &err))
            }
        }
    }

    fn unknown_command(&self, line: &str) -> String {
        let words: Vec<&str> = line.split_whitespace().collect();
        let phrases = PHRASES.iter().map(|(phrase, _)| *phrase);

        // Compare against both one- and two-word phrases.
        let one = self.suggester.best(words[..1].join(" ").as_str(), phrases.clone());
        let two = words
            .get(..2)
            .and_then(|head| self.suggester.best(&head.join(" "), phrases));

        let best = match (one, two) {
            (Some(a), Some(b)) if b.confidence > a.confidence => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        };

        match best {
            Some(suggestion) => format!(
                "{} Did you mean \"{}\"?",
                commands::UNKNOWN_COMMAND,
                suggestion.candidate
            ),
            None => commands::UNKNOWN_COMMAND.to_string(),
        }
    }

    fn failure_message(&self, command: Command, err: &BookError) -> String {
        let message = commands::user_message(command, err);

        let BookError::UnknownContact(name) = err else {
            return message;
        };
        match self.suggester.best(name, self.book.names()) {
            Some(suggestion) if suggestion.candidate != name.as_str() => {
                debug!(query = %name, suggestion = %suggestion.candidate, "Suggesting contact");
                format!("{} Did you mean \"{}\"?", message, suggestion.candidate)
            }
            _ => message,
        }
    }
}
