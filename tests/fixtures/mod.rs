//! Shared helpers for integration tests.

#![allow(dead_code)]

use contact_book::{AddressBook, Config, Name, Phone, Record, Session, TerminalConsole};
use std::io::Cursor;

/// Build an address book with `count` contacts named "Contact 00", "Contact 01", ...
pub fn sample_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        let name = Name::new(format!("Contact {:02}", i)).expect("valid name");
        let phone = Phone::new(format!("380{:07}", i)).expect("valid phone");
        book.add_record(Record::with_phone(name, phone));
    }
    book
}

/// Run a full session over `input` and return everything written to stdout.
pub fn run_script(config: Config, input: &str) -> (Session, String) {
    run_script_with_book(config, AddressBook::new(), input)
}

/// Like [`run_script`], starting from an existing book.
pub fn run_script_with_book(config: Config, book: AddressBook, input: &str) -> (Session, String) {
    let mut session = Session::with_book(config, book);
    let mut console = TerminalConsole::new(Cursor::new(input.to_string()), Vec::new());

    session.run(&mut console).expect("in-memory console never fails");

    let output = String::from_utf8(console.into_writer()).expect("utf-8 output");
    (session, output)
}

/// Output lines with the prompt stripped.
pub fn replies(output: &str, prompt: &str) -> Vec<String> {
    output
        .split(prompt)
        .flat_map(str::lines)
        .map(str::to_string)
        .filter(|line| !line.is_empty())
        .collect()
}
