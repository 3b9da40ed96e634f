//! In-memory address book.
//!
//! Records are keyed by contact name and kept in insertion order so that
//! listings are stable across calls.

mod pages;

pub use pages::Pages;

use crate::error::{BookError, BookResult};
use crate::models::Record;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// What [`AddressBook::add_record`] did with the incoming record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The name was new; the record was appended.
    Inserted,

    /// The name existed; the incoming data was merged into it.
    Merged,
}

/// Collection of records keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Insert a record, merging into an existing one with the same name.
    ///
    /// When merging, the incoming phones are appended, and the incoming
    /// email and birthday only fill fields the existing record lacks.
    pub fn add_record(&mut self, record: Record) -> Insertion {
        match self.records.entry(record.name().as_str().to_string()) {
            Entry::Vacant(slot) => {
                tracing::info!(contact = %record.name(), "Contact added");
                slot.insert(record);
                Insertion::Inserted
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                existing.merge(record);

                tracing::info!(contact = %existing.name(), "Contact merged");
                Insertion::Merged
            }
        }
    }

    /// Remove and return the record for `name`.
    ///
    /// The remaining records keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::UnknownContact` if there is no such record.
    pub fn remove_record(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| BookError::UnknownContact(name.to_string()))?;

        tracing::info!(contact = %name, "Contact removed");
        Ok(record)
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::UnknownContact(name.to_string()))
    }

    /// Look up a record by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::UnknownContact(name.to_string()))
    }

    /// Phone summary for one contact.
    pub fn show_phone(&self, name: &str) -> BookResult<String> {
        self.get(name).map(Record::show_phones)
    }

    /// Page-sized text blocks of the records followed by a total line.
    ///
    /// Every call starts again from the first record.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages::new(self.records.values(), page_size)
    }

    /// All records followed by a total line.
    pub fn show_all(&self) -> String {
        let mut output: String = self.records.values().map(Record::to_string).collect();
        output.push_str(&total_line(self.records.len()));
        output
    }
}

pub(crate) fn total_line(count: usize) -> String {
    format!("Total: {} contacts.", count)
}
