//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Email, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Outcome of counting the days to a contact's next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayCountdown {
    /// The birthday is today.
    Today,

    /// Days until the next occurrence, always at least 1.
    InDays(i64),
}

impl fmt::Display for BirthdayCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "It is TODAY!!!"),
            Self::InDays(days) => write!(f, "{} days to birthday", days),
        }
    }
}

/// A contact: a name with its phones, email and birthday.
///
/// The name is fixed at construction and is the record's key in the
/// [`AddressBook`](crate::book::AddressBook).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones, email or birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            email: None,
            birthday: None,
        }
    }

    /// Create a record holding a single phone.
    pub fn with_phone(name: Name, phone: Phone) -> Self {
        let mut record = Self::new(name);
        record.add_phone(phone);
        record
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Set the email, replacing any previous one.
    pub fn add_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    /// Set the birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateBirthday` if one is already set.
    pub fn add_birthday(&mut self, birthday: Birthday) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::DuplicateBirthday);
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Fold another record's data into this one.
    ///
    /// Phones are appended. Email and birthday are taken only where this
    /// record has none.
    pub fn merge(&mut self, other: Record) {
        self.phones.extend(other.phones);
        if self.email.is_none() {
            self.email = other.email;
        }
        if self.birthday.is_none() {
            self.birthday = other.birthday;
        }
    }

    /// Clear the email, returning the previous value.
    pub fn remove_email(&mut self) -> Option<Email> {
        self.email.take()
    }

    /// Clear the birthday, returning the previous value.
    pub fn remove_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Human-readable summary of the record's phones.
    pub fn show_phones(&self) -> String {
        match self.phones.as_slice() {
            [] => "this contact has no phones.".to_string(),
            [phone] => format!("Current phone number is {}", phone),
            phones => {
                let mut output = String::from("This contact has several phones:\n");
                for (i, phone) in phones.iter().enumerate() {
                    output.push_str(&format!("{}: {} ", i + 1, phone));
                }
                output
            }
        }
    }

    /// 1-based position of the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p == phone).map(|i| i + 1)
    }

    /// Remove and return the phone at 1-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneIndexOutOfRange` if there is no such phone.
    pub fn del_phone(&mut self, index: usize) -> BookResult<Phone> {
        let slot = self.slot(index)?;
        Ok(self.phones.remove(slot))
    }

    /// Replace the phone at 1-based `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneIndexOutOfRange` if there is no such phone.
    pub fn edit_phone(&mut self, new_phone: Phone, index: usize) -> BookResult<Phone> {
        let slot = self.slot(index)?;
        Ok(std::mem::replace(&mut self.phones[slot], new_phone))
    }

    fn slot(&self, index: usize) -> BookResult<usize> {
        if index == 0 || index > self.phones.len() {
            return Err(BookError::PhoneIndexOutOfRange {
                index,
                len: self.phones.len(),
            });
        }
        Ok(index - 1)
    }

    /// Days from the local current date to the next birthday.
    pub fn days_to_birthday(&self) -> BookResult<BirthdayCountdown> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` to the next birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NoBirthday` if the record has no birthday.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> BookResult<BirthdayCountdown> {
        let birthday = self.birthday.ok_or(BookError::NoBirthday)?;

        let this_year = birthday.in_year(today.year());
        if this_year == today {
            return Ok(BirthdayCountdown::Today);
        }

        let next = if this_year > today {
            this_year
        } else {
            birthday.in_year(today.year() + 1)
        };

        Ok(BirthdayCountdown::InDays((next - today).num_days()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let email = self.email.as_ref().map_or("-".to_string(), Email::to_string);
        let birthday = self
            .birthday
            .as_ref()
            .map_or("-".to_string(), Birthday::to_string);

        writeln!(
            f,
            "{}: Phones: {}; E-mail:{}; B-day:{} ",
            self.name, phones, email, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(Name::new(name).unwrap());
        for phone in phones {
            record.add_phone(Phone::new(phone).unwrap());
        }
        record
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_merge_fills_only_missing_fields() {
        let mut target = record("Alice", &["11111"]);
        target.add_email(Email::new("kept@example.com").unwrap());

        let mut incoming = record("Alice", &["22222"]);
        incoming.add_email(Email::new("dropped@example.com").unwrap());
        incoming.add_birthday(Birthday::new("01.02.2000").unwrap()).unwrap();

        target.merge(incoming);
        assert_eq!(target.phones().len(), 2);
        assert_eq!(target.email().unwrap().as_str(), "kept@example.com");
        assert_eq!(target.birthday().unwrap().to_string(), "01.02.2000");
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let record = record("Alice", &["5551234567", "5551234567"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_email_replaces() {
        let mut record = record("Alice", &[]);
        record.add_email(Email::new("a@example.com").unwrap());
        record.add_email(Email::new("b@example.com").unwrap());
        assert_eq!(record.email().unwrap().as_str(), "b@example.com");
    }

    #[test]
    fn test_add_birthday_rejects_duplicate() {
        let mut record = record("Alice", &[]);
        record.add_birthday(Birthday::new("01.02.2000").unwrap()).unwrap();

        let err = record
            .add_birthday(Birthday::new("03.04.2001").unwrap())
            .unwrap_err();
        assert!(matches!(err, BookError::DuplicateBirthday));
        assert_eq!(record.birthday().unwrap().to_string(), "01.02.2000");

        record.remove_birthday();
        assert!(record.add_birthday(Birthday::new("03.04.2001").unwrap()).is_ok());
    }

    #[test]
    fn test_show_phones_variants() {
        assert_eq!(record("Alice", &[]).show_phones(), "this contact has no phones.");
        assert_eq!(
            record("Alice", &["12345"]).show_phones(),
            "Current phone number is 12345"
        );
        assert_eq!(
            record("Alice", &["12345", "67890"]).show_phones(),
            "This contact has several phones:\n1: 12345 2: 67890 "
        );
    }

    #[test]
    fn test_del_phone_by_index() {
        let mut record = record("Alice", &["11111", "22222", "33333"]);
        assert_eq!(record.del_phone(2).unwrap().as_str(), "22222");
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.phones()[1].as_str(), "33333");
    }

    #[test]
    fn test_del_phone_out_of_range() {
        let mut empty = record("Alice", &[]);
        assert!(matches!(
            empty.del_phone(1),
            Err(BookError::PhoneIndexOutOfRange { index: 1, len: 0 })
        ));

        let mut one = record("Alice", &["11111"]);
        assert!(one.del_phone(0).is_err());
        assert!(one.del_phone(2).is_err());
        assert_eq!(one.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = record("Alice", &["11111", "22222", "33333"]);
        let old = record.edit_phone(Phone::new("44444").unwrap(), 2).unwrap();
        assert_eq!(old.as_str(), "22222");
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["11111", "44444", "33333"]);
    }

    #[test]
    fn test_find_phone() {
        let record = record("Alice", &["11111", "22222"]);
        assert_eq!(record.find_phone(&Phone::new("22-222").unwrap()), Some(2));
        assert_eq!(record.find_phone(&Phone::new("99999").unwrap()), None);
    }

    #[test]
    fn test_days_to_birthday_today() {
        let mut record = record("Alice", &[]);
        record.add_birthday(Birthday::new("19.10.1990").unwrap()).unwrap();
        assert_eq!(
            record.days_to_birthday_from(date(2026, 10, 19)).unwrap(),
            BirthdayCountdown::Today
        );
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let mut record = record("Alice", &[]);
        record.add_birthday(Birthday::new("20.10.1990").unwrap()).unwrap();
        assert_eq!(
            record.days_to_birthday_from(date(2026, 10, 19)).unwrap(),
            BirthdayCountdown::InDays(1)
        );
    }

    #[test]
    fn test_days_to_birthday_rolls_to_next_year() {
        let mut record = record("Alice", &[]);
        record.add_birthday(Birthday::new("18.10.1990").unwrap()).unwrap();
        assert_eq!(
            record.days_to_birthday_from(date(2026, 10, 19)).unwrap(),
            BirthdayCountdown::InDays(364)
        );

        let mut early = Record::new(Name::new("Bob").unwrap());
        early.add_birthday(Birthday::new("01.01.1985").unwrap()).unwrap();
        match early.days_to_birthday_from(date(2026, 10, 19)).unwrap() {
            BirthdayCountdown::InDays(days) => assert!(days > 0),
            BirthdayCountdown::Today => panic!("not today"),
        }
    }

    #[test]
    fn test_days_to_birthday_leap_day() {
        let mut record = record("Alice", &[]);
        record.add_birthday(Birthday::new("29.02.2000").unwrap()).unwrap();
        assert_eq!(
            record.days_to_birthday_from(date(2027, 2, 28)).unwrap(),
            BirthdayCountdown::InDays(1)
        );
    }

    #[test]
    fn test_days_to_birthday_missing() {
        let record = record("Alice", &[]);
        assert!(matches!(
            record.days_to_birthday_from(date(2026, 10, 19)),
            Err(BookError::NoBirthday)
        ));
    }

    #[test]
    fn test_countdown_display() {
        assert_eq!(BirthdayCountdown::Today.to_string(), "It is TODAY!!!");
        assert_eq!(BirthdayCountdown::InDays(12).to_string(), "12 days to birthday");
    }

    #[test]
    fn test_record_display() {
        let mut record = record("Alice", &["12345", "67890"]);
        assert_eq!(
            record.to_string(),
            "Alice: Phones: 12345, 67890; E-mail:-; B-day:- \n"
        );

        record.add_email(Email::new("alice@example.com").unwrap());
        record.add_birthday(Birthday::new("01/02/2000").unwrap()).unwrap();
        assert_eq!(
            record.to_string(),
            "Alice: Phones: 12345, 67890; E-mail:alice@example.com; B-day:01.02.2000 \n"
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = record("Alice", &["12345"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alice","phones":["12345"]}"#);
    }
}
