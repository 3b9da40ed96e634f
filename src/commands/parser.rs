//! Command-line tokenizer.
//!
//! Matching is case-insensitive and picks the longest phrase that the line
//! starts with, so `add email` wins over `add` regardless of table order.
//! Only the leading phrase is removed; the rest is split on its last space
//! into at most two arguments.

use super::{Command, PHRASES};

/// A recognized command and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub command: Command,
    pub args: Vec<String>,
}

/// Parse a raw input line.
///
/// Returns `None` when no command phrase matches.
///
/// # Example
///
/// ```
/// use contact_book::commands::{parse, Command};
///
/// let parsed = parse("ADD   John Smith  +380501234567").unwrap();
/// assert_eq!(parsed.command, Command::Add);
/// assert_eq!(parsed.args, vec!["John Smith", "+380501234567"]);
/// ```
pub fn parse(line: &str) -> Option<ParsedLine> {
    let line = line.split_whitespace().collect::<Vec<_>>().join(" ");

    let (phrase, command) = PHRASES
        .iter()
        .filter(|(phrase, _)| starts_with_phrase(&line, phrase))
        .max_by_key(|(phrase, _)| phrase.len())?;

    let rest = line[phrase.len()..].trim();
    let args = if rest.is_empty() {
        Vec::new()
    } else {
        match rest.rsplit_once(' ') {
            Some((head, last)) => vec![head.to_string(), last.to_string()],
            None => vec![rest.to_string()],
        }
    };

    Some(ParsedLine {
        command: *command,
        args,
    })
}

fn starts_with_phrase(line: &str, phrase: &str) -> bool {
    let Some(head) = line.get(..phrase.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(phrase)
        && line[phrase.len()..].chars().next().map_or(true, |c| c == ' ')
}
