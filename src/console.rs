//! Line-oriented console used by the session loop and by handlers that
//! need a follow-up answer from the user.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of user input and sink for output.
pub trait Console {
    /// Print a block of text followed by a newline.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Print `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console over any buffered reader and writer, usually stdin/stdout.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Bytes, not read_line: one undecodable line must not end the session.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Console that answers from a fixed script and records everything shown.
///
/// Used to drive sessions without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Everything passed to [`Console::say`], in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Every prompt passed to [`Console::ask`], in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_terminal_console_reads_lines() {
        let input = Cursor::new("first line\r\nsecond\n");
        let mut console = TerminalConsole::new(input, Vec::new());

        assert_eq!(console.ask(">>>").unwrap().as_deref(), Some("first line"));
        assert_eq!(console.ask(">>>").unwrap().as_deref(), Some("second"));
        assert_eq!(console.ask(">>>").unwrap(), None);

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, ">>>>>>>>>");
    }

    #[test]
    fn test_terminal_console_replaces_invalid_utf8() {
        let input = Cursor::new(b"\xff\xfe\nhello\n".to_vec());
        let mut console = TerminalConsole::new(input, Vec::new());

        let first = console.ask(">>>").unwrap().unwrap();
        assert_eq!(first, "\u{FFFD}\u{FFFD}");
        assert_eq!(console.ask(">>>").unwrap().as_deref(), Some("hello"));
        assert_eq!(console.ask(">>>").unwrap(), None);
    }

    #[test]
    fn test_terminal_console_says_with_newline() {
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new());
        console.say("hello").unwrap();
        assert_eq!(console.into_writer(), b"hello\n");
    }

    #[test]
    fn test_scripted_console_records() {
        let mut console = ScriptedConsole::new(["y"]);
        console.say("question follows").unwrap();
        assert_eq!(console.ask("Sure? ").unwrap().as_deref(), Some("y"));
        assert_eq!(console.ask("Again? ").unwrap(), None);
        assert_eq!(console.transcript(), ["question follows"]);
        assert_eq!(console.prompts(), ["Sure? ", "Again? "]);
        assert_eq!(console.remaining(), 0);
    }
}
