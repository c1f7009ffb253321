//! Interactive console input: the author/version prompts and the final
//! key-press wait.

use anyhow::Context;
use anyhow::Result;
use console::Term;
use std::io::BufRead;
use std::io::StdinLock;

pub const AUTHOR_PROMPT: &str = "Author name (e.g. John): ";
pub const VERSION_PROMPT: &str = "Version number (e.g. 1.03): ";
pub const PRESS_ANY_KEY: &str = "Press any key to exit.";

/// Reads free-text answers line by line.
///
/// Prompts go to `term`; answers come from `input`. Nothing is validated:
/// an empty line (or end of input) yields an empty string.
pub struct Prompter<R> {
    term: Term,
    input: R,
}

impl Prompter<StdinLock<'static>> {
    pub fn stdin(term: Term) -> Self {
        Self::new(term, std::io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub fn new(term: Term, input: R) -> Self {
        Self { term, input }
    }

    /// Writes `prompt` and reads one raw line.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("failed to read from standard input")?;

        Ok(strip_line_ending(&line).to_string())
    }

    /// Returns `given` if set, otherwise asks.
    pub fn value_or_ask(&mut self, given: Option<&str>, prompt: &str) -> Result<String> {
        match given {
            Some(value) => Ok(value.to_string()),
            None => self.ask(prompt),
        }
    }
}

/// Removes one trailing `\n` or `\r\n`, leaving other whitespace intact.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

/// Blocks until a key is pressed, when attached to a terminal.
pub fn wait_for_key(term: &Term, message: Option<&str>) {
    if !term.is_term() {
        return;
    }
    if let Some(message) = message {
        let _ = term.write_line(message);
    }
    let _ = term.read_key();
}
