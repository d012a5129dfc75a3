//! Interactive setup prompts
//!
//! On a terminal the questions go through dialoguer. When stdin is piped the
//! answers are read one line each, so setup can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result, anyhow};
use console::Term;
use dialoguer::Input;

/// Handle Ctrl+C by restoring cursor and returning error
fn handle_interrupt() -> anyhow::Error {
    let _ = Term::stdout().show_cursor();
    anyhow!("Setup cancelled")
}

/// Source of setup answers
pub struct Prompter {
    /// Answer lines when stdin is not a terminal; `None` means dialoguer
    lines: Option<Box<dyn BufRead>>,
}

impl Prompter {
    /// Use dialoguer when stdin is a terminal, plain line reads otherwise
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            Self { lines: None }
        } else {
            Self::from_reader(io::stdin().lock())
        }
    }

    /// Read answers one line each from `reader`
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            lines: Some(Box::new(reader)),
        }
    }

    /// Ask a question; a blank answer is returned as an empty string
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        match &mut self.lines {
            Some(lines) => read_answer(lines, &mut io::stdout(), prompt),
            None => Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|_| handle_interrupt()),
        }
    }

    /// Wait for the operator to press Enter
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        if let Some(lines) = &mut self.lines {
            return read_answer(lines, &mut io::stdout(), prompt).map(|_| ());
        }

        let term = Term::stdout();
        term.write_str(prompt)?;
        term.read_line().map_err(|_| handle_interrupt())?;
        Ok(())
    }
}

/// Print `prompt: ` and read one line; EOF counts as a blank answer
fn read_answer(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read answer from stdin")?;

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_answer_trims_line() {
        let mut input = Cursor::new("  vpstest \nnext\n");
        let mut output = Vec::new();

        let answer = read_answer(&mut input, &mut output, "Host alias").unwrap();
        assert_eq!(answer, "vpstest");
        assert_eq!(String::from_utf8(output).unwrap(), "Host alias: ");
    }

    #[test]
    fn test_sequential_answers_consume_one_line_each() {
        let mut input = Cursor::new("test\n1.2.3.4\n\n");
        let mut output = Vec::new();

        let alias = read_answer(&mut input, &mut output, "a").unwrap();
        let address = read_answer(&mut input, &mut output, "b").unwrap();
        let user = read_answer(&mut input, &mut output, "c").unwrap();
        assert_eq!((alias.as_str(), address.as_str(), user.as_str()), ("test", "1.2.3.4", ""));
    }

    #[test]
    fn test_prompter_from_reader_answers_in_order() {
        let mut prompter = Prompter::from_reader(Cursor::new("web\n\nrest\n"));

        assert_eq!(prompter.ask("Host alias").unwrap(), "web");
        prompter.pause("Press Enter").unwrap();
        assert_eq!(prompter.ask("User").unwrap(), "rest");
        assert_eq!(prompter.ask("More").unwrap(), "");
    }

    #[test]
    fn test_eof_is_blank_answer() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(read_answer(&mut input, &mut output, "x").unwrap(), "");
    }
}
