use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors in user-supplied numbers, caught before anything reaches the solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{what} must be a number, got `{text}`")]
    NotANumber { what: &'static str, text: String },

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("epsilon must be positive, got {value}")]
    Epsilon { value: f64 },

    #[error("input ended before {what} was entered")]
    Missing { what: &'static str },
}

/// Parses a bracket endpoint.
///
/// # Errors
///
/// Returns an [`InputError`] if `text` is not a finite number.
pub fn parse_bound(what: &'static str, text: &str) -> Result<f64, InputError> {
    check_bound(what, parse_number(what, text)?)
}

/// Parses the precision.
///
/// # Errors
///
/// Returns an [`InputError`] if `text` is not a finite, positive number.
pub fn parse_epsilon(text: &str) -> Result<f64, InputError> {
    check_epsilon(parse_number("epsilon", text)?)
}

/// Checks that a bracket endpoint is finite.
///
/// # Errors
///
/// Returns [`InputError::NonFinite`] otherwise.
pub fn check_bound(what: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite { what, value })
    }
}

/// Checks that the precision is finite and positive.
///
/// # Errors
///
/// Returns an [`InputError`] otherwise.
pub fn check_epsilon(value: f64) -> Result<f64, InputError> {
    let value = check_bound("epsilon", value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::Epsilon { value })
    }
}

fn parse_number(what: &'static str, text: &str) -> Result<f64, InputError> {
    let text = text.trim();
    text.parse().map_err(|_| InputError::NotANumber {
        what,
        text: text.to_owned(),
    })
}

/// Asks for values one line at a time.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `input` and writing prompts to
    /// `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` and reads one line, without its line ending.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the answer fails.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Asks for a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Missing`] (as an `io::Error`) at end of input.
    pub fn require(&mut self, what: &'static str, prompt: &str) -> io::Result<String> {
        self.ask(prompt)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, InputError::Missing { what }))
    }
}
