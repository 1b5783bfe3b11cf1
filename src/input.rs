// ⌨️ Input Collector - prompts, validation, and the "restart" escape
// Each field is read in its own retry loop until it parses and passes its
// constraint. Typing "restart" at any prompt abandons the whole iteration.

use crate::calculator::LoanTerms;
use crate::duration::DurationUnit;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Sentinel accepted at every prompt (trimmed, case-insensitive)
pub const RESTART_TOKEN: &str = "restart";

// ============================================================================
// INPUT ERRORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    AnnualRate,
    Duration,
}

/// Invalid Input - the only user-facing error; always answered by a re-prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Text did not parse as a finite real number
    NotANumber(Field),
    /// Parsed, but zero or below where only positive values make sense
    NotPositive(Field),
    /// Parsed, but below zero
    Negative(Field),
    /// Not one of y/m/d
    UnknownUnit,
    /// Not one of yes/no/restart after the results
    UnknownAnswer,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            InputError::NotANumber(Field::Principal) => {
                "Invalid input. No commas or special letters ($), only numbers and periods (.). For example: 34567.00"
            }
            InputError::NotANumber(Field::AnnualRate) => {
                "Invalid input. Please enter a number, optionally followed by a '%' (e.g., 5, 5.4, 5.4%)."
            }
            InputError::NotANumber(Field::Duration) => {
                "Invalid input. Please enter a number (e.g., 1, 2.5, 730)."
            }
            InputError::NotPositive(Field::Principal) => {
                "Principal amount must be greater than zero. Please enter a positive number."
            }
            InputError::NotPositive(Field::AnnualRate) => {
                "Interest rate must be greater than zero. Please enter a positive number."
            }
            InputError::NotPositive(Field::Duration) => "Duration must be a positive number.",
            InputError::Negative(Field::Principal) => {
                "Principal amount cannot be negative. Please enter a positive number."
            }
            InputError::Negative(Field::AnnualRate) => {
                "Interest rate cannot be negative. Please enter a positive number."
            }
            InputError::Negative(Field::Duration) => {
                "Duration cannot be negative. Please enter a positive number."
            }
            InputError::UnknownUnit => {
                "Invalid unit. Please enter Y for Years, M for Months, or D for Days."
            }
            InputError::UnknownAnswer => "Invalid input. Please type 'yes' or 'no'.",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for InputError {}

// ============================================================================
// FIELD PARSERS
// ============================================================================

pub fn is_restart(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(RESTART_TOKEN)
}

/// Finite real number, surrounding whitespace ignored
fn parse_real(text: &str, field: Field) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(InputError::NotANumber(field))
}

pub fn parse_principal(text: &str) -> Result<f64, InputError> {
    let principal = parse_real(text, Field::Principal)?;
    if principal <= 0.0 {
        return Err(InputError::NotPositive(Field::Principal));
    }
    Ok(principal)
}

/// Percentage points; "5.4" and "5.4%" are the same rate. Zero is allowed.
pub fn parse_annual_rate(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);

    let rate = parse_real(number, Field::AnnualRate)?;
    if rate < 0.0 {
        return Err(InputError::Negative(Field::AnnualRate));
    }
    Ok(rate)
}

pub fn parse_duration_value(text: &str) -> Result<f64, InputError> {
    let value = parse_real(text, Field::Duration)?;
    if value <= 0.0 {
        return Err(InputError::NotPositive(Field::Duration));
    }
    Ok(value)
}

pub fn parse_duration_unit(text: &str) -> Result<DurationUnit, InputError> {
    DurationUnit::from_input(text).ok_or(InputError::UnknownUnit)
}

// ============================================================================
// PROMPTS
// ============================================================================

/// An optional question line followed by an optional inline entry hint
/// that the answer is typed right after (no newline).
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    /// Short name used in logs
    pub name: &'static str,
    pub question: Option<&'static str>,
    pub entry: Option<&'static str>,
}

pub const PRINCIPAL_PROMPT: Prompt = Prompt {
    name: "principal",
    question: Some("What is the principal amount?"),
    entry: None,
};

pub const RATE_PROMPT: Prompt = Prompt {
    name: "annual_rate",
    question: Some("What is the annual interest rate (as a percentage, e.g., 5, 5.4, or 5.4%)?"),
    entry: None,
};

pub const DURATION_PROMPT: Prompt = Prompt {
    name: "duration_value",
    question: Some("What is your finance agreement duration?"),
    entry: Some("Enter the number (e.g., 2, 2.5, 5): "),
};

pub const UNIT_PROMPT: Prompt = Prompt {
    name: "duration_unit",
    question: Some("Is that in (Y)ears, (M)onths, or (D)ays?"),
    entry: Some("Enter Y, M, or D: "),
};

/// Outcome of one prompt loop
#[derive(Debug, Clone, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    /// User typed "restart"; everything collected this iteration is dropped
    Restart,
    /// Input stream ended before a valid answer arrived
    Closed,
}

impl<T> Prompted<T> {
    /// Take the value, or hand the restart/closed signal back re-typed
    pub fn into_value<U>(self) -> Result<T, Prompted<U>> {
        match self {
            Prompted::Value(value) => Ok(value),
            Prompted::Restart => Err(Prompted::Restart),
            Prompted::Closed => Err(Prompted::Closed),
        }
    }
}

// ============================================================================
// PROMPTER
// ============================================================================

/// Line-oriented terminal: answers come from `input`, everything the user
/// sees goes to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to terminal")
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, prompt: &Prompt) -> Result<()> {
        if let Some(question) = prompt.question {
            self.say(question)?;
        }
        if let Some(entry) = prompt.entry {
            write!(self.output, "{}", entry).context("Failed to write to terminal")?;
        }
        self.output.flush().context("Failed to flush terminal")
    }

    /// Ask until `parse` accepts the answer. Unbounded retries.
    pub fn ask<T, F>(&mut self, prompt: &Prompt, parse: F) -> Result<Prompted<T>>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            self.show(prompt)?;

            let Some(answer) = self.read_line()? else {
                debug!(prompt = prompt.name, "input closed");
                return Ok(Prompted::Closed);
            };

            if is_restart(&answer) {
                debug!(prompt = prompt.name, "restart requested");
                return Ok(Prompted::Restart);
            }

            match parse(&answer) {
                Ok(value) => return Ok(Prompted::Value(value)),
                Err(err) => {
                    debug!(prompt = prompt.name, answer = %answer, error = ?err, "rejected input");
                    self.say(&err.to_string())?;
                }
            }
        }
    }
}

// ============================================================================
// COLLECTOR
// ============================================================================

macro_rules! take {
    ($asked:expr) => {
        match $asked.into_value() {
            Ok(value) => value,
            Err(signal) => return Ok(signal),
        }
    };
}

/// Collect principal, rate, duration and unit, in that order
pub fn collect_terms<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Prompted<LoanTerms>> {
    let principal = take!(prompter.ask(&PRINCIPAL_PROMPT, parse_principal)?);
    debug!(principal, "principal accepted");

    let annual_rate = take!(prompter.ask(&RATE_PROMPT, parse_annual_rate)?);
    debug!(annual_rate, "rate accepted");

    let duration_value = take!(prompter.ask(&DURATION_PROMPT, parse_duration_value)?);
    let duration_unit = take!(prompter.ask(&UNIT_PROMPT, parse_duration_unit)?);
    debug!(duration_value, unit = duration_unit.label(), "duration accepted");

    Ok(Prompted::Value(LoanTerms {
        principal,
        annual_rate,
        duration_value,
        duration_unit,
    }))
}

// ============================================================================
// TESTS
// ============================================================================
