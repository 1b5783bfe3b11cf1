// 🔁 Session Loop - collect → compute → present → again?
// Every iteration starts from an empty slate; "restart" anywhere sends
// control back to the principal prompt.

use crate::calculator::CalculationRecord;
use crate::config::Config;
use crate::input::{collect_terms, Prompted, Prompter};
use crate::presenter::{ask_again, present, Again, FAREWELL};
use crate::screen::Screen;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the Principal Calculator!";
pub const RESTART_HINT: &str =
    "Note: You can type 'restart' at any prompt to go back to the beginning.";
pub const SEPARATOR: &str =
    "----------------------------------------------------------------------";

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Answered "no" to "Calculate again?"
    UserExit,
    /// Input stream ran out
    InputClosed,
}

#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub calculations: Vec<CalculationRecord>,
    pub ended_by: SessionEnd,
}

// ============================================================================
// SESSION
// ============================================================================

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    screen: Box<dyn Screen>,
    config: Config,
    history: Vec<CalculationRecord>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, screen: Box<dyn Screen>, config: Config) -> Self {
        Session {
            prompter: Prompter::new(input, output),
            screen,
            config,
            history: Vec::new(),
        }
    }

    fn banner(&mut self) -> Result<()> {
        self.prompter.say(WELCOME)?;
        self.prompter.say(RESTART_HINT)?;
        self.prompter.say(SEPARATOR)?;
        self.prompter.say("")
    }

    fn new_iteration(&mut self) -> Result<()> {
        self.screen.clear(self.prompter.output());
        self.prompter.say("")?;
        self.prompter.say(SEPARATOR)
    }

    fn echo_json(&mut self, record: &CalculationRecord) -> Result<()> {
        let json = serde_json::to_string(record).context("Failed to serialize calculation")?;
        self.prompter.say(&json)
    }

    /// Run until the user answers "no" or input ends
    pub fn run(mut self) -> Result<SessionSummary> {
        info!(clear_screen = self.config.clear_screen, "session started");
        self.banner()?;

        let ended_by = loop {
            let terms = match collect_terms(&mut self.prompter)? {
                Prompted::Value(terms) => terms,
                Prompted::Restart => continue,
                Prompted::Closed => break SessionEnd::InputClosed,
            };

            let record = CalculationRecord::new(self.history.len() + 1, terms);
            debug!(
                sequence = record.sequence,
                total_amount = record.calculation.total_amount,
                "calculation complete"
            );
            if !record.calculation.is_finite() {
                warn!(sequence = record.sequence, "figures overflowed");
            }

            present(
                &mut self.prompter,
                &self.config.currency_symbol,
                &record.terms,
                &record.calculation,
            )?;
            if self.config.echo_json {
                self.echo_json(&record)?;
            }
            self.history.push(record);

            match ask_again(&mut self.prompter)? {
                Prompted::Value(Again::Yes) | Prompted::Restart => self.new_iteration()?,
                Prompted::Value(Again::No) => {
                    self.prompter.say(FAREWELL)?;
                    break SessionEnd::UserExit;
                }
                Prompted::Closed => break SessionEnd::InputClosed,
            }
        };

        self.prompter.output().flush().context("Failed to flush terminal")?;
        info!(calculations = self.history.len(), ended_by = ?ended_by, "session ended");

        Ok(SessionSummary {
            calculations: self.history,
            ended_by,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
