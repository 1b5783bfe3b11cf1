// Simple Interest Calculator - Core Library
// Exposes the session and its stages for the CLI binary and tests

pub mod calculator;
pub mod config;
pub mod duration;
pub mod format;
pub mod input;
pub mod presenter;
pub mod screen;
pub mod session;

// Re-export commonly used types
pub use calculator::{compute, Calculation, CalculationRecord, LoanTerms};
pub use config::Config;
pub use duration::{DurationUnit, DAYS_PER_YEAR, MONTHS_PER_YEAR};
pub use format::{format_currency, format_number, format_rate};
pub use input::{
    collect_terms, parse_annual_rate, parse_duration_unit, parse_duration_value,
    parse_principal, Field, InputError, Prompted, Prompter,
};
pub use presenter::{parse_again, render_results, Again};
pub use screen::{NoopScreen, Screen};
pub use session::{Session, SessionEnd, SessionSummary};

#[cfg(feature = "terminal")]
pub use screen::TerminalScreen;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
