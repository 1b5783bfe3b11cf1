// ⏳ Duration Units - Years, Months, Days
// Every duration is normalized to years before any interest math happens.
//
// Days use the fixed 365-day year (no leap years, no calendar).

use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

// ============================================================================
// DURATION UNIT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    /// Agreement length given in years
    Years,

    /// Agreement length given in months (1/12 of a year)
    Months,

    /// Agreement length given in days (1/365 of a year)
    Days,
}

impl DurationUnit {
    /// Parse the single-letter answer to "(Y)ears, (M)onths, or (D)ays?"
    ///
    /// Case-insensitive, surrounding whitespace ignored. Anything other than
    /// exactly one of y/m/d returns None.
    pub fn from_input(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "y" => Some(DurationUnit::Years),
            "m" => Some(DurationUnit::Months),
            "d" => Some(DurationUnit::Days),
            _ => None,
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            DurationUnit::Years => "Y",
            DurationUnit::Months => "M",
            DurationUnit::Days => "D",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationUnit::Years => "Years",
            DurationUnit::Months => "Months",
            DurationUnit::Days => "Days",
        }
    }

    /// Convert a value expressed in this unit to years
    pub fn to_years(&self, value: f64) -> f64 {
        match self {
            DurationUnit::Years => value,
            DurationUnit::Months => value / MONTHS_PER_YEAR,
            DurationUnit::Days => value / DAYS_PER_YEAR,
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ============================================================================
// TESTS
// ============================================================================
