// 📊 Result Presenter - results block + "Calculate again?" decision

use crate::calculator::{Calculation, LoanTerms};
use crate::format::{format_currency, format_number, format_rate};
use crate::input::{InputError, Prompt, Prompted, Prompter};
use anyhow::Result;
use std::io::{BufRead, Write};

pub const RESULTS_HEADER: &str = "--- Calculation Results ---";
pub const RESULTS_FOOTER: &str = "---------------------------";
pub const FAREWELL: &str = "Thank you for using the Simple Interest Calculator. Goodbye!";

pub const AGAIN_PROMPT: Prompt = Prompt {
    name: "again",
    question: None,
    entry: Some("Calculate again? (yes/no): "),
};

/// What the user wants after seeing results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Again {
    Yes,
    No,
}

pub fn parse_again(text: &str) -> Result<Again, InputError> {
    match text.trim().to_lowercase().as_str() {
        "yes" => Ok(Again::Yes),
        "no" => Ok(Again::No),
        _ => Err(InputError::UnknownAnswer),
    }
}

/// Results block, one entry per output line
pub fn render_results(currency: &str, terms: &LoanTerms, calc: &Calculation) -> Vec<String> {
    vec![
        String::new(),
        RESULTS_HEADER.to_string(),
        format!("Principal Amount: {}", format_currency(currency, terms.principal)),
        format!("Annual Interest Rate: {}", format_rate(terms.annual_rate)),
        format!(
            "Original Time Input: {} {}",
            format_number(terms.duration_value),
            terms.duration_unit.letter()
        ),
        format!("Total Time (Years): {}", format_number(calc.duration_years)),
        format!("Total Time (Months): {}", format_number(calc.duration_months)),
        format!(
            "Calculated Simple Interest: {}",
            format_currency(currency, calc.simple_interest)
        ),
        format!(
            "Total Amount After Interest: {}",
            format_currency(currency, calc.total_amount)
        ),
        format!(
            "Estimated Minimum Monthly Payment: {}",
            format_currency(currency, calc.minimum_monthly_payment)
        ),
        RESULTS_FOOTER.to_string(),
        String::new(),
    ]
}

/// Write the results block
pub fn present<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    currency: &str,
    terms: &LoanTerms,
    calc: &Calculation,
) -> Result<()> {
    for line in render_results(currency, terms, calc) {
        prompter.say(&line)?;
    }
    Ok(())
}

/// Ask "Calculate again?" until the answer is yes, no, or restart.
///
/// "restart" comes back as `Prompted::Restart` and is treated like "yes".
pub fn ask_again<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Prompted<Again>> {
    prompter.ask(&AGAIN_PROMPT, parse_again)
}
