use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use interest_calculator::{screen, Config, Session, SessionEnd};

/// Interactive simple-interest calculator
#[derive(Parser)]
#[command(name = "interest-calculator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Never clear the terminal between calculations
    #[arg(long)]
    no_clear: bool,

    /// Currency symbol shown before money amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Also print each result as a JSON line
    #[arg(long)]
    json: bool,

    /// Debug logging on stderr (when RUST_LOG is not set)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            clear_screen: !self.no_clear,
            currency_symbol: self.currency.clone(),
            echo_json: self.json,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout belongs to the prompts
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let screen = screen::for_terminal(config.clear_screen);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(stdin.lock(), stdout.lock(), screen, config).run()?;

    if summary.ended_by == SessionEnd::InputClosed {
        tracing::info!(calculations = summary.calculations.len(), "input closed, exiting");
    }

    Ok(())
}
