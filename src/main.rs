mod domain;
mod engine;
mod ingestion;
mod reporter;
mod screen;

use std::{fs::File, path::PathBuf};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::domain::{Account, Money};
use crate::engine::Engine;
use crate::ingestion::{CsvScript, LineReader};
use crate::reporter::StdErrReporter;
use crate::screen::ConsoleScreen;

/// A single-account teller: withdraw, deposit and check the balance.
#[derive(Debug, Parser)]
#[command(name = "atm", version)]
struct Cli {
    /// Balance the account opens with [default: 1000.00]
    #[arg(long, allow_hyphen_values = true)]
    opening_balance: Option<String>,

    /// CSV script with an `action,amount` header; commands are read from stdin when omitted
    script: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("atm=warn")))
        .init();

    let cli = Cli::parse();

    let account = match cli.opening_balance.as_deref() {
        Some(text) => Account::with_balance(Money::parse_amount(text)?)?,
        None => Account::new(),
    };

    let screen = ConsoleScreen::stdout();
    let reporter = StdErrReporter::stderr();

    let closing = match cli.script {
        Some(path) => {
            let file = File::open(&path)?;
            Engine::new(CsvScript::new(file), account, screen, reporter)
                .process()
                .await
        }
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            Engine::new(LineReader::new(stdin), account, screen, reporter)
                .process()
                .await
        }
    };

    tracing::debug!(%closing, "session ended");

    Ok(())
}
