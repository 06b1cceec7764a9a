//! Historian CLI - inspect OPC UA history and registry payloads.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Check and normalize payloads through the shared client library.
//! - Print results as JSON or YAML on stdout; logs go to stderr.
//!
//! Does NOT handle:
//! - Talking to a history service; the route table is informational only.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Schema violations exit with code 5 so scripts can tell bad input from tool failure.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Load `.env` from the working directory unless `DOTENV_DISABLED` is set.
///
/// A missing file is fine; one that exists but cannot be read or parsed is not.
fn load_dotenv() -> Result<(), dotenvy::Error> {
    if matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("1") | Some("true")
    ) {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

fn init_tracing(format: LogFormat, level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        // Line contents may hold secrets; report only the position.
        match e {
            dotenvy::Error::LineParse(_, index) => {
                eprintln!("Failed to parse .env file at character index {}", index)
            }
            other => eprintln!("Failed to load .env file: {}", other),
        }
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_tracing(cli.log_format, cli.log_level.as_deref());

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
