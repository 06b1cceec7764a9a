//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Resolve the global output format once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let output_format = cli.output_format()?;

    match cli.command {
        Commands::Schemas => commands::schemas::run(output_format)?,
        Commands::Routes { endpoint } => commands::routes::run(endpoint.as_deref(), output_format)?,
        Commands::Validate { schema, file } => commands::validate::run(schema, file.as_deref())?,
        Commands::Normalize { schema, file, form } => {
            commands::normalize::run(schema, file.as_deref(), form.into(), output_format)?
        }
    }

    Ok(())
}
