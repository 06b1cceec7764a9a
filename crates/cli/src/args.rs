//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Give every global flag an environment fallback.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not install logging (see `main`).

use clap::{Parser, Subcommand, ValueEnum};
use historian_client::{Form, Schema};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "historian-cli")]
#[command(about = "Inspect and check OPC UA history and registry payloads", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  historian-cli schemas\n  historian-cli routes\n  historian-cli validate application-record record.json\n  cat status.json | historian-cli normalize status-response --form client\n  historian-cli -o yaml normalize read-values-details details.json\n"
)]
pub struct Cli {
    /// Output format (json, yaml)
    #[arg(short, long, global = true, env = "HISTORIAN_OUTPUT", default_value = "json")]
    pub output: String,

    /// Log format written to stderr
    #[arg(long, global = true, env = "HISTORIAN_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Log filter (e.g. `debug`, `historian_client=trace`); overrides RUST_LOG
    #[arg(long, global = true, env = "HISTORIAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Which side of the exchange a payload is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    /// Outbound request form; server-populated fields are dropped
    Client,
    /// Full form as returned by the service
    Server,
}

impl From<FormArg> for Form {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Client => Form::Client,
            FormArg::Server => Form::Server,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List known payload schemas
    Schemas,

    /// List service routes with their HTTP method and path template
    Routes {
        /// Substitute this endpoint id into the path templates
        #[arg(long, value_name = "ID")]
        endpoint: Option<String>,
    },

    /// Check that a payload decodes as the given schema
    Validate {
        /// Schema name (see `historian-cli schemas`)
        schema: Schema,

        /// Payload file; reads stdin when absent or `-`
        file: Option<PathBuf>,
    },

    /// Decode a payload and write it back out in canonical form
    Normalize {
        /// Schema name (see `historian-cli schemas`)
        schema: Schema,

        /// Payload file; reads stdin when absent or `-`
        file: Option<PathBuf>,

        /// Which side's serialization to emit
        #[arg(long, value_enum, default_value_t = FormArg::Client)]
        form: FormArg,
    },
}

impl Cli {
    pub fn output_format(&self) -> anyhow::Result<OutputFormat> {
        self.output.parse()
    }
}
