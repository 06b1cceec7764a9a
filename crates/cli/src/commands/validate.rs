//! Validate command implementation.
//!
//! Decodes a payload against a schema and prints `ok`. Failures propagate as
//! `ModelError` so `main` can map them to the validation exit code.

use anyhow::{Context, Result};
use historian_client::Schema;
use std::path::Path;

use super::{read_input, source_name};

pub fn run(schema: Schema, file: Option<&Path>) -> Result<()> {
    let body = read_input(file)?;
    let source = source_name(file);

    tracing::debug!(%schema, %source, bytes = body.len(), "validating payload");
    schema
        .validate(&body)
        .with_context(|| format!("{source} is not a valid {schema}"))?;

    println!("ok");
    Ok(())
}
