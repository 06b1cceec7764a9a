//! Normalize command implementation.
//!
//! Responsibilities:
//! - Decode a payload into its typed model.
//! - Re-emit it in client or server form, as JSON or YAML.
//!
//! Does NOT handle:
//! - Merging or editing payloads; the output carries exactly what decoded.

use anyhow::{Context, Result};
use historian_client::{Form, Schema};
use std::path::Path;

use super::{read_input, source_name};
use crate::formatters::{OutputFormat, render};

pub fn run(
    schema: Schema,
    file: Option<&Path>,
    form: Form,
    output_format: OutputFormat,
) -> Result<()> {
    let body = read_input(file)?;
    let source = source_name(file);

    tracing::debug!(%schema, %source, ?form, "normalizing payload");
    let value = schema
        .normalize(&body, form)
        .with_context(|| format!("{source} is not a valid {schema}"))?;

    println!("{}", render(output_format, &value)?);
    Ok(())
}
