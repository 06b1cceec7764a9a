//! Schemas command implementation.

use anyhow::Result;
use historian_client::Schema;
use serde::Serialize;

use crate::formatters::{OutputFormat, render};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaEntry {
    name: &'static str,
    wire_name: &'static str,
}

pub fn run(output_format: OutputFormat) -> Result<()> {
    let entries: Vec<SchemaEntry> = Schema::all()
        .iter()
        .map(|schema| SchemaEntry {
            name: schema.name(),
            wire_name: schema.wire_name(),
        })
        .collect();

    tracing::debug!(count = entries.len(), "listing schemas");
    println!("{}", render(output_format, &entries)?);
    Ok(())
}
