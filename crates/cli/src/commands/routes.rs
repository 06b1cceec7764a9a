//! Routes command implementation.
//!
//! Prints the service route table. With `--endpoint`, the `{endpointId}`
//! placeholder is replaced by the percent-encoded id.

use anyhow::Result;
use historian_client::HistoryRoute;
use serde::Serialize;

use crate::formatters::{OutputFormat, render};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteEntry {
    operation_id: &'static str,
    method: &'static str,
    path: String,
}

fn route_entries(endpoint: Option<&str>) -> Vec<RouteEntry> {
    HistoryRoute::ALL
        .iter()
        .map(|route| RouteEntry {
            operation_id: route.operation_id(),
            method: route.method().as_str(),
            path: match endpoint {
                Some(id) => route.path(id),
                None => route.path_template().to_string(),
            },
        })
        .collect()
}

pub fn run(endpoint: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let entries = route_entries(endpoint);
    println!("{}", render(output_format, &entries)?);
    Ok(())
}
