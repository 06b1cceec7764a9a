//! Service status model.
//!
//! `StatusResponse` is asymmetric: a client may only set `name` and `status`.
//! Every other field is populated by the server. The derived `Serialize`
//! therefore emits the client form only, while `Deserialize` reads all
//! fields. A server (or a test double standing in for one) produces the full
//! payload through [`StatusResponse::server_view`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Service health and identity at the time of a status query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing)]
    pub current_time: Option<String>,
    #[serde(default, skip_serializing)]
    pub start_time: Option<String>,
    /// Time since `start_time`. The service does not document the unit.
    #[serde(default, skip_serializing)]
    pub up_time: Option<i64>,
    /// Random token identifying one service instance.
    #[serde(default, skip_serializing)]
    pub uid: Option<String>,
    #[serde(default, skip_serializing)]
    pub properties: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing)]
    pub dependencies: Option<HashMap<String, String>>,
    #[serde(rename = "$metadata", default, skip_serializing)]
    pub metadata: Option<HashMap<String, String>>,
}

/// Server-side serialization of a [`StatusResponse`], including every
/// server-populated field that is present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    up_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<&'a HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<&'a HashMap<String, String>>,
    #[serde(rename = "$metadata", skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a HashMap<String, String>>,
}

impl StatusResponse {
    /// Client-side status payload carrying only the settable fields.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
            ..Default::default()
        }
    }

    /// Borrowed view that serializes the full server payload.
    pub fn server_view(&self) -> ServerStatusView<'_> {
        ServerStatusView {
            name: self.name.as_deref(),
            status: self.status.as_deref(),
            current_time: self.current_time.as_deref(),
            start_time: self.start_time.as_deref(),
            up_time: self.up_time,
            uid: self.uid.as_deref(),
            properties: self.properties.as_ref(),
            dependencies: self.dependencies.as_ref(),
            metadata: self.metadata.as_ref(),
        }
    }

    /// Drop every server-populated field, keeping what a client may send.
    pub fn into_client_form(self) -> Self {
        Self {
            name: self.name,
            status: self.status,
            ..Default::default()
        }
    }

    /// Look up a dependency's reported state.
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.dependencies
            .as_ref()
            .and_then(|deps| deps.get(name))
            .map(String::as_str)
    }
}
