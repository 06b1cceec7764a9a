//! Update details: inserting, replacing and deleting history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::values::{HistoricEvent, HistoricValue};

/// Delete values at the given source timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteValuesAtTimesDetails {
    pub req_times: Vec<DateTime<Utc>>,
}

/// Delete raw values in a time range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteValuesDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Delete modified values in a time range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteModifiedValuesDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Delete specific events by identifier.
///
/// Identifiers are opaque bytes carried as base64 strings. Their order is
/// kept so that per-item update results line up with this list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventsDetails {
    #[serde(with = "crate::serde_helpers::base64_bytes_vec")]
    pub event_ids: Vec<Vec<u8>>,
}

impl DeleteEventsDetails {
    pub fn new<I, B>(event_ids: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Self {
            event_ids: event_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty list deletes nothing; the server still accepts it.
    pub fn is_empty(&self) -> bool {
        self.event_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.event_ids.len()
    }
}

/// Insert values that do not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertValuesDetails {
    pub values: Vec<HistoricValue>,
}

/// Replace values that already exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplaceValuesDetails {
    pub values: Vec<HistoricValue>,
}

/// Insert new events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertEventsDetails {
    /// Event filter describing the field layout of `events`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    pub events: Vec<HistoricEvent>,
}

/// Replace existing events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplaceEventsDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    pub events: Vec<HistoricEvent>,
}
