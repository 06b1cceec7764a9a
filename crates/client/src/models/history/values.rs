//! Historic values and events as returned by reads and submitted by updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::lenient::lenient_enum;

lenient_enum! {
    /// How a historic value came to be modified.
    pub enum HistoryUpdateOperation {
        Insert,
        Replace,
        Update,
        Delete,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "crate::models::lenient::is_absent")]
    pub update_type: Option<HistoryUpdateOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// A single historic value of a variable node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_picoseconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_picoseconds: Option<i32>,
    /// Present only when reading modified values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_info: Option<ModificationInfo>,
}

impl HistoricValue {
    pub fn at(source_timestamp: DateTime<Utc>, value: serde_json::Value) -> Self {
        Self {
            value: Some(value),
            source_timestamp: Some(source_timestamp),
            ..Default::default()
        }
    }

    /// A missing or zero status code means the value is good.
    pub fn is_good(&self) -> bool {
        self.status_code.unwrap_or(0) == 0
    }
}

/// A single historic event: the selected field values, in filter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_fields: Option<Vec<serde_json::Value>>,
}
