//! Read details: what part of a node's history to return.
//!
//! Every field of a read descriptor is optional on the wire, and absence is
//! meaningful (an open time bound, no value limit), so all of them are
//! modelled as `Option` rather than defaulted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Direction and extent of a time-range query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadRange {
    /// No time bound on either side.
    Unbounded,
    /// From `from` forward in time until the value limit is reached.
    Forward { from: DateTime<Utc> },
    /// From `until` backward in time until the value limit is reached.
    Backward { until: DateTime<Utc> },
    /// Closed range between two instants.
    Between {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl ReadRange {
    fn from_bounds(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        match (start, end) {
            (None, None) => Self::Unbounded,
            (Some(from), None) => Self::Forward { from },
            (None, Some(until)) => Self::Backward { until },
            (Some(start), Some(end)) => Self::Between { start, end },
        }
    }

    /// True when results are returned newest first.
    ///
    /// A `Between` range whose end precedes its start is read in reverse.
    pub fn is_reverse(&self) -> bool {
        match self {
            Self::Backward { .. } => true,
            Self::Between { start, end } => end < start,
            Self::Unbounded | Self::Forward { .. } => false,
        }
    }
}

fn limit(count: Option<u32>) -> Option<NonZeroU32> {
    count.and_then(NonZeroU32::new)
}

/// Read raw historic values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadValuesDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Maximum number of values; absent or 0 means no maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_values: Option<u32>,
    /// Whether to include the bounding values around the range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_bounds: Option<bool>,
}

impl ReadValuesDetails {
    pub fn time_range(&self) -> ReadRange {
        ReadRange::from_bounds(self.start_time, self.end_time)
    }

    pub fn max_values(&self) -> Option<NonZeroU32> {
        limit(self.num_values)
    }

    /// Absent `return_bounds` behaves like `false`.
    pub fn includes_bounds(&self) -> bool {
        self.return_bounds.unwrap_or(false)
    }
}

/// Read historic events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadEventsDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_events: Option<u32>,
    /// Event filter selecting fields and events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

impl ReadEventsDetails {
    pub fn time_range(&self) -> ReadRange {
        ReadRange::from_bounds(self.start_time, self.end_time)
    }

    pub fn max_events(&self) -> Option<NonZeroU32> {
        limit(self.num_events)
    }
}

/// Read values at specific instants, interpolating where needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadValuesAtTimesDetails {
    pub req_times: Vec<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_simple_bounds: Option<bool>,
}

/// Aggregate calculation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_server_capabilities_defaults: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treat_uncertain_as_bad: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_data_bad: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_data_good: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_sloped_extrapolation: Option<bool>,
}

/// Read aggregated values over fixed intervals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadProcessedValuesDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Interval length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_interval: Option<f64>,
    /// Node id of the aggregate function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_configuration: Option<AggregateConfiguration>,
}

/// Read the modification history of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadModifiedValuesDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_values: Option<u32>,
}

impl ReadModifiedValuesDetails {
    pub fn time_range(&self) -> ReadRange {
        ReadRange::from_bounds(self.start_time, self.end_time)
    }

    pub fn max_values(&self) -> Option<NonZeroU32> {
        limit(self.num_values)
    }
}
