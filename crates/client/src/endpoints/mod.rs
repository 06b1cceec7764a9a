//! Route table of the history API.
//!
//! Responsibilities:
//! - Name every history operation with its HTTP method and path template.
//! - Bind each typed details payload to the operation that accepts it.
//! - Expand `{endpointId}` with a percent-encoded endpoint id.
//!
//! Does NOT handle:
//! - Sending requests. Transport, retries and authentication belong to the caller.

pub mod url_encoding;

use std::fmt;

use crate::models::{
    DeleteEventsDetails, DeleteModifiedValuesDetails, DeleteValuesAtTimesDetails,
    DeleteValuesDetails, HistoryReadRequest, HistoryUpdateRequest, InsertEventsDetails,
    InsertValuesDetails, ReadEventsDetails, ReadModifiedValuesDetails, ReadProcessedValuesDetails,
    ReadValuesAtTimesDetails, ReadValuesDetails, ReplaceEventsDetails, ReplaceValuesDetails,
};
use url_encoding::encode_path_segment;

const ENDPOINT_ID_PLACEHOLDER: &str = "{endpointId}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations exposed by the history service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryRoute {
    DeleteValuesAtTimes,
    DeleteValues,
    DeleteModifiedValues,
    DeleteEvents,
    ReadRaw,
    ReadRawNext,
    UpdateRaw,
    InsertValues,
    InsertEvents,
    ReadEvents,
    ReadEventsNext,
    ReadValues,
    ReadValuesAtTimes,
    ReadProcessedValues,
    ReadModifiedValues,
    ReadValuesNext,
    ReplaceValues,
    ReplaceEvents,
    Status,
}

impl HistoryRoute {
    pub const ALL: &'static [HistoryRoute] = &[
        Self::DeleteValuesAtTimes,
        Self::DeleteValues,
        Self::DeleteModifiedValues,
        Self::DeleteEvents,
        Self::ReadRaw,
        Self::ReadRawNext,
        Self::UpdateRaw,
        Self::InsertValues,
        Self::InsertEvents,
        Self::ReadEvents,
        Self::ReadEventsNext,
        Self::ReadValues,
        Self::ReadValuesAtTimes,
        Self::ReadProcessedValues,
        Self::ReadModifiedValues,
        Self::ReadValuesNext,
        Self::ReplaceValues,
        Self::ReplaceEvents,
        Self::Status,
    ];

    pub const fn method(&self) -> Method {
        match self {
            Self::Status => Method::Get,
            _ => Method::Post,
        }
    }

    /// Path with an `{endpointId}` placeholder where applicable.
    pub const fn path_template(&self) -> &'static str {
        match self {
            Self::DeleteValuesAtTimes => "/v2/delete/{endpointId}/values/pick",
            Self::DeleteValues => "/v2/delete/{endpointId}/values",
            Self::DeleteModifiedValues => "/v2/delete/{endpointId}/values/modified",
            Self::DeleteEvents => "/v2/delete/{endpointId}/events",
            Self::ReadRaw => "/v2/history/read/{endpointId}",
            Self::ReadRawNext => "/v2/history/read/{endpointId}/next",
            Self::UpdateRaw => "/v2/history/update/{endpointId}",
            Self::InsertValues => "/v2/insert/{endpointId}/values",
            Self::InsertEvents => "/v2/insert/{endpointId}/events",
            Self::ReadEvents => "/v2/read/{endpointId}/events",
            Self::ReadEventsNext => "/v2/read/{endpointId}/events/next",
            Self::ReadValues => "/v2/read/{endpointId}/values",
            Self::ReadValuesAtTimes => "/v2/read/{endpointId}/values/pick",
            Self::ReadProcessedValues => "/v2/read/{endpointId}/values/processed",
            Self::ReadModifiedValues => "/v2/read/{endpointId}/values/modified",
            Self::ReadValuesNext => "/v2/read/{endpointId}/values/next",
            Self::ReplaceValues => "/v2/replace/{endpointId}/values",
            Self::ReplaceEvents => "/v2/replace/{endpointId}/events",
            Self::Status => "/v2/status",
        }
    }

    /// Operation id as published in the service's API description.
    pub const fn operation_id(&self) -> &'static str {
        match self {
            Self::DeleteValuesAtTimes => "HistoryDeleteValuesAtTimes",
            Self::DeleteValues => "HistoryDeleteValues",
            Self::DeleteModifiedValues => "HistoryDeleteModifiedValues",
            Self::DeleteEvents => "HistoryDeleteEvents",
            Self::ReadRaw => "HistoryReadRaw",
            Self::ReadRawNext => "HistoryReadRawNext",
            Self::UpdateRaw => "HistoryUpdateRaw",
            Self::InsertValues => "HistoryInsertValues",
            Self::InsertEvents => "HistoryInsertEvents",
            Self::ReadEvents => "HistoryReadEvents",
            Self::ReadEventsNext => "HistoryReadEventsNext",
            Self::ReadValues => "HistoryReadValues",
            Self::ReadValuesAtTimes => "HistoryReadValuesAtTimes",
            Self::ReadProcessedValues => "HistoryReadProcessedValues",
            Self::ReadModifiedValues => "HistoryReadModifiedValues",
            Self::ReadValuesNext => "HistoryReadValueNext",
            Self::ReplaceValues => "HistoryReplaceValues",
            Self::ReplaceEvents => "HistoryReplaceEvents",
            Self::Status => "GetStatus",
        }
    }

    pub const fn requires_endpoint(&self) -> bool {
        !matches!(self, Self::Status)
    }

    /// Concrete path for `endpoint_id`.
    ///
    /// The id is percent-encoded as a single segment. Routes without an
    /// endpoint ignore it.
    pub fn path(&self, endpoint_id: &str) -> String {
        let template = self.path_template();
        if !self.requires_endpoint() {
            return template.to_string();
        }
        template.replace(ENDPOINT_ID_PLACEHOLDER, &encode_path_segment(endpoint_id))
    }

    /// Route that continues a paged read started on this route.
    pub const fn next_route(&self) -> Option<HistoryRoute> {
        match self {
            Self::ReadRaw | Self::ReadRawNext => Some(Self::ReadRawNext),
            Self::ReadEvents | Self::ReadEventsNext => Some(Self::ReadEventsNext),
            Self::ReadValues
            | Self::ReadValuesAtTimes
            | Self::ReadProcessedValues
            | Self::ReadModifiedValues
            | Self::ReadValuesNext => Some(Self::ReadValuesNext),
            _ => None,
        }
    }
}

impl fmt::Display for HistoryRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path_template())
    }
}

/// A typed details payload and the route that accepts it.
pub trait HistoryDetails {
    const ROUTE: HistoryRoute;
}

macro_rules! bind_route {
    ($($details:ty => $route:ident),+ $(,)?) => {
        $(
            impl HistoryDetails for $details {
                const ROUTE: HistoryRoute = HistoryRoute::$route;
            }
        )+
    };
}

bind_route! {
    DeleteValuesAtTimesDetails => DeleteValuesAtTimes,
    DeleteValuesDetails => DeleteValues,
    DeleteModifiedValuesDetails => DeleteModifiedValues,
    DeleteEventsDetails => DeleteEvents,
    InsertValuesDetails => InsertValues,
    InsertEventsDetails => InsertEvents,
    ReadEventsDetails => ReadEvents,
    ReadValuesDetails => ReadValues,
    ReadValuesAtTimesDetails => ReadValuesAtTimes,
    ReadProcessedValuesDetails => ReadProcessedValues,
    ReadModifiedValuesDetails => ReadModifiedValues,
    ReplaceValuesDetails => ReplaceValues,
    ReplaceEventsDetails => ReplaceEvents,
}

impl<T: HistoryDetails> HistoryReadRequest<T> {
    pub fn route(&self) -> HistoryRoute {
        T::ROUTE
    }
}

impl<T: HistoryDetails> HistoryUpdateRequest<T> {
    pub fn route(&self) -> HistoryRoute {
        T::ROUTE
    }
}
