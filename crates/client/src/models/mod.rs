//! Data models for the historian REST APIs.
//!
//! This module provides the request and response payloads of the history,
//! registry and status endpoints. Types are organized by service area in
//! submodules and re-exported here for convenient access.

pub mod history;
mod lenient;
pub mod registry;
pub mod status;

pub use history::{
    AggregateConfiguration, Credential, CredentialType, DeleteEventsDetails,
    DeleteModifiedValuesDetails, DeleteValuesAtTimesDetails, DeleteValuesDetails, Diagnostics,
    DiagnosticsLevel, HistoricEvent, HistoricValue, HistoryReadNextRequest,
    HistoryReadNextResponse, HistoryReadRequest, HistoryReadResponse, HistoryUpdateOperation,
    HistoryUpdateRequest, HistoryUpdateResponse, InsertEventsDetails, InsertValuesDetails,
    ModificationInfo, ReadEventsDetails, ReadModifiedValuesDetails, ReadProcessedValuesDetails,
    ReadRange, ReadValuesAtTimesDetails, ReadValuesDetails, ReplaceEventsDetails,
    ReplaceValuesDetails, RequestHeader, ServiceResult,
};
pub use registry::{
    ApplicationInfo, ApplicationRecord, ApplicationRecordList, ApplicationState, ApplicationType,
    RegistryOperation,
};
pub use status::{ServerStatusView, StatusResponse};
