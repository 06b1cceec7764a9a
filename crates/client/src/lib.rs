//! OPC UA historian data contract.
//!
//! This crate provides the typed request and response models exchanged with
//! the OPC UA history and registry REST APIs, together with a route table
//! describing where each payload is sent. It performs no I/O: callers bring
//! their own HTTP transport and use [`codec`] to move between JSON and the
//! typed models.

pub mod codec;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use codec::{Form, Schema, decode, decode_value, encode, encode_pretty};
pub use endpoints::{HistoryDetails, HistoryRoute, Method};
pub use error::{ModelError, Result};
pub use models::{
    AggregateConfiguration, ApplicationInfo, ApplicationRecord, ApplicationRecordList,
    ApplicationState, ApplicationType, Credential, CredentialType, DeleteEventsDetails,
    DeleteModifiedValuesDetails, DeleteValuesAtTimesDetails, DeleteValuesDetails, Diagnostics,
    DiagnosticsLevel, HistoricEvent, HistoricValue, HistoryReadNextRequest,
    HistoryReadNextResponse, HistoryReadRequest, HistoryReadResponse, HistoryUpdateOperation,
    HistoryUpdateRequest, HistoryUpdateResponse, InsertEventsDetails, InsertValuesDetails,
    ModificationInfo, ReadEventsDetails, ReadModifiedValuesDetails, ReadProcessedValuesDetails,
    ReadRange, ReadValuesAtTimesDetails, ReadValuesDetails, RegistryOperation,
    ReplaceEventsDetails, ReplaceValuesDetails, RequestHeader, ServiceResult, StatusResponse,
};
