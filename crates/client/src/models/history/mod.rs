//! Historical access models.
//!
//! Requests wrap a typed details payload in a read or update envelope; the
//! details type decides which endpoint the request targets (see
//! [`crate::endpoints::HistoryDetails`]).

pub mod common;
pub mod read;
pub mod update;
pub mod values;

pub use common::{
    Credential, CredentialType, Diagnostics, DiagnosticsLevel, HistoryReadNextRequest,
    HistoryReadNextResponse, HistoryReadRequest, HistoryReadResponse, HistoryUpdateRequest,
    HistoryUpdateResponse, RequestHeader, ServiceResult,
};
pub use read::{
    AggregateConfiguration, ReadEventsDetails, ReadModifiedValuesDetails,
    ReadProcessedValuesDetails, ReadRange, ReadValuesAtTimesDetails, ReadValuesDetails,
};
pub use update::{
    DeleteEventsDetails, DeleteModifiedValuesDetails, DeleteValuesAtTimesDetails,
    DeleteValuesDetails, InsertEventsDetails, InsertValuesDetails, ReplaceEventsDetails,
    ReplaceValuesDetails,
};
pub use values::{HistoricEvent, HistoricValue, HistoryUpdateOperation, ModificationInfo};
