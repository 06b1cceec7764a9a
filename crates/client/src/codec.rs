//! JSON codec for historian payloads.
//!
//! Responsibilities:
//! - Decode JSON into typed models, classifying failures as malformed input
//!   or schema violations.
//! - Encode models back to JSON in client or server form.
//! - Keep a catalog of named schemas so tools can pick a model at runtime.
//!
//! Does NOT handle:
//! - Transport. Payload bodies come from and go to the caller.
//!
//! Invariants:
//! - Payload bodies are never logged; only the schema name and error category are.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::models::{
    ApplicationInfo, ApplicationRecord, ApplicationRecordList, ApplicationState,
    DeleteEventsDetails, DeleteModifiedValuesDetails, DeleteValuesAtTimesDetails,
    DeleteValuesDetails, HistoricEvent, HistoricValue, HistoryReadNextRequest,
    HistoryReadRequest, HistoryReadResponse, HistoryUpdateRequest, HistoryUpdateResponse,
    InsertEventsDetails, InsertValuesDetails, ReadEventsDetails, ReadModifiedValuesDetails,
    ReadProcessedValuesDetails, ReadValuesAtTimesDetails, ReadValuesDetails,
    ReplaceEventsDetails, ReplaceValuesDetails, StatusResponse,
};

/// Decode `json` as the model `T`, reporting failures against `schema`.
pub fn decode<T: DeserializeOwned>(schema: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| {
        let err = ModelError::from_decode(schema, e);
        tracing::debug!(schema, error = %err, "payload rejected");
        err
    })
}

/// Decode an already parsed JSON value as the model `T`.
pub fn decode_value<T: DeserializeOwned>(schema: &str, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        let err = ModelError::from_decode(schema, e);
        tracing::debug!(schema, error = %err, "payload rejected");
        err
    })
}

/// Encode a model as compact JSON.
pub fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    serde_json::to_string(payload).map_err(ModelError::Encode)
}

/// Encode a model as indented JSON.
pub fn encode_pretty<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    serde_json::to_string_pretty(payload).map_err(ModelError::Encode)
}

/// Which side of the exchange an encoding is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Form {
    /// What a client sends. Server-populated fields are left out.
    #[default]
    Client,
    /// What a server returns. Every present field is written.
    Server,
}

/// A model that can be written in either [`Form`].
pub trait Payload: Serialize + DeserializeOwned {
    fn to_wire(&self, _form: Form) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Payload for StatusResponse {
    fn to_wire(&self, form: Form) -> serde_json::Result<serde_json::Value> {
        match form {
            Form::Client => serde_json::to_value(self),
            Form::Server => serde_json::to_value(self.server_view()),
        }
    }
}

macro_rules! symmetric_payloads {
    ($($ty:ty),+ $(,)?) => {
        $( impl Payload for $ty {} )+
    };
}

symmetric_payloads!(
    ApplicationInfo,
    ApplicationRecord,
    ApplicationRecordList,
    ApplicationState,
    DeleteEventsDetails,
    DeleteModifiedValuesDetails,
    DeleteValuesAtTimesDetails,
    DeleteValuesDetails,
    HistoricEvent,
    HistoricValue,
    HistoryReadNextRequest,
    HistoryReadRequest<serde_json::Value>,
    HistoryReadResponse<serde_json::Value>,
    HistoryUpdateRequest<serde_json::Value>,
    HistoryUpdateResponse,
    InsertEventsDetails,
    InsertValuesDetails,
    ReadEventsDetails,
    ReadModifiedValuesDetails,
    ReadProcessedValuesDetails,
    ReadValuesAtTimesDetails,
    ReadValuesDetails,
    ReplaceEventsDetails,
    ReplaceValuesDetails,
);

fn normalize_as<T: Payload>(schema: Schema, json: &str, form: Form) -> Result<serde_json::Value> {
    let payload: T = decode(schema.name(), json)?;
    payload.to_wire(form).map_err(ModelError::Encode)
}

macro_rules! schema_catalog {
    ($($variant:ident => $name:literal, $wire:literal, $ty:ty;)+) => {
        /// Named payload schemas known to this crate.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Schema {
            $($variant,)+
        }

        impl Schema {
            pub const ALL: &'static [Schema] = &[$(Schema::$variant),+];

            /// Kebab-case name used on command lines and in errors.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Model name in the service's API description.
            pub const fn wire_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Decode `json` as this schema and re-encode it in `form`.
            pub fn normalize(&self, json: &str, form: Form) -> Result<serde_json::Value> {
                match self {
                    $(Self::$variant => normalize_as::<$ty>(*self, json, form),)+
                }
            }
        }
    };
}

schema_catalog! {
    ApplicationInfo => "application-info", "ApplicationInfoApiModel", ApplicationInfo;
    ApplicationRecord => "application-record", "ApplicationRecordApiModel", ApplicationRecord;
    ApplicationRecordList => "application-record-list", "ApplicationRecordListApiModel", ApplicationRecordList;
    ApplicationState => "application-state", "ApplicationState", ApplicationState;
    StatusResponse => "status-response", "StatusResponseApiModel", StatusResponse;
    HistoryReadRequest => "history-read-request", "HistoryReadRequestApiModel", HistoryReadRequest<serde_json::Value>;
    HistoryReadNextRequest => "history-read-next-request", "HistoryReadNextRequestApiModel", HistoryReadNextRequest;
    HistoryReadResponse => "history-read-response", "HistoryReadResponseApiModel", HistoryReadResponse<serde_json::Value>;
    HistoryUpdateRequest => "history-update-request", "HistoryUpdateRequestApiModel", HistoryUpdateRequest<serde_json::Value>;
    HistoryUpdateResponse => "history-update-response", "HistoryUpdateResponseApiModel", HistoryUpdateResponse;
    HistoricValue => "historic-value", "HistoricValueApiModel", HistoricValue;
    HistoricEvent => "historic-event", "HistoricEventApiModel", HistoricEvent;
    ReadValuesDetails => "read-values-details", "ReadValuesDetailsApiModel", ReadValuesDetails;
    ReadEventsDetails => "read-events-details", "ReadEventsDetailsApiModel", ReadEventsDetails;
    ReadValuesAtTimesDetails => "read-values-at-times-details", "ReadValuesAtTimesDetailsApiModel", ReadValuesAtTimesDetails;
    ReadProcessedValuesDetails => "read-processed-values-details", "ReadProcessedValuesDetailsApiModel", ReadProcessedValuesDetails;
    ReadModifiedValuesDetails => "read-modified-values-details", "ReadModifiedValuesDetailsApiModel", ReadModifiedValuesDetails;
    DeleteEventsDetails => "delete-events-details", "DeleteEventsDetailsApiModel", DeleteEventsDetails;
    DeleteValuesDetails => "delete-values-details", "DeleteValuesDetailsApiModel", DeleteValuesDetails;
    DeleteValuesAtTimesDetails => "delete-values-at-times-details", "DeleteValuesAtTimesDetailsApiModel", DeleteValuesAtTimesDetails;
    DeleteModifiedValuesDetails => "delete-modified-values-details", "DeleteModifiedValuesDetailsApiModel", DeleteModifiedValuesDetails;
    InsertValuesDetails => "insert-values-details", "InsertValuesDetailsApiModel", InsertValuesDetails;
    ReplaceValuesDetails => "replace-values-details", "ReplaceValuesDetailsApiModel", ReplaceValuesDetails;
    InsertEventsDetails => "insert-events-details", "InsertEventsDetailsApiModel", InsertEventsDetails;
    ReplaceEventsDetails => "replace-events-details", "ReplaceEventsDetailsApiModel", ReplaceEventsDetails;
}

impl Schema {
    pub fn all() -> &'static [Schema] {
        Self::ALL
    }

    /// Look up a schema by kebab-case name or wire model name, ignoring case.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|schema| {
                schema.name().eq_ignore_ascii_case(name)
                    || schema.wire_name().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ModelError::UnknownSchema(name.to_string()))
    }

    /// Check `json` against this schema without keeping the result.
    pub fn validate(&self, json: &str) -> Result<()> {
        self.normalize(json, Form::Server).map(|_| ())
    }
}

impl FromStr for Schema {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_classifies_missing_field() {
        let err = decode::<ApplicationRecord>("application-record", r#"{"application": {}}"#)
            .unwrap_err();
        match err {
            ModelError::Schema { schema, message } => {
                assert_eq!(schema, "application-record");
                assert!(message.contains("recordId"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_classifies_syntax_error() {
        let err = decode::<ApplicationRecord>("application-record", "{recordId: 1}").unwrap_err();
        assert!(matches!(err, ModelError::Malformed { .. }));
    }

    #[test]
    fn test_decode_value_missing_event_ids() {
        let err = decode_value::<DeleteEventsDetails>("delete-events-details", json!({}))
            .unwrap_err();
        assert!(matches!(err, ModelError::Schema { .. }));
    }

    #[test]
    fn test_schema_parse_accepts_both_names() {
        assert_eq!(Schema::parse("read-values-details").unwrap(), Schema::ReadValuesDetails);
        assert_eq!(
            Schema::parse("StatusResponseApiModel").unwrap(),
            Schema::StatusResponse
        );
        assert_eq!("Application-Record".parse::<Schema>().unwrap(), Schema::ApplicationRecord);
        assert!(matches!(
            Schema::parse("nope"),
            Err(ModelError::UnknownSchema(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_schema_names_unique() {
        let mut names: Vec<_> = Schema::ALL.iter().map(Schema::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Schema::ALL.len());
    }

    #[test]
    fn test_normalize_status_forms() {
        let json = r#"{"name": "history", "status": "OK", "uid": "u1", "$metadata": {"k": "v"}}"#;
        let client = Schema::StatusResponse.normalize(json, Form::Client).unwrap();
        assert_eq!(client, json!({"name": "history", "status": "OK"}));
        let server = Schema::StatusResponse.normalize(json, Form::Server).unwrap();
        assert_eq!(server["uid"], "u1");
        assert_eq!(server["$metadata"]["k"], "v");
    }

    #[test]
    fn test_normalize_drops_absent_fields() {
        let json = r#"{"startTime": "2024-01-01T00:00:00+01:00", "returnBounds": null}"#;
        let value = Schema::ReadValuesDetails.normalize(json, Form::Client).unwrap();
        assert_eq!(value, json!({"startTime": "2023-12-31T23:00:00Z"}));
    }

    #[test]
    fn test_normalize_application_state_lenient() {
        let value = Schema::ApplicationState
            .normalize("\"approved\"", Form::Client)
            .unwrap();
        assert_eq!(value, json!("Approved"));
        let value = Schema::ApplicationState.normalize("\"Bogus\"", Form::Client).unwrap();
        assert_eq!(value, serde_json::Value::Null);
    }

    #[test]
    fn test_validate_reports_schema() {
        let err = Schema::DeleteEventsDetails.validate(r#"{"eventIds": 5}"#).unwrap_err();
        assert!(err.is_schema_violation());
        assert!(err.to_string().contains("delete-events-details"));
    }

    #[test]
    fn test_encode_pretty_status_client_form() {
        let status = StatusResponse {
            uid: Some("u1".to_string()),
            ..StatusResponse::new("history", "OK")
        };
        let text = encode_pretty(&status).unwrap();
        assert!(text.contains("\"name\": \"history\""));
        assert!(!text.contains("uid"));
        assert_eq!(encode(&status).unwrap(), r#"{"name":"history","status":"OK"}"#);
    }
}
