//! Status model tests.
//!
//! This module tests the read/write asymmetry of the status payload:
//! - Client serialization emits only `name` and `status`
//! - Deserialization reads every server-populated field, `$metadata` included
//! - The server view reproduces the full payload

use historian_client::models::StatusResponse;
use historian_client::testing::{load_fixture, load_fixture_str};
use historian_client::{Form, Schema, decode, encode};

const SERVER_ONLY_KEYS: &[&str] = &[
    "currentTime",
    "startTime",
    "upTime",
    "uid",
    "properties",
    "dependencies",
    "$metadata",
];

#[test]
fn test_decode_server_status_fixture() {
    let json = load_fixture_str("status/status_response.json");
    let status: StatusResponse = decode("status-response", &json).unwrap();

    assert_eq!(status.name.as_deref(), Some("OPC History Service"));
    assert_eq!(status.up_time, Some(86_400));
    assert_eq!(status.uid.as_deref(), Some("5c1a0e0b6e3f4d2a9b7c8d1e2f3a4b5c"));
    assert_eq!(status.dependency("Vault"), Some("ERROR:Unreachable"));
    let metadata = status.metadata.as_ref().unwrap();
    assert_eq!(metadata.get("@id").map(String::as_str), Some("Status"));
}

#[test]
fn test_client_encoding_never_emits_server_fields() {
    let json = load_fixture_str("status/status_response.json");
    let status: StatusResponse = decode("status-response", &json).unwrap();

    let encoded: serde_json::Value = serde_json::from_str(&encode(&status).unwrap()).unwrap();
    let object = encoded.as_object().unwrap();
    for key in SERVER_ONLY_KEYS {
        assert!(!object.contains_key(*key), "client encoding leaked {key}");
    }
    assert_eq!(object.len(), 2);
}

#[test]
fn test_fresh_client_request_has_only_settable_fields() {
    let request = StatusResponse::new("edge-probe", "OK");
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, serde_json::json!({"name": "edge-probe", "status": "OK"}));
}

#[test]
fn test_server_form_reproduces_fixture() {
    let json = load_fixture_str("status/status_response.json");
    let server = Schema::StatusResponse.normalize(&json, Form::Server).unwrap();
    assert_eq!(server, load_fixture("status/status_response.json"));
}

#[test]
fn test_absent_server_fields_stay_absent() {
    let status: StatusResponse = decode("status-response", r#"{"status": "OK"}"#).unwrap();
    assert_eq!(status.name, None);
    assert_eq!(status.up_time, None);
    assert_eq!(status.properties, None);

    let server = serde_json::to_value(status.server_view()).unwrap();
    assert_eq!(server, serde_json::json!({"status": "OK"}));
}
