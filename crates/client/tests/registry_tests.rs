//! Registry model tests.
//!
//! This module tests decoding of application records and record lists:
//! - Required `recordId` / `application` enforcement
//! - Nested application info (certificate bytes, timestamps, enums)
//! - Lenient application state and type parsing
//!
//! # What this does NOT handle
//! - Registry service behavior (paging semantics are the server's concern)

use chrono::{TimeZone, Utc};
use historian_client::models::{
    ApplicationRecord, ApplicationRecordList, ApplicationState, ApplicationType,
};
use historian_client::testing::load_fixture_str;
use historian_client::{ModelError, Schema, decode};

#[test]
fn test_decode_application_record_fixture() {
    let json = load_fixture_str("registry/application_record.json");
    let record: ApplicationRecord = decode("application-record", &json).unwrap();

    assert_eq!(record.record_id, 17);
    let app = &record.application;
    assert_eq!(app.application_type, Some(ApplicationType::Server));
    assert_eq!(app.name_for_locale("de-DE"), Some("Kesselsteuerung"));
    assert_eq!(app.certificate.as_ref().map(Vec::len), Some(15));
    assert_eq!(app.discovery_urls.as_deref(), Some(&["opc.tcp://boiler:4840".to_string()][..]));
    assert_eq!(app.gateway_server_uri, None);
    assert_eq!(app.updated, None);

    let created = app.created.as_ref().unwrap();
    assert_eq!(created.authority_id, "registry");
    assert_eq!(
        created.time,
        Utc.with_ymd_and_hms(2024, 2, 11, 8, 15, 30).unwrap()
            + chrono::Duration::milliseconds(250)
    );
}

#[test]
fn test_missing_record_id_is_schema_error() {
    let json = load_fixture_str("registry/application_record_missing_id.json");
    let err = decode::<ApplicationRecord>("application-record", &json).unwrap_err();

    assert!(matches!(err, ModelError::Schema { .. }));
    assert!(err.to_string().contains("recordId"));
}

#[test]
fn test_missing_application_is_schema_error() {
    let err = Schema::ApplicationRecord
        .validate(r#"{"recordId": 4}"#)
        .unwrap_err();
    assert!(err.is_schema_violation());
    assert!(err.to_string().contains("application"));
}

#[test]
fn test_record_reencodes_certificate_verbatim() {
    let json = load_fixture_str("registry/application_record.json");
    let value = Schema::ApplicationRecord
        .normalize(&json, historian_client::Form::Client)
        .unwrap();
    assert_eq!(value["application"]["certificate"], "MIIBszCCAVmgAwIBAgIU");
    assert_eq!(value["application"]["created"]["time"], "2024-02-11T08:15:30.250Z");
}

#[test]
fn test_record_list_lenient_types_and_lost_apps() {
    let json = load_fixture_str("registry/application_record_list.json");
    let list: ApplicationRecordList = decode("application-record-list", &json).unwrap();

    let records = list.records();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].application.application_type,
        Some(ApplicationType::Client)
    );
    assert_eq!(
        records[1].application.application_type,
        Some(ApplicationType::Unknown)
    );
    assert!(!records[0].application.is_lost());
    assert!(records[1].application.is_lost());
    assert_eq!(
        records[1].application.not_seen_since,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap())
    );
    assert_eq!(list.next_record_id, 3);
}

#[test]
fn test_application_state_lenient_parse() {
    assert_eq!(ApplicationState::parse("approved"), ApplicationState::Approved);
    assert_eq!(ApplicationState::parse("Bogus"), ApplicationState::Unknown);

    let state: ApplicationState = decode("application-state", "\"REJECTED\"").unwrap();
    assert_eq!(state, ApplicationState::Rejected);
    let state: ApplicationState = decode("application-state", "\"Pending\"").unwrap();
    assert_eq!(state, ApplicationState::Unknown);
}

#[test]
fn test_unrecognized_application_type_is_omitted_on_output() {
    let value = Schema::ApplicationInfo
        .normalize(
            r#"{"applicationType": "Gateway", "applicationUri": "urn:plant-a:gw"}"#,
            historian_client::Form::Client,
        )
        .unwrap();

    let object = value.as_object().unwrap();
    assert!(!object.contains_key("applicationType"));
    assert_eq!(value, serde_json::json!({"applicationUri": "urn:plant-a:gw"}));
}

#[test]
fn test_record_list_reencodes_without_nulls() {
    let json = load_fixture_str("registry/application_record_list.json");
    let list: ApplicationRecordList = decode("application-record-list", &json).unwrap();
    let value = serde_json::to_value(&list).unwrap();

    assert_eq!(value["applications"][0]["application"]["applicationType"], "Client");
    assert!(value["applications"][1]["application"]
        .as_object()
        .unwrap()
        .get("applicationType")
        .is_none());
}
