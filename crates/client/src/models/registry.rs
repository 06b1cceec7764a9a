//! Application registry models.
//!
//! This module contains the application description shared by the registry
//! and certificate services, the numbered application record wrapping it,
//! and the lifecycle state of an application registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::lenient::lenient_enum;

lenient_enum! {
    /// Lifecycle state of an application registration.
    pub enum ApplicationState {
        New,
        Approved,
        Rejected,
    }
}

lenient_enum! {
    /// Kind of OPC UA application.
    pub enum ApplicationType {
        Server,
        Client,
        ClientAndServer,
        DiscoveryServer,
    }
}

/// Who performed a registry change and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryOperation {
    pub authority_id: String,
    pub time: DateTime<Utc>,
}

/// Application description as stored by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "crate::models::lenient::is_absent")]
    pub application_type: Option<ApplicationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_names: Option<HashMap<String, String>>,
    /// DER-encoded application instance certificate.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_helpers::opt_base64_bytes"
    )]
    pub certificate: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_profile_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_server_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    /// Set while the application is unreachable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_seen_since: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<RegistryOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<RegistryOperation>,
}

impl ApplicationInfo {
    /// Returns true when the registry considers the application offline.
    pub fn is_lost(&self) -> bool {
        self.not_seen_since.is_some()
    }

    /// Name for the given locale, falling back to `application_name`.
    pub fn name_for_locale(&self, locale: &str) -> Option<&str> {
        self.localized_names
            .as_ref()
            .and_then(|names| names.get(locale))
            .or(self.application_name.as_ref())
            .map(String::as_str)
    }
}

/// Numbered application record.
///
/// Both fields are required on the wire; a payload missing either fails to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub record_id: i32,
    pub application: ApplicationInfo,
}

impl ApplicationRecord {
    pub fn new(record_id: i32, application: ApplicationInfo) -> Self {
        Self {
            record_id,
            application,
        }
    }
}

/// Page of application records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecordList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<ApplicationRecord>>,
    pub last_counter_reset_time: DateTime<Utc>,
    /// Record id to request for the next page.
    pub next_record_id: i32,
}

impl ApplicationRecordList {
    /// Records on this page, empty when none were returned.
    pub fn records(&self) -> &[ApplicationRecord] {
        self.applications.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> ApplicationInfo {
        ApplicationInfo {
            application_id: Some("app-1".to_string()),
            application_type: Some(ApplicationType::Server),
            application_uri: Some("urn:plant:boiler".to_string()),
            application_name: Some("Boiler".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_application_state_parse_case_insensitive() {
        assert_eq!(ApplicationState::parse("approved"), ApplicationState::Approved);
        assert_eq!(ApplicationState::parse("NEW"), ApplicationState::New);
        assert_eq!(ApplicationState::parse("Rejected"), ApplicationState::Rejected);
    }

    #[test]
    fn test_application_state_parse_unrecognized() {
        assert_eq!(ApplicationState::parse("Bogus"), ApplicationState::Unknown);
        assert_eq!(
            serde_json::from_str::<ApplicationState>("\"Bogus\"").unwrap(),
            ApplicationState::Unknown
        );
    }

    #[test]
    fn test_application_state_wire_names() {
        for state in ApplicationState::KNOWN {
            let json = serde_json::to_string(state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
            assert_eq!(serde_json::from_str::<ApplicationState>(&json).unwrap(), *state);
        }
    }

    #[test]
    fn test_application_type_client_and_server() {
        let json = r#"{"applicationType": "clientandserver"}"#;
        let info: ApplicationInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.application_type, Some(ApplicationType::ClientAndServer));
    }

    #[test]
    fn test_application_record_requires_record_id() {
        let json = r#"{"application": {"applicationId": "app-1"}}"#;
        let err = serde_json::from_str::<ApplicationRecord>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `recordId`"));
    }

    #[test]
    fn test_application_record_requires_application() {
        let err = serde_json::from_str::<ApplicationRecord>(r#"{"recordId": 7}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `application`"));
    }

    #[test]
    fn test_application_record_wire_names() {
        let record = ApplicationRecord::new(42, sample_info());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["recordId"], 42);
        assert_eq!(value["application"]["applicationUri"], "urn:plant:boiler");
        assert_eq!(value["application"]["applicationType"], "Server");
        assert!(value["application"].get("certificate").is_none());
    }

    #[test]
    fn test_name_for_locale_falls_back() {
        let mut info = sample_info();
        info.localized_names = Some(HashMap::from([(
            "de".to_string(),
            "Kessel".to_string(),
        )]));
        assert_eq!(info.name_for_locale("de"), Some("Kessel"));
        assert_eq!(info.name_for_locale("fr"), Some("Boiler"));
        assert!(!info.is_lost());
    }

    #[test]
    fn test_record_list_requires_counter_fields() {
        let err = serde_json::from_str::<ApplicationRecordList>(r#"{"nextRecordId": 3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("lastCounterResetTime"));

        let list: ApplicationRecordList = serde_json::from_str(
            r#"{"lastCounterResetTime": "2024-03-01T00:00:00Z", "nextRecordId": 3}"#,
        )
        .unwrap();
        assert!(list.records().is_empty());
        assert_eq!(list.next_record_id, 3);
    }
}
