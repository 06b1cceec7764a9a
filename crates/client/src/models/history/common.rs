//! Envelope types shared by every history request and response.

use serde::{Deserialize, Serialize};

use crate::models::lenient::lenient_enum;

lenient_enum! {
    /// Kind of credential used to elevate a request.
    pub enum CredentialType {
        None,
        UserName,
        X509Certificate,
        JwtToken,
    }
}

lenient_enum! {
    /// Amount of diagnostics the server should return.
    pub enum DiagnosticsLevel {
        None,
        Status,
        Operations,
        Diagnostics,
        Verbose,
    }
}

/// Credential with an opaque, type-specific value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "type", default, skip_serializing_if = "crate::models::lenient::is_absent")]
    pub credential_type: Option<CredentialType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    #[serde(default, skip_serializing_if = "crate::models::lenient::is_absent")]
    pub level: Option<DiagnosticsLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// Optional per-request header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<Credential>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

/// Outcome of a single operation as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<serde_json::Value>,
}

impl ServiceResult {
    /// A missing or zero status code means success.
    pub fn is_good(&self) -> bool {
        self.status_code.unwrap_or(0) == 0
    }
}

/// History read request for a node, with typed details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReadRequest<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Path from `node_id` to the node actually read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_path: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<RequestHeader>,
}

impl<T> HistoryReadRequest<T> {
    pub fn new(node_id: impl Into<String>, details: T) -> Self {
        Self {
            node_id: Some(node_id.into()),
            browse_path: None,
            details: Some(details),
            index_range: None,
            header: None,
        }
    }
}

/// Continue (or abort) a read that returned a continuation token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReadNextRequest {
    pub continuation_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abort: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<RequestHeader>,
}

impl HistoryReadNextRequest {
    pub fn next(continuation_token: impl Into<String>) -> Self {
        Self {
            continuation_token: continuation_token.into(),
            abort: None,
            header: None,
        }
    }

    /// Release the server-side continuation point without reading more.
    pub fn abort(continuation_token: impl Into<String>) -> Self {
        Self {
            abort: Some(true),
            ..Self::next(continuation_token)
        }
    }
}

/// History read result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReadResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_info: Option<ServiceResult>,
}

impl<T> HistoryReadResponse<T> {
    /// True when the server holds more results behind a continuation token.
    pub fn has_more(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}

/// Result of a read-next call; same shape as the first page.
pub type HistoryReadNextResponse<T> = HistoryReadResponse<T>;

/// History update request for a node. `details` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryUpdateRequest<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_path: Option<Vec<String>>,
    pub details: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<RequestHeader>,
}

impl<T> HistoryUpdateRequest<T> {
    pub fn new(node_id: impl Into<String>, details: T) -> Self {
        Self {
            node_id: Some(node_id.into()),
            browse_path: None,
            details,
            header: None,
        }
    }
}

/// Per-item results of a history update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryUpdateResponse {
    /// One entry per submitted item, in submission order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ServiceResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_info: Option<ServiceResult>,
}

impl HistoryUpdateResponse {
    /// Failed results paired with the index of the submitted item.
    pub fn failed_results(&self) -> impl Iterator<Item = (usize, &ServiceResult)> {
        self.results
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, result)| !result.is_good())
    }

    /// True when neither the call nor any item failed.
    pub fn is_good(&self) -> bool {
        self.error_info.as_ref().is_none_or(ServiceResult::is_good)
            && self.failed_results().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_requires_details() {
        let err = serde_json::from_str::<HistoryUpdateRequest<serde_json::Value>>(
            r#"{"nodeId": "ns=2;s=Boiler"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `details`"));
    }

    #[test]
    fn test_read_next_requires_token() {
        let err = serde_json::from_str::<HistoryReadNextRequest>(r#"{"abort": true}"#).unwrap_err();
        assert!(err.to_string().contains("continuationToken"));
    }

    #[test]
    fn test_read_next_abort_wire_form() {
        let value = serde_json::to_value(HistoryReadNextRequest::abort("cp-1")).unwrap();
        assert_eq!(value, serde_json::json!({"continuationToken": "cp-1", "abort": true}));
    }

    #[test]
    fn test_credential_type_key() {
        let json = r#"{"type": "jwttoken", "value": {"token": "x"}}"#;
        let credential: Credential = serde_json::from_str(json).unwrap();
        assert_eq!(credential.credential_type, Some(CredentialType::JwtToken));
        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(value["type"], "JwtToken");
    }

    #[test]
    fn test_header_diagnostics_level_lenient() {
        let json = r#"{"diagnostics": {"level": "chatty", "auditId": "a1"}}"#;
        let header: RequestHeader = serde_json::from_str(json).unwrap();
        let diagnostics = header.diagnostics.unwrap();
        assert_eq!(diagnostics.level, Some(DiagnosticsLevel::Unknown));
        assert_eq!(diagnostics.audit_id.as_deref(), Some("a1"));
    }

    #[test]
    fn test_read_response_has_more() {
        let page: HistoryReadResponse<Vec<i32>> =
            serde_json::from_str(r#"{"history": [1, 2], "continuationToken": "cp"}"#).unwrap();
        assert!(page.has_more());
        let last: HistoryReadResponse<Vec<i32>> =
            serde_json::from_str(r#"{"history": [3], "continuationToken": ""}"#).unwrap();
        assert!(!last.has_more());
    }

    #[test]
    fn test_failed_results_keep_submission_index() {
        let json = r#"{"results": [{"statusCode": 0}, {"statusCode": -2142568448, "errorMessage": "BadNoEntryExists"}, {}]}"#;
        let response: HistoryUpdateResponse = serde_json::from_str(json).unwrap();
        let failed: Vec<_> = response.failed_results().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].0, 1);
        assert_eq!(failed[0].1.error_message.as_deref(), Some("BadNoEntryExists"));
        assert!(!response.is_good());
        assert!(HistoryUpdateResponse::default().is_good());
    }
}
