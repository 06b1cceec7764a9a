//! Error types for decoding and encoding historian payloads.

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while moving payloads between JSON and the typed models.
///
/// Unrecognized enumeration strings are not represented here: every wire enum
/// in this crate resolves them to an `Unknown` variant instead of failing.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Input is not syntactically valid JSON, or ends early.
    #[error("Malformed JSON for {schema}: {message}")]
    Malformed { schema: String, message: String },

    /// Valid JSON that does not satisfy the model contract
    /// (missing required field, wrong type, bad base64 or timestamp).
    #[error("Schema violation in {schema}: {message}")]
    Schema { schema: String, message: String },

    /// A model could not be serialized.
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The requested schema name is not part of the catalog.
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),
}

impl ModelError {
    /// Classify a `serde_json` decode failure for the named schema.
    pub(crate) fn from_decode(schema: &str, err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let message = err.to_string();
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed {
                schema: schema.to_string(),
                message,
            },
            Category::Data => Self::Schema {
                schema: schema.to_string(),
                message,
            },
        }
    }

    /// Check if this error means the payload broke the model contract.
    ///
    /// Malformed input counts as well, since it cannot satisfy any schema.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::Schema { .. } | Self::Malformed { .. })
    }
}
