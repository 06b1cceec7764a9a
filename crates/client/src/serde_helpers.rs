//! Serde helpers for binary fields carried as base64 strings.
//!
//! Responsibilities:
//! - Encode `format: byte` fields as standard (padded) base64 strings.
//! - Decode them back, rejecting invalid base64 as a data error.
//!
//! Explicitly does NOT handle:
//! - Validating what the bytes mean (event identifiers and certificates are opaque).
//!
//! Invariants / assumptions:
//! - Element order of byte sequences is preserved in both directions.
//! - Error messages never echo the offending input.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serializer};

fn decode_bytes<E: serde::de::Error>(encoded: &str) -> Result<Vec<u8>, E> {
    STANDARD
        .decode(encoded)
        .map_err(|e| E::custom(format!("invalid base64 value: {e}")))
}

/// `Vec<Vec<u8>>` as a JSON array of base64 strings.
pub mod base64_bytes_vec {
    use super::*;

    pub fn serialize<S>(values: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&STANDARD.encode(value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter().map(|s| decode_bytes::<D::Error>(s)).collect()
    }
}

/// `Option<Vec<u8>>` as an optional base64 string.
pub mod opt_base64_bytes {
    use super::*;

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => decode_bytes::<D::Error>(&encoded).map(Some),
            None => Ok(None),
        }
    }
}
