//! Percent-encoding for endpoint identifiers placed in API paths.
//!
//! Endpoint ids are opaque strings chosen by the registry. They are
//! interpolated into a single path segment (`{endpointId}`), so every
//! character that could end the segment, start a query or fragment, or be
//! mistaken for an escape must be encoded.
//!
//! ```
//! use historian_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("opc.tcp://plc:4840/"), "opc.tcp:%2F%2Fplc:4840%2F");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters encoded inside an `{endpointId}` segment.
///
/// RFC 3986 section 3.3 path-segment delimiters plus the characters that
/// have meaning in URI templates or are rejected by common proxies.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `segment` for use as exactly one path segment.
///
/// The dot segments `.` and `..` are encoded as `%2E` so URL normalization
/// cannot remove them or climb out of the segment.
pub fn encode_path_segment(segment: &str) -> String {
    match segment {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string(),
    }
}
