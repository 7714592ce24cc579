//! URL encoding utilities for constructing safe API paths.
//!
//! Connection ids are interpolated into paths; without encoding, a `/` or `?`
//! in an id would change which resource is addressed.
//!
//! # Example
//!
//! ```
//! use mailzero_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("conn/1"), "conn%2F1");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#');

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
