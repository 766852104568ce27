//! URL encoding for job ids used as path segments.
//!
//! Job ids are opaque strings taken from a `Location` header or the command
//! line. They are percent-encoded so a malformed id cannot escape its path
//! segment.
//!
//! ```
//! use sumo_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("job/../1"), "job%2F..%2F1");
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
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_job_id_unchanged() {
        assert_eq!(encode_path_segment("7A1B2C3D4E5F6A7B"), "7A1B2C3D4E5F6A7B");
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(encode_path_segment("a b"), "a%20b");
        assert_eq!(encode_path_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(encode_path_segment("100%"), "100%25");
    }
}
