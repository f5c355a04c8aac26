//! Wire protocol.
//!
//! The server pushes JSON text frames of shape `{"page": "<html>"}`.
//! The client never sends frames of its own.

use serde::Deserialize;

/// Inbound server frame carrying a full page snapshot.
///
/// Extra fields are ignored; a missing or non-string `page` is a decode
/// error and the frame is dropped by the caller.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServerMessage {
    /// Full HTML snapshot replacing the current render.
    pub page: String,
}

impl ServerMessage {
    /// Decode a raw text frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is not valid JSON or the `page` field
    /// is missing or not a string.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_valid_frame() {
        let msg = ServerMessage::decode(r#"{"page": "<h1>Title</h1>"}"#).unwrap();
        assert_eq!(msg.page, "<h1>Title</h1>");
    }

    #[test]
    fn test_decode_empty_page() {
        let msg = ServerMessage::decode(r#"{"page": ""}"#).unwrap();
        assert_eq!(msg.page, "");
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let msg = ServerMessage::decode(r#"{"page": "<p>x</p>", "version": 3}"#).unwrap();
        assert_eq!(msg.page, "<p>x</p>");
    }

    #[test]
    fn test_decode_missing_page_field() {
        assert!(ServerMessage::decode(r#"{"body": "<p>x</p>"}"#).is_err());
    }

    #[test]
    fn test_decode_non_string_page() {
        assert!(ServerMessage::decode(r#"{"page": 42}"#).is_err());
    }

    #[test]
    fn test_decode_malformed_json() {
        assert!(ServerMessage::decode("{page: oops").is_err());
    }
}
