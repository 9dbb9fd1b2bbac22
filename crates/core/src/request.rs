use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::proxy::ProxyRequest;

/// The three free-text fields submitted through the contact form.
///
/// None of the fields are validated. A field missing from the body, or sent
/// as `null`, decodes to `None` rather than an empty string.
///
/// # Examples
///
/// ```
/// use notifier_core::ContactRequest;
///
/// let request = ContactRequest::from_json(r#"{"name": "Ada", "message": "Hi"}"#).unwrap();
/// assert_eq!(request.name.as_deref(), Some("Ada"));
/// assert!(request.email_address.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Sender's name.
    pub name: Option<String>,

    /// Sender's reply address, exactly as typed.
    pub email_address: Option<String>,

    /// Message body.
    pub message: Option<String>,
}

/// Reasons an inbound body could not be turned into a [`ContactRequest`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("request body is missing")]
    MissingBody,

    #[error("request body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("request body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("request body is not a contact request: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactRequest {
    /// Decode a contact request from a JSON object.
    ///
    /// Arrays are rejected even when their elements would line up with the
    /// struct fields.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        let object: Map<String, Value> = serde_json::from_str(body)?;
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Decode the body carried by an HTTP-proxy event.
    ///
    /// Base64-encoded bodies are decoded before JSON parsing.
    pub fn from_proxy_request(request: &ProxyRequest) -> Result<Self, DecodeError> {
        let body = request.body.as_deref().ok_or(DecodeError::MissingBody)?;
        if request.is_base64_encoded {
            let raw = STANDARD.decode(body)?;
            let text = String::from_utf8(raw)?;
            Self::from_json(&text)
        } else {
            Self::from_json(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxy(body: Option<&str>, is_base64_encoded: bool) -> ProxyRequest {
        ProxyRequest {
            body: body.map(str::to_owned),
            is_base64_encoded,
        }
    }

    #[test]
    fn decode_full_request() {
        let request = ContactRequest::from_json(
            r#"{"name": "Ada", "emailAddress": "ada@example.com", "message": "Hello"}"#,
        )
        .unwrap();
        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert_eq!(request.email_address.as_deref(), Some("ada@example.com"));
        assert_eq!(request.message.as_deref(), Some("Hello"));
    }

    #[test]
    fn missing_and_null_fields_are_absent() {
        let request = ContactRequest::from_json(r#"{"name": null, "message": ""}"#).unwrap();
        assert!(request.name.is_none());
        assert!(request.email_address.is_none());
        assert_eq!(request.message.as_deref(), Some(""));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request = ContactRequest::from_json(r#"{"name": "Ada", "phone": "555"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [
            "[]",
            r#"["Ada", "ada@example.com", "hi"]"#,
            "[null, null, null]",
            "42",
            "\"text\"",
            "null",
            "true",
            "",
            "{",
        ] {
            let err = ContactRequest::from_json(body).unwrap_err();
            assert!(matches!(err, DecodeError::Json(_)), "body {body:?} decoded");
        }
    }

    #[test]
    fn wrongly_typed_field_is_rejected() {
        let err = ContactRequest::from_json(r#"{"name": 7}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn proxy_request_without_body_is_rejected() {
        let err = ContactRequest::from_proxy_request(&proxy(None, false)).unwrap_err();
        assert!(matches!(err, DecodeError::MissingBody));
    }

    #[test]
    fn proxy_request_plain_body() {
        let request =
            ContactRequest::from_proxy_request(&proxy(Some(r#"{"name": "Ada"}"#), false)).unwrap();
        assert_eq!(request.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn proxy_request_base64_body() {
        let encoded = STANDARD.encode(r#"{"emailAddress": "ada@example.com"}"#);
        let request = ContactRequest::from_proxy_request(&proxy(Some(&encoded), true)).unwrap();
        assert_eq!(request.email_address.as_deref(), Some("ada@example.com"));
        assert!(request.name.is_none());
    }

    #[test]
    fn proxy_request_invalid_base64_is_rejected() {
        let err = ContactRequest::from_proxy_request(&proxy(Some("%%%"), true)).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn proxy_request_base64_non_utf8_is_rejected() {
        let encoded = STANDARD.encode([0xff, 0xfe, 0xfd]);
        let err = ContactRequest::from_proxy_request(&proxy(Some(&encoded), true)).unwrap_err();
        assert!(matches!(err, DecodeError::Utf8(_)));
    }
}
