use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The parts of an HTTP-proxy invocation event the handlers read.
///
/// Everything else the gateway forwards (path, headers, request context) is
/// ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequest {
    /// Raw request body, if the caller sent one.
    pub body: Option<String>,

    /// Whether `body` is base64-encoded.
    pub is_base64_encoded: bool,
}

/// HTTP-proxy response returned once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    /// A response with the given status, an empty body and no headers.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            body: String::new(),
            headers: BTreeMap::new(),
            is_base64_encoded: false,
        }
    }

    /// `200 OK` with an empty body.
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// `400 Bad Request` with an empty body.
    pub fn bad_request() -> Self {
        Self::new(400)
    }

    /// `500 Internal Server Error` with an empty body.
    pub fn internal_error() -> Self {
        Self::new(500)
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
