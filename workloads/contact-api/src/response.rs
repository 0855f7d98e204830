//! JSON API responses.

use http::StatusCode;
use serde_json::json;

use crate::ContactError;

/// A fully buffered JSON response, independent of the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    fn json(status: StatusCode, value: serde_json::Value) -> Self {
        Self {
            status,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("cache-control".to_string(), "no-store".to_string()),
            ],
            body: value.to_string().into_bytes(),
        }
    }

    /// `200 {"success": true, "message": ...}`
    pub fn success(message: &str) -> Self {
        Self::json(StatusCode::OK, json!({ "success": true, "message": message }))
    }

    /// `{"error": ...}` with the status for this error.
    pub fn from_error(error: &ContactError) -> Self {
        let response = Self::json(error.status(), json!({ "error": error.public_message() }));
        match error {
            ContactError::MethodNotAllowed(_) => response.with_header("allow", "POST"),
            _ => response,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
