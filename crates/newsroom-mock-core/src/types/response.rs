//! Synthesized response type.

use serde::Serialize;
use std::collections::HashMap;

/// Response returned to the interception layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Option<HashMap<String, String>>,
    /// Response body
    pub body: Option<String>,
}

impl MockResponse {
    /// JSON response with a serialized body.
    pub fn json<T: Serialize>(status: u16, body: &T) -> serde_json::Result<Self> {
        Ok(Self {
            status,
            headers: Some(content_type("application/json")),
            body: Some(serde_json::to_string(body)?),
        })
    }

    /// Plain-text response.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Some(content_type("text/plain")),
            body: Some(body.into()),
        }
    }

    /// 404 with an empty body and no headers.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            headers: None,
            body: None,
        }
    }
}

fn content_type(value: &str) -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_owned(), value.to_owned())])
}
