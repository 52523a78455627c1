//! Intercepted request type.

use crate::matching;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method of an intercepted request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// An HTTP request handed over by the interception layer.
///
/// The handler looks at the host, the path, the query string, and the JSON
/// payload. The method is carried but never inspected, mirroring the
/// simulated service.
#[derive(Debug, Clone, PartialEq)]
pub struct MockRequest {
    /// Target host
    pub host: String,
    /// Request target: path plus optional query string
    pub url: String,
    /// HTTP method, if the interception layer knows it
    pub method: Option<HttpMethod>,
    /// Decoded JSON body
    pub payload: Option<Value>,
}

impl MockRequest {
    pub fn new(host: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            url: url.into(),
            method: None,
            payload: None,
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Path component of the request target.
    pub fn path(&self) -> &str {
        matching::path_of(&self.url)
    }

    /// Query string without the leading `?`; empty when absent.
    pub fn query(&self) -> &str {
        matching::query_of(&self.url).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("/newsroom/api/v1/subscribe", "/newsroom/api/v1/subscribe", "")]
    #[case(
        "/newsroom/api/v1/unsubscribe?user_email=a@b.c&sv_id=5",
        "/newsroom/api/v1/unsubscribe",
        "user_email=a@b.c&sv_id=5"
    )]
    #[case("/?", "/", "")]
    #[case("/path?a=1?b=2", "/path", "a=1?b=2")]
    fn test_path_and_query(#[case] url: &str, #[case] path: &str, #[case] query: &str) {
        let request = MockRequest::new("ec.europa.eu", url);
        assert_eq!(request.path(), path);
        assert_eq!(request.query(), query);
    }

    #[rstest]
    fn test_builders() {
        let request = MockRequest::new("ec.europa.eu", "/newsroom/api/v1/subscribe")
            .with_method(HttpMethod::Post)
            .with_payload(json!({"subscription": {}}));
        assert_eq!(request.method, Some(HttpMethod::Post));
        assert_eq!(request.payload, Some(json!({"subscription": {}})));
    }

    #[rstest]
    #[case(HttpMethod::Get, "\"GET\"")]
    #[case(HttpMethod::Post, "\"POST\"")]
    #[case(HttpMethod::Delete, "\"DELETE\"")]
    fn test_http_method_wire_form(#[case] method: HttpMethod, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&method).unwrap(), expected);
        let back: HttpMethod = serde_json::from_str(expected).unwrap();
        assert_eq!(back, method);
    }
}
