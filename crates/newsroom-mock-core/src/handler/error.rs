//! Error type for the mock handler.

use thiserror::Error;

/// Unrecoverable handler failures.
///
/// These surface test-harness bugs: malformed bodies, calls arriving out
/// of order, or state blobs another writer corrupted. Modeled API outcomes
/// (unknown paths, unknown unsubscribe targets) are plain responses, not
/// errors.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Request carried no JSON body where one is required
    #[error("request body is missing")]
    MissingBody,
    /// Body or state failed to encode/decode as expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Required query parameter absent
    #[error("missing query parameter: {name}")]
    MissingParameter { name: String },
    /// Unsubscribe for an app no subscribe call has registered
    #[error("no universe registered for app: {app}")]
    UnknownApplication { app: String },
    /// Store blob under `key` no longer matches the expected shape
    #[error("undecodable state blob {key}: {source}")]
    State {
        key: String,
        source: serde_json::Error,
    },
}
