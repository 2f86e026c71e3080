//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when making API calls.
///
/// Non-2xx HTTP responses are not errors: the dispatcher decodes every
/// response it receives and leaves status interpretation to the caller via
/// [`Response::status_code`](crate::Response).
#[derive(Error, Debug)]
pub enum Error {
    /// No secret key is configured. Checked before any I/O; the request is
    /// never sent.
    #[error("secret key is not configured")]
    MissingSecretKey,
    /// The request payload could not be serialized to JSON. Checked before
    /// any I/O.
    #[error("failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The base URL and path did not form a valid request URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Network-level failure: DNS, connect, TLS, or timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not valid JSON for the destination's shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
