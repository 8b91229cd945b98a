//! Error types for the API client.

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL or a request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The response body did not match the expected JSON shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The HTTP request could not be assembled (e.g. an invalid header value).
    #[error("Failed to build request: {0}")]
    BuildRequest(#[source] reqwest::Error),
    /// The underlying HTTP call failed (network error, timeout, connection refused).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
