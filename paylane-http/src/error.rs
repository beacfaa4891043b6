//! Error type returned by the PayLane HTTP clients.

use paylane::StatusError;

/// Errors that can occur while calling the PayLane API.
///
/// Every variant carries the operation name as `context`, so a failure can be
/// traced back to the call that produced it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API answered with a status other than `200 OK`.
    #[error("{context}: {source}")]
    Status {
        /// Operation that was called.
        context: &'static str,
        /// Classified HTTP status.
        source: StatusError,
        /// Raw response body, kept for diagnostics.
        body: String,
    },
    /// The base URL could not be parsed, or the operation path could not be
    /// joined onto it.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// HTTP transport error (DNS, TLS, connection refused, timeout).
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The request parameters could not be encoded as JSON.
    #[error("Failed to serialize parameters: {context}: {source}")]
    JsonSerialization {
        /// Human-readable context.
        context: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A `200 OK` body that is not a JSON object.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Human-readable context.
        context: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The response body could not be read.
    #[error("Failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Returns the classified status if the API rejected the call.
    #[must_use]
    pub const fn status_error(&self) -> Option<&StatusError> {
        match self {
            Self::Status { source, .. } => Some(source),
            _ => None,
        }
    }
}
