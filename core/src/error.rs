//! Error types for the feed API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the post
//! does not exist" from "the server returned an unexpected status." All other
//! non-2xx responses land in `HttpError` with the raw status code and body,
//! so the server's error text reaches whoever shows the failure.

use thiserror::Error;

/// Errors returned by `PostClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// No response was received (connection refused, DNS, broken pipe).
    #[error("transport failed: {0}")]
    TransportError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// True for every failed HTTP interaction: a non-success status or no
    /// response at all.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound | ApiError::HttpError { .. } | ApiError::TransportError(_)
        )
    }

    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised by a `KeyValueStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contents are not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}
