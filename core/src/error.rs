//! Error types for the todo API.
//!
//! # Design
//! `StatusError` belongs to the status codec and is shared by server and
//! client. `ApiError` covers the client's parse step: a non-2xx reply that
//! carries the service's `{"error": ..}` body becomes `Server`, anything else
//! non-2xx lands in `HttpError` with the raw body.

use thiserror::Error;

/// A string that is not one of the three canonical status names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("invalid status value: {0}")]
    Invalid(String),
}

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the route does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request with an `{"error": ..}` body.
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The server returned an unexpected non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
