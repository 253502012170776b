//! Transport-level error types.
//!
//! This module contains error types for the HTTP transport adapter. The
//! adapter does not interpret status codes or retry: a non-2xx response is
//! passed through as an opaque [`TransportError::Status`] carrying the raw
//! body, and network failures surface as [`TransportError::Network`].

use thiserror::Error;

/// Error returned when a request fails verification before it is sent.
///
/// # Example
///
/// ```rust
/// use shipstation_api::clients::InvalidRequestError;
///
/// let error = InvalidRequestError::MissingBody {
///     method: "post".to_string(),
/// };
/// assert_eq!(error.to_string(), "cannot send a post request without a body");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST or PUT request was built without a body.
    #[error("cannot send a {method} request without a body")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for the HTTP transport adapter.
///
/// Status and network failures are not interpreted by this layer; they
/// propagate unchanged to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The service answered with a non-2xx status code.
    ///
    /// The body is carried verbatim; no mapping of status codes to
    /// semantic errors happens at this layer.
    #[error("request failed with status {code}: {body}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body.
        body: String,
    },

    /// A network or connection error occurred.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request failed verification before being sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}

// Verify TransportError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportError>();
};
