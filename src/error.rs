//! Configuration error types.

use thiserror::Error;

/// Errors raised while constructing SDK configuration values.
///
/// All configuration newtypes validate on construction, so a
/// [`ShipStationConfig`](crate::ShipStationConfig) that builds successfully
/// is always usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API credential was empty.
    #[error("API credential must not be empty")]
    EmptyCredential,

    /// The API key or secret passed to `ApiKey::from_key_secret` was empty.
    #[error("API key and secret must both be non-empty")]
    EmptyKeyOrSecret,

    /// The base URL was empty or not an http(s) URL.
    #[error("invalid base URL: {url:?}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
    },
}
