//! SDK configuration.
//!
//! This module provides [`ShipStationConfig`], the instance-based
//! configuration consumed by [`ShipStationClient`](crate::ShipStationClient),
//! along with the validated [`ApiKey`] credential newtype.

mod newtypes;

pub use newtypes::ApiKey;

use crate::error::ConfigError;

/// The production API host.
pub const DEFAULT_BASE_URL: &str = "https://ssapi.shipstation.com";

/// Configuration for a ShipStation API client.
///
/// Holds the validated Basic credential and the base URL requests are
/// issued against. Configuration is instance-based and passed explicitly;
/// there is no global state.
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ApiKey, ShipStationConfig};
///
/// let key = ApiKey::from_key_secret("my-key", "my-secret").unwrap();
/// let config = ShipStationConfig::new(key);
/// assert_eq!(config.base_url(), "https://ssapi.shipstation.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipStationConfig {
    api_key: ApiKey,
    base_url: String,
}

impl ShipStationConfig {
    /// Creates a configuration pointing at the production API host.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a configuration with a custom base URL.
    ///
    /// Useful for pointing the client at a staging host or a local mock
    /// server in tests. A trailing slash is stripped so resource paths can
    /// always be joined with a leading `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty or does
    /// not use an http(s) scheme.
    pub fn with_base_url(
        api_key: ApiKey,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { url: base_url });
        }
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { api_key, base_url })
    }

    /// Returns the API credential.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
