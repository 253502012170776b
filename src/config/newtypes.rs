//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential strings that
//! validate their contents on construction.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ConfigError;

/// A validated ShipStation API credential.
///
/// The credential is the base64-encoded `key:secret` pair sent in the
/// `Authorization: Basic` header. Construct it from a pre-encoded value
/// with [`ApiKey::new`], or from the raw key/secret pair with
/// [`ApiKey::from_key_secret`].
///
/// # Security
///
/// The `Debug` implementation masks the credential, displaying only
/// `ApiKey(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use shipstation_api::ApiKey;
///
/// let key = ApiKey::from_key_secret("my-key", "my-secret").unwrap();
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates an API key from a pre-encoded Basic credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the credential is empty.
    pub fn new(credential: impl Into<String>) -> Result<Self, ConfigError> {
        let credential = credential.into();
        if credential.is_empty() {
            return Err(ConfigError::EmptyCredential);
        }
        Ok(Self(credential))
    }

    /// Creates an API key by base64-encoding a `key:secret` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyKeyOrSecret`] if either part is empty.
    pub fn from_key_secret(key: &str, secret: &str) -> Result<Self, ConfigError> {
        if key.is_empty() || secret.is_empty() {
            return Err(ConfigError::EmptyKeyOrSecret);
        }
        Ok(Self(STANDARD.encode(format!("{key}:{secret}"))))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_accepts_pre_encoded_credential() {
        let key = ApiKey::new("YWJjOmRlZg==").unwrap();
        assert_eq!(key.as_ref(), "YWJjOmRlZg==");
    }

    #[test]
    fn test_api_key_rejects_empty_credential() {
        assert_eq!(ApiKey::new(""), Err(ConfigError::EmptyCredential));
    }

    #[test]
    fn test_from_key_secret_encodes_pair() {
        // base64("key:secret")
        let key = ApiKey::from_key_secret("key", "secret").unwrap();
        assert_eq!(key.as_ref(), "a2V5OnNlY3JldA==");
    }

    #[test]
    fn test_from_key_secret_rejects_empty_parts() {
        assert_eq!(
            ApiKey::from_key_secret("", "secret"),
            Err(ConfigError::EmptyKeyOrSecret)
        );
        assert_eq!(
            ApiKey::from_key_secret("key", ""),
            Err(ConfigError::EmptyKeyOrSecret)
        );
    }

    #[test]
    fn test_debug_output_masks_credential() {
        let key = ApiKey::new("super-secret-credential").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("super-secret"));
    }
}
