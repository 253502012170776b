//! HTTP client for ShipStation API communication.
//!
//! This module provides the [`HttpClient`] type, a thin transport adapter
//! wrapping GET/POST/PUT against the configured base URL with a fixed
//! header set. It performs no retries and does not interpret status codes:
//! non-2xx responses and network failures propagate unchanged as
//! [`TransportError`]s.

use std::collections::{BTreeMap, HashMap};

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShipStationConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ShipStation API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - The fixed header set (`Content-Type`, `Authorization`, `User-Agent`)
/// - JSON body parsing
///
/// Cancellation, timeouts, and connection pooling are delegated to the
/// underlying reqwest client.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async
/// tasks. No instance state is mutated by requests.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL without a trailing slash (e.g. `https://ssapi.shipstation.com`).
    base_url: String,
    /// Fixed headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &ShipStationConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("ShipStation API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", config.api_key().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the fixed headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] on connection failure and
    /// [`TransportError::Status`] on a non-2xx response.
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.send(builder.build()?).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] on connection failure and
    /// [`TransportError::Status`] on a non-2xx response.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.send(HttpRequest::builder(HttpMethod::Post, path).body(body).build()?)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] on connection failure and
    /// [`TransportError::Status`] on a non-2xx response.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.send(HttpRequest::builder(HttpMethod::Put, path).body(body).build()?)
            .await
    }

    /// Sends a verified request and parses the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(method = %request.http_method, %url, "sending request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        if !(200..=299).contains(&code) {
            tracing::warn!(%url, code, "request failed");
            return Err(TransportError::Status {
                code,
                body: body_text,
            });
        }

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null)
        };

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_config() -> ShipStationConfig {
        ShipStationConfig::new(ApiKey::new("dGVzdDp0ZXN0").unwrap())
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.base_url(), "https://ssapi.shipstation.com");
    }

    #[test]
    fn test_authorization_header_uses_basic_scheme() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic dGVzdDp0ZXN0".to_string())
        );
    }

    #[test]
    fn test_content_type_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("ShipStation API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
