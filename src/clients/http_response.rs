//! HTTP response types for the transport adapter.

use std::collections::HashMap;

/// A parsed HTTP response from the ShipStation API.
///
/// The body is held as a [`serde_json::Value`]; resource clients decode it
/// into domain types.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
