//! Account tag resource client.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::models::Tag;
use crate::resources::errors::ResourceError;

/// Client for the account-level tag listing.
///
/// Obtained from [`ShipStationClient::tags`](crate::ShipStationClient::tags).
#[derive(Debug, Clone)]
pub struct Tags {
    http: Arc<HttpClient>,
}

impl Tags {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists the tags defined on the account.
    ///
    /// Sends `GET /accounts/listtags`. The service answers with a bare
    /// JSON array rather than an enveloped object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedResponse`] if the body is not an
    /// array, and [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn list(&self) -> Result<Vec<Tag>, ResourceError> {
        let response = self.http.get("/accounts/listtags", None).await?;

        let serde_json::Value::Array(items) = response.body else {
            return Err(ResourceError::UnexpectedResponse {
                expected: "a JSON array of tags",
            });
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value).map_err(|e| {
                    crate::models::ValidationError::single(format!("tags[{index}]"), e.to_string())
                        .into()
                })
            })
            .collect()
    }
}
