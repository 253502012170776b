//! Shipment resource client.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::models::Shipment;
use crate::resources::errors::ResourceError;
use crate::resources::decode_list;

/// Client for the `/shipments` endpoints.
///
/// Obtained from
/// [`ShipStationClient::shipments`](crate::ShipStationClient::shipments).
#[derive(Debug, Clone)]
pub struct Shipments {
    http: Arc<HttpClient>,
}

impl Shipments {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists shipments.
    ///
    /// Sends `GET /shipments`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn list(&self) -> Result<Vec<Shipment>, ResourceError> {
        let response = self.http.get("/shipments", None).await?;
        decode_list(
            response.body,
            "shipments",
            "an object with a \"shipments\" array",
        )
    }
}
