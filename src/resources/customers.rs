//! Customer resource client.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::clients::HttpClient;
use crate::models::Customer;
use crate::resources::errors::ResourceError;
use crate::resources::{decode_single, decode_list};

/// Optional parameters for listing customers.
///
/// Unset fields are not sent. Parameter names follow the service's exact
/// casing (`stateCode`, `marketplaceId`, ...).
///
/// # Example
///
/// ```rust
/// use shipstation_api::resources::CustomerListParams;
///
/// let params = CustomerListParams {
///     state_code: Some("TX".to_string()),
///     page_size: Some(100),
///     ..Default::default()
/// };
/// assert_eq!(params.to_query().get("stateCode").unwrap(), "TX");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    /// Only customers in this US state.
    pub state_code: Option<String>,
    /// Only customers in this country.
    pub country_code: Option<String>,
    /// Only customers who bought through this marketplace.
    pub marketplace_id: Option<u64>,
    /// Only customers carrying this tag.
    pub tag_id: Option<i64>,
    /// The field to sort by.
    pub sort_by: Option<String>,
    /// The sort direction (`ASC` or `DESC`).
    pub sort_dir: Option<String>,
    /// The page index to return.
    pub page: Option<u32>,
    /// The number of records per page.
    pub page_size: Option<u32>,
}

impl CustomerListParams {
    /// Builds the query-parameter map, including only the set fields.
    #[must_use]
    pub fn to_query(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(state_code) = &self.state_code {
            params.insert("stateCode".to_string(), state_code.clone());
        }
        if let Some(country_code) = &self.country_code {
            params.insert("countryCode".to_string(), country_code.clone());
        }
        if let Some(marketplace_id) = self.marketplace_id {
            params.insert("marketplaceId".to_string(), marketplace_id.to_string());
        }
        if let Some(tag_id) = self.tag_id {
            params.insert("tagId".to_string(), tag_id.to_string());
        }
        if let Some(sort_by) = &self.sort_by {
            params.insert("sortBy".to_string(), sort_by.clone());
        }
        if let Some(sort_dir) = &self.sort_dir {
            params.insert("sortDir".to_string(), sort_dir.clone());
        }
        if let Some(page) = self.page {
            params.insert("page".to_string(), page.to_string());
        }
        if let Some(page_size) = self.page_size {
            params.insert("pageSize".to_string(), page_size.to_string());
        }
        params
    }
}

/// Client for the `/customers` endpoints.
///
/// Obtained from
/// [`ShipStationClient::customers`](crate::ShipStationClient::customers).
#[derive(Debug, Clone)]
pub struct Customers {
    http: Arc<HttpClient>,
}

impl Customers {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches a single customer by its identifier.
    ///
    /// Sends `GET /customers/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the response cannot be
    /// decoded, and [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn get_by_id(&self, customer_id: u64) -> Result<Customer, ResourceError> {
        let response = self
            .http
            .get(&format!("/customers/{customer_id}"), None)
            .await?;
        decode_single(response.body, "customer")
    }

    /// Lists customers, optionally constrained by `params`.
    ///
    /// Sends `GET /customers`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn list(
        &self,
        params: Option<CustomerListParams>,
    ) -> Result<Vec<Customer>, ResourceError> {
        let query = params.map(|p| p.to_query()).filter(|q| !q.is_empty());
        let response = self.http.get("/customers", query).await?;
        decode_list(
            response.body,
            "customers",
            "an object with a \"customers\" array",
        )
    }
}
