//! Resource clients for the ShipStation API.
//!
//! [`ShipStationClient`] is the entry point: it builds one shared
//! transport adapter from the configuration and exposes a sub-client per
//! resource family. All operations take `&self` and mutate no instance
//! state, so a client can be shared freely across tasks; the stateful
//! objects are the filters, which are caller-owned and single-use.

mod customers;
mod errors;
mod orders;
mod products;
mod shipments;
mod tags;

pub use customers::{CustomerListParams, Customers};
pub use errors::ResourceError;
pub use orders::Orders;
pub use products::Products;
pub use shipments::Shipments;
pub use tags::Tags;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::HttpClient;
use crate::config::ShipStationConfig;
use crate::models::ValidationError;

/// The top-level ShipStation API client.
///
/// Composes the resource sub-clients over one shared transport adapter
/// carrying the fixed base URL and header set.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::{ApiKey, ShipStationClient, ShipStationConfig};
///
/// let key = ApiKey::from_key_secret("my-key", "my-secret")?;
/// let client = ShipStationClient::new(ShipStationConfig::new(key));
///
/// let orders = client.orders().list().await?;
/// for order in orders {
///     println!("{:?}", order.order_number);
/// }
/// ```
#[derive(Debug)]
pub struct ShipStationClient {
    orders: Orders,
    customers: Customers,
    products: Products,
    tags: Tags,
    shipments: Shipments,
}

// Verify ShipStationClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStationClient>();
};

impl ShipStationClient {
    /// Creates a client from the given configuration.
    #[must_use]
    pub fn new(config: ShipStationConfig) -> Self {
        let http = Arc::new(HttpClient::new(&config));
        Self {
            orders: Orders::new(Arc::clone(&http)),
            customers: Customers::new(Arc::clone(&http)),
            products: Products::new(Arc::clone(&http)),
            tags: Tags::new(Arc::clone(&http)),
            shipments: Shipments::new(http),
        }
    }

    /// The order resource client.
    #[must_use]
    pub const fn orders(&self) -> &Orders {
        &self.orders
    }

    /// The customer resource client.
    #[must_use]
    pub const fn customers(&self) -> &Customers {
        &self.customers
    }

    /// The product resource client.
    #[must_use]
    pub const fn products(&self) -> &Products {
        &self.products
    }

    /// The account tag resource client.
    #[must_use]
    pub const fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The shipment resource client.
    #[must_use]
    pub const fn shipments(&self) -> &Shipments {
        &self.shipments
    }
}

/// Pulls the named array out of a list-response envelope.
pub(crate) fn take_array(
    body: serde_json::Value,
    key: &str,
    expected: &'static str,
) -> Result<Vec<serde_json::Value>, ResourceError> {
    let serde_json::Value::Object(mut map) = body else {
        return Err(ResourceError::UnexpectedResponse { expected });
    };
    match map.remove(key) {
        Some(serde_json::Value::Array(items)) => Ok(items),
        _ => Err(ResourceError::UnexpectedResponse { expected }),
    }
}

/// Decodes the named array of a list-response envelope into model values.
pub(crate) fn decode_list<T: DeserializeOwned>(
    body: serde_json::Value,
    key: &'static str,
    expected: &'static str,
) -> Result<Vec<T>, ResourceError> {
    take_array(body, key, expected)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| {
                ValidationError::single(format!("{key}[{index}]"), e.to_string()).into()
            })
        })
        .collect()
}

/// Decodes a single-resource response body into a model value.
pub(crate) fn decode_single<T: DeserializeOwned>(
    body: serde_json::Value,
    context: &'static str,
) -> Result<T, ResourceError> {
    serde_json::from_value(body)
        .map_err(|e| ValidationError::single(context, e.to_string()).into())
}
