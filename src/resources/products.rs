//! Product resource client.
//!
//! Products share the read-modify-write protocol with orders: the full
//! record is fetched, one field is changed, and the whole record goes back
//! via `PUT /products/{id}`. No concurrency token is sent, so the last write
//! wins.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::filters::{FilterKind, ProductFilter, QueryFilter};
use crate::models::{Product, ProductTag};
use crate::resources::errors::ResourceError;
use crate::resources::decode_list;

/// Client for the `/products` endpoints.
///
/// Obtained from
/// [`ShipStationClient::products`](crate::ShipStationClient::products).
#[derive(Debug, Clone)]
pub struct Products {
    http: Arc<HttpClient>,
}

impl Products {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists products without any predicate.
    ///
    /// Sends `GET /products`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn list(&self) -> Result<Vec<Product>, ResourceError> {
        self.fetch_products(None).await
    }

    /// Lists products matching the accumulated predicates of `filter`.
    ///
    /// Sends `GET /products` with the filter's parameter set as query
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FilterTypeMismatch`], before any network
    /// call, if `filter` is not a product filter.
    pub async fn list_with_filter(
        &self,
        filter: &dyn QueryFilter,
    ) -> Result<Vec<Product>, ResourceError> {
        if filter.kind() != FilterKind::Product {
            return Err(ResourceError::FilterTypeMismatch {
                expected: FilterKind::Product,
                actual: filter.kind(),
            });
        }
        self.fetch_products(Some(filter)).await
    }

    /// Fetches the product with the given SKU.
    ///
    /// Sugar over [`list_with_filter`](Self::list_with_filter) with only
    /// the SKU predicate set; returns the first match.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ProductNotFound`] when no product matches.
    pub async fn get_by_sku(&self, sku: &str) -> Result<Product, ResourceError> {
        let mut filter = ProductFilter::new();
        filter.add_sku_filter(sku);

        let products = self.list_with_filter(&filter).await?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| ResourceError::ProductNotFound {
                sku: sku.to_string(),
            })
    }

    /// Replaces the tags of the product with the given SKU.
    ///
    /// Fetches the product, swaps its tag list for the supplied ids, and
    /// resends the full record via `PUT /products/{id}`. The service
    /// answers with a confirmation message rather than the updated record,
    /// so nothing is returned on success.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ProductNotFound`] when no product matches
    /// the SKU, and [`ResourceError::MissingPrecondition`], before the
    /// update request, when the fetched record carries no `productId` to
    /// address the update to.
    pub async fn update_tags(&self, sku: &str, tag_ids: &[i64]) -> Result<(), ResourceError> {
        let mut product = self.get_by_sku(sku).await?;

        let product_id = product
            .product_id
            .ok_or(ResourceError::MissingPrecondition {
                operation: "update tags",
                field: "productId",
            })?;

        product.tags = Some(tag_ids.iter().copied().map(ProductTag::from_id).collect());

        let body = serde_json::to_value(&product)
            .map_err(|e| crate::models::ValidationError::single("$", e.to_string()))?;
        self.http.put(&format!("/products/{product_id}"), body).await?;
        Ok(())
    }

    /// Issues the list request and decodes the `products` envelope.
    async fn fetch_products(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Vec<Product>, ResourceError> {
        let query = filter.map(|f| f.filters().clone());
        let response = self.http.get("/products", query).await?;
        decode_list(
            response.body,
            "products",
            "an object with a \"products\" array",
        )
    }
}
