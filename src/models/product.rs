//! The product resource.

use serde::{Deserialize, Serialize};

/// A tag applied to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductTag {
    /// The tag identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,

    /// The tag display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProductTag {
    /// Creates a tag reference from its id.
    #[must_use]
    pub const fn from_id(tag_id: i64) -> Self {
        Self {
            tag_id: Some(tag_id),
            name: None,
        }
    }
}

/// A product in ShipStation.
///
/// Products are updated through the same read-modify-write protocol as
/// orders: the full record is fetched, one field is changed, and the whole
/// record is sent back via `PUT /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The unique identifier of the product. Read-only.
    #[serde(skip_serializing)]
    pub product_id: Option<u64>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The display name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// The default cost of goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cost: Option<f64>,

    /// The package length in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// The package width in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// The package height in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// The weight in ounces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_oz: Option<f64>,

    /// Private notes about the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,

    /// The SKU used by the fulfillment provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_sku: Option<String>,

    /// When the product record was created. Read-only.
    #[serde(skip_serializing)]
    pub create_date: Option<String>,

    /// When the product record was last modified. Read-only.
    #[serde(skip_serializing)]
    pub modify_date: Option<String>,

    /// Whether the product is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// The product category record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<serde_json::Value>,

    /// The product type record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<serde_json::Value>,

    /// Where the product is stored in the warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,

    /// The default carrier for this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_carrier_code: Option<String>,

    /// The default carrier service for this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service_code: Option<String>,

    /// The default package type for this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_package_code: Option<String>,

    /// The customs description of the goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_description: Option<String>,

    /// The declared customs value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_value: Option<f64>,

    /// The harmonized tariff code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_tariff_no: Option<String>,

    /// The customs country of origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_country_code: Option<String>,

    /// Whether to skip customs declarations for this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_customs: Option<bool>,

    /// Tags applied to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ProductTag>>,
}
