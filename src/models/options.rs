//! Option blocks nested on the order resource.

use serde::{Deserialize, Serialize};

/// Carrier- and workflow-level options on an order.
///
/// This block must be present on an order before any mutation that targets
/// `saturday_delivery` or the custom fields; the order mutation operations
/// treat its absence as a precondition violation.
///
/// `mergedOrSplit` and `mergedIds` are assigned by the service and never
/// sent on write.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
    /// The warehouse the order ships from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<u64>,

    /// Whether the package is non-machinable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_machinable: Option<bool>,

    /// Whether Saturday delivery is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday_delivery: Option<bool>,

    /// Whether the package contains alcohol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_alcohol: Option<bool>,

    /// The store the order belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<u64>,

    /// First free-form custom field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field1: Option<String>,

    /// Second free-form custom field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field2: Option<String>,

    /// Third free-form custom field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field3: Option<String>,

    /// The order source (e.g. a marketplace name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Whether the order was merged or split. Read-only.
    #[serde(skip_serializing)]
    pub merged_or_split: Option<bool>,

    /// Ids of the orders merged into this one. Read-only.
    #[serde(skip_serializing)]
    pub merged_ids: Option<Vec<u64>>,

    /// The parent order when this order was split.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Which party is billed for postage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_party: Option<String>,

    /// The billed party's carrier account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_account: Option<String>,

    /// The billed party's postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_postal_code: Option<String>,

    /// The billed party's country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_country_code: Option<String>,

    /// Alternate billing account selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_my_other_account: Option<String>,
}

/// Shipment insurance options on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceOptions {
    /// The insurance provider (e.g. `shipsurance`, `carrier`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Whether the shipment should be insured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insure_shipment: Option<bool>,

    /// The declared value to insure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insured_value: Option<f64>,
}

/// A line on a customs declaration.
///
/// Carries the service's defaults for quantity, tariff code, and country of
/// origin, so a declaration line only needs a description and a value:
///
/// ```rust
/// use shipstation_api::models::CustomsItem;
///
/// let item = CustomsItem::new("Ceramic mug", 12.50);
/// assert_eq!(item.quantity, 1);
/// assert_eq!(item.harmonized_tariff_code, "821500");
/// assert_eq!(item.country_of_origin, "US");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomsItem {
    /// The identifier of the declaration line. Read-only.
    #[serde(skip_serializing)]
    pub customs_item_id: Option<u64>,

    /// A description of the goods.
    pub description: String,

    /// How many units the line covers.
    pub quantity: u32,

    /// The declared value per unit.
    pub value: f64,

    /// The harmonized tariff code of the goods.
    pub harmonized_tariff_code: String,

    /// The two-letter country of origin.
    pub country_of_origin: String,
}

impl CustomsItem {
    /// Creates a declaration line with the service defaults.
    #[must_use]
    pub fn new(description: impl Into<String>, value: f64) -> Self {
        Self {
            description: description.into(),
            value,
            ..Self::default()
        }
    }
}

impl Default for CustomsItem {
    fn default() -> Self {
        Self {
            customs_item_id: None,
            description: String::new(),
            quantity: 1,
            value: 0.0,
            harmonized_tariff_code: "821500".to_string(),
            country_of_origin: "US".to_string(),
        }
    }
}

/// Customs information for international orders.
///
/// Never absent on a validated order: when the service omits the block it
/// is normalized to an empty customs-items structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternationalOptions {
    /// The contents category (e.g. `merchandise`, `gift`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,

    /// The customs declaration lines.
    #[serde(default)]
    pub customs_items: Vec<CustomsItem>,

    /// What the carrier should do when delivery fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_delivery: Option<String>,
}
