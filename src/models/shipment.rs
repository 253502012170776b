//! The shipment resource.

use serde::{Deserialize, Serialize};

use crate::models::address::Address;
use crate::models::measures::{Dimensions, Weight};
use crate::models::options::InsuranceOptions;

/// A shipment created for an order.
///
/// Shipments are read-only from the SDK's point of view; they are created
/// by label purchases inside ShipStation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// The unique identifier of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<u64>,

    /// The order the shipment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// The key of the order the shipment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,

    /// The number of the order the shipment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// When the shipment record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,

    /// When the shipment shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<String>,

    /// The postage cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_cost: Option<f64>,

    /// The insurance cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_cost: Option<f64>,

    /// The carrier tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// Whether this is a return label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return_label: Option<bool>,

    /// The batch the label was created in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,

    /// The carrier used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,

    /// The carrier service used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,

    /// The package type used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,

    /// The delivery-confirmation level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    /// The warehouse the shipment left from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<u64>,

    /// Whether the label was voided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voided: Option<bool>,

    /// When the label was voided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_date: Option<String>,

    /// The destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<Address>,

    /// The shipment weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// The package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// The insurance options used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_options: Option<InsuranceOptions>,
}
