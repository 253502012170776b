//! Weight and dimensions value objects.

use serde::{Deserialize, Serialize};

/// The weight of an order, item, or shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weight {
    /// The weight value in the given units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// The units of the value: `pounds`, `ounces`, or `grams`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// Numeric unit code assigned by the service. Read-only.
    #[serde(rename = "WeightUnits", skip_serializing)]
    pub weight_units: Option<i32>,
}

/// The dimensions of a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// The package length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// The package width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// The package height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// The units of all three sides: `inches` or `centimeters`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}
