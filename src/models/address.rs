//! Postal address value object.

use serde::{Deserialize, Serialize};

/// A billing or shipping address on an order, customer, or shipment.
///
/// All fields are optional to support partial address data.
/// `addressVerified` is assigned by the service and never sent on write.
///
/// # Example
///
/// ```rust
/// use shipstation_api::models::Address;
///
/// let address = Address {
///     name: Some("Jane Doe".to_string()),
///     street1: Some("123 Main St".to_string()),
///     city: Some("Austin".to_string()),
///     state: Some("TX".to_string()),
///     postal_code: Some("78701".to_string()),
///     country: Some("US".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// The full name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The company name at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The first line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,

    /// The second line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,

    /// The third line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,

    /// The city or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The state or province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The phone number at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Whether the address is residential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,

    /// The service's address-verification verdict. Read-only.
    #[serde(skip_serializing)]
    pub address_verified: Option<String>,
}
