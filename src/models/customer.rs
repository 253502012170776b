//! The customer resource.

use serde::{Deserialize, Serialize};

/// A marketplace account linked to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceUsername {
    /// The identifier of the link record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_user_id: Option<u64>,

    /// The customer the link belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    /// The marketplace identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<u64>,

    /// The marketplace display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,

    /// The customer's username on that marketplace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A tag applied to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTag {
    /// The tag identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,

    /// The tag display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A customer in ShipStation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// The unique identifier of the customer. Read-only.
    #[serde(skip_serializing)]
    pub customer_id: Option<u64>,

    /// When the customer record was created. Read-only.
    #[serde(skip_serializing)]
    pub create_date: Option<String>,

    /// When the customer record was last modified. Read-only.
    #[serde(skip_serializing)]
    pub modify_date: Option<String>,

    /// The customer's full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The customer's company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The first line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,

    /// The second line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,

    /// The city or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The state or province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The customer's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The service's address-verification verdict. Read-only.
    #[serde(skip_serializing)]
    pub address_verified: Option<String>,

    /// Marketplace accounts linked to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_usernames: Option<Vec<MarketplaceUsername>>,

    /// Tags applied to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<CustomerTag>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserialization() {
        let json = r#"{
            "customerId": 12345678,
            "createDate": "2023-10-09T10:11:12.0000000",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "countryCode": "US",
            "marketplaceUsernames": [
                {"customerUserId": 1, "marketplace": "Shopify", "username": "jane"}
            ],
            "tags": [{"tagId": 1234, "name": "VIP"}]
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();

        assert_eq!(customer.customer_id, Some(12_345_678));
        assert_eq!(customer.email.as_deref(), Some("jane@example.com"));
        assert_eq!(
            customer.marketplace_usernames.as_ref().unwrap()[0]
                .marketplace
                .as_deref(),
            Some("Shopify")
        );
        assert_eq!(customer.tags.as_ref().unwrap()[0].tag_id, Some(1234));
    }

    #[test]
    fn test_customer_id_is_not_serialized() {
        let customer = Customer {
            customer_id: Some(12_345_678),
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert!(json.get("customerId").is_none());
        assert_eq!(json["name"], "Jane Doe");
    }
}
