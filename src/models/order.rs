//! The order resource and its line items.

use serde::{Deserialize, Serialize};

use crate::models::address::Address;
use crate::models::measures::{Dimensions, Weight};
use crate::models::options::{AdvancedOptions, InsuranceOptions, InternationalOptions};
use crate::models::validate::{check_required, kind_of, JsonKind, ValidationError};

/// A name/value option on an order item (e.g. `Size: Large`). Unordered.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemOption {
    /// The option name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A line item on an order.
///
/// `orderItemId`, `createDate`, and `modifyDate` are assigned by the
/// service and never sent on write.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The identifier of the line item. Read-only.
    #[serde(skip_serializing)]
    pub order_item_id: Option<u64>,

    /// The caller-assigned key identifying the line across updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_key: Option<String>,

    /// The stock keeping unit of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The display name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL of the product image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// The weight of a single unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// How many units were ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    /// The price of a single unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Tax charged for this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,

    /// Shipping charged for this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<f64>,

    /// Where the product is stored in the warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,

    /// Options selected for this line (name/value pairs, unordered).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ItemOption>>,

    /// The identifier of the product record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The SKU used by the fulfillment provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_sku: Option<String>,

    /// Whether the line is an adjustment (discount, coupon) rather than goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<bool>,

    /// The universal product code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// When the line was created. Read-only.
    #[serde(skip_serializing)]
    pub create_date: Option<String>,

    /// When the line was last modified. Read-only.
    #[serde(skip_serializing)]
    pub modify_date: Option<String>,
}

/// An order in ShipStation.
///
/// The root entity of the domain model, aggregating the billing and
/// shipping [`Address`], the [`OrderItem`] list, and the nested option
/// blocks. Identity is the server-assigned `orderId`; `orderNumber` is a
/// caller-assigned secondary identity that is not guaranteed unique over
/// time.
///
/// # Construction
///
/// Orders coming from the service should be built with
/// [`Order::from_value`], which validates the required fields in one pass
/// and normalizes `internationalOptions` so consumers never observe it
/// absent.
///
/// # Read-Only Fields
///
/// `orderId`, `createDate`, `modifyDate`, `customerId`, `orderTotal`,
/// `userId`, `externallyFulfilled`, and `externallyFulfilledBy` are
/// assigned by the service and never sent in create/update requests. The
/// create-or-update endpoint matches an existing order by `orderKey`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the order. Read-only.
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    /// When the order record was created. Read-only.
    #[serde(skip_serializing)]
    pub create_date: Option<String>,

    /// When the order record was last modified. Read-only.
    #[serde(skip_serializing)]
    pub modify_date: Option<String>,

    /// The customer record the order belongs to. Read-only.
    #[serde(skip_serializing)]
    pub customer_id: Option<u64>,

    /// Sum of line totals, shipping, and tax. Read-only.
    #[serde(skip_serializing)]
    pub order_total: Option<f64>,

    /// The user who owns the order. Read-only.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,

    /// Whether fulfillment is handled outside ShipStation. Read-only.
    #[serde(skip_serializing)]
    pub externally_fulfilled: Option<bool>,

    /// Who fulfills the order externally. Read-only.
    #[serde(skip_serializing)]
    pub externally_fulfilled_by: Option<String>,

    // --- Core fields ---
    /// The caller-assigned order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// The caller-assigned key the update endpoint matches on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,

    /// When the order was placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,

    /// When payment was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,

    /// The deadline for shipping the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_by_date: Option<String>,

    /// The workflow status of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,

    /// The customer's username on the originating marketplace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_username: Option<String>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// The billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<Address>,

    /// The shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<Address>,

    /// The line items in the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,

    /// The amount the customer paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,

    /// The tax charged on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,

    /// The shipping charged on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<f64>,

    /// Notes left by the customer at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,

    /// Private notes visible only to the seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,

    /// Whether the order is a gift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift: Option<bool>,

    /// The gift message, when the order is a gift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,

    /// How the customer paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// The shipping service the customer asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_shipping_service: Option<String>,

    /// The carrier selected for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,

    /// The carrier service selected for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,

    /// The package type selected for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,

    /// The delivery-confirmation level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    /// When the order shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<String>,

    /// Hold the order until this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_until_date: Option<String>,

    /// The total weight of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// The package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Shipment insurance options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_options: Option<InsuranceOptions>,

    /// Customs information. Normalized to an empty structure by
    /// [`Order::from_value`] when the service omits it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_options: Option<InternationalOptions>,

    /// Carrier- and workflow-level options. Required by mutations that
    /// target Saturday delivery or the custom fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<AdvancedOptions>,

    /// Ids of the tags applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

/// Required fields checked by [`Order::from_value`].
const REQUIRED_ORDER_FIELDS: &[(&str, JsonKind)] = &[
    ("orderId", JsonKind::Number),
    ("orderNumber", JsonKind::String),
    ("orderDate", JsonKind::String),
    ("orderStatus", JsonKind::String),
    ("billTo", JsonKind::Object),
    ("shipTo", JsonKind::Object),
    ("items", JsonKind::Array),
];

/// Required fields checked per line item.
const REQUIRED_ITEM_FIELDS: &[(&str, JsonKind)] = &[("quantity", JsonKind::Number)];

impl Order {
    /// Builds a validated order from raw service JSON.
    ///
    /// The value must be a single JSON object: a list of orders passed
    /// where one order is expected is rejected up front. Required fields
    /// are checked for presence and JSON type in a single pass, and every
    /// failure is reported together. After decoding,
    /// `internationalOptions` is normalized to an empty customs-items
    /// structure when the service omitted it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] enumerating all failing fields.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        let Some(object) = value.as_object() else {
            return Err(ValidationError::single(
                "$",
                format!("expected a JSON object, got {}", kind_of(&value)),
            ));
        };

        let mut violations = Vec::new();
        check_required(object, REQUIRED_ORDER_FIELDS, "", &mut violations);

        if let Some(serde_json::Value::Array(items)) = object.get("items") {
            for (index, item) in items.iter().enumerate() {
                let path = format!("items[{index}]");
                match item.as_object() {
                    Some(item_object) => {
                        check_required(item_object, REQUIRED_ITEM_FIELDS, &path, &mut violations);
                    }
                    None => violations.push(crate::models::validate::FieldViolation {
                        field: path,
                        message: format!("expected object, got {}", kind_of(item)),
                    }),
                }
            }
        }

        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        let mut order: Self = serde_json::from_value(value)
            .map_err(|e| ValidationError::single("$", e.to_string()))?;

        if order.international_options.is_none() {
            order.international_options = Some(InternationalOptions::default());
        }

        Ok(order)
    }
}
