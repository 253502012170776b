//! Order list filter.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::filters::{sealed, FilterError, FilterKind, QueryFilter};

/// The workflow status of an order.
///
/// The service accepts exactly these five values for the `orderStatus`
/// query parameter and on the order resource itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Payment has not been received.
    AwaitingPayment,
    /// Paid and waiting to be shipped.
    AwaitingShipment,
    /// The order has shipped.
    Shipped,
    /// The order is on hold.
    OnHold,
    /// The order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingPayment => "awaiting_payment",
            Self::AwaitingShipment => "awaiting_shipment",
            Self::Shipped => "shipped",
            Self::OnHold => "on_hold",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awaiting_payment" => Ok(Self::AwaitingPayment),
            "awaiting_shipment" => Ok(Self::AwaitingShipment),
            "shipped" => Ok(Self::Shipped),
            "on_hold" => Ok(Self::OnHold),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(FilterError::UnknownOrderStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// The date field a date-range filter applies to.
///
/// The variant fixes the exact parameter prefix (`createDateStart`,
/// `modifyDateEnd`, ...) at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Filter on the order's creation date.
    Create,
    /// Filter on the order's last-modified date.
    Modify,
    /// Filter on the order's ship date.
    Ship,
}

impl DateField {
    /// Returns the query-parameter prefix for this field.
    #[must_use]
    pub const fn as_prefix(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Modify => "modify",
            Self::Ship => "ship",
        }
    }
}

/// Accumulator of optional predicates for `GET /orders`.
///
/// Every mutator skips writing its parameter when the value is empty (or
/// zero for numeric ids), so an empty-string or zero predicate can never
/// be expressed. This mirrors the service's own treatment of absent
/// parameters and is a documented limitation of the filter contract.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use shipstation_api::filters::{DateField, OrderFilter, QueryFilter};
///
/// let mut filter = OrderFilter::new();
/// filter.add_order_status_filter("shipped").unwrap();
/// filter.add_date_filter(
///     NaiveDate::from_ymd_opt(2024, 1, 1),
///     NaiveDate::from_ymd_opt(2024, 1, 31),
///     DateField::Ship,
/// );
///
/// assert_eq!(filter.filters().get("orderStatus").unwrap(), "shipped");
/// assert_eq!(filter.filters().get("shipDateStart").unwrap(), "2024-01-01");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    params: BTreeMap<String, String>,
}

impl OrderFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a date-range predicate on the given date field.
    ///
    /// Writes `{prefix}DateStart` and/or `{prefix}DateEnd`; an absent bound
    /// leaves that side of the range unset.
    pub fn add_date_filter(
        &mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        date_type: DateField,
    ) {
        let prefix = date_type.as_prefix();
        if let Some(start) = start_date {
            self.params
                .insert(format!("{prefix}DateStart"), start.to_string());
        }
        if let Some(end) = end_date {
            self.params
                .insert(format!("{prefix}DateEnd"), end.to_string());
        }
    }

    /// Adds an order-status predicate.
    ///
    /// The status is validated before anything is written: a failed call
    /// never mutates the filter.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownOrderStatus`] if `order_status` is not
    /// one of the five statuses the service accepts.
    pub fn add_order_status_filter(&mut self, order_status: &str) -> Result<(), FilterError> {
        let status = OrderStatus::from_str(order_status)?;
        self.params
            .insert("orderStatus".to_string(), status.as_str().to_string());
        Ok(())
    }

    /// Adds an order-number predicate. No-op on the empty string.
    pub fn add_order_number(&mut self, order_number: &str) {
        if !order_number.is_empty() {
            self.params
                .insert("orderNumber".to_string(), order_number.to_string());
        }
    }

    /// Adds a tag-id predicate. No-op on zero.
    pub fn add_tag_filter(&mut self, tag_id: u64) {
        if tag_id != 0 {
            self.params.insert("tagId".to_string(), tag_id.to_string());
        }
    }

    /// Adds a customer-name predicate. No-op on the empty string.
    pub fn add_customer_name_filter(&mut self, customer_name: &str) {
        if !customer_name.is_empty() {
            self.params
                .insert("customerName".to_string(), customer_name.to_string());
        }
    }

    /// Adds an item-keyword predicate. No-op on the empty string.
    pub fn add_item_keyword_filter(&mut self, item_keyword: &str) {
        if !item_keyword.is_empty() {
            self.params
                .insert("itemKeyword".to_string(), item_keyword.to_string());
        }
    }
}

impl sealed::Sealed for OrderFilter {}

impl QueryFilter for OrderFilter {
    fn kind(&self) -> FilterKind {
        FilterKind::Order
    }

    fn filters(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}
