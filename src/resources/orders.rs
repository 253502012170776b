//! Order resource client.
//!
//! In addition to the read operations, this client implements the
//! read-modify-write mutation protocol: the service exposes a single
//! create-or-update endpoint that replaces the entire order, so every
//! mutation fetches (or accepts) the full current representation, checks
//! that the nested field it targets is present, applies exactly one
//! change, and resends the whole order.
//!
//! No concurrency token is sent; the service is last-write-wins, and the
//! window between fetch and write is a known, unmitigated race: two
//! callers mutating the same order concurrently will clobber each other's
//! unrelated-field changes.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clients::HttpClient;
use crate::filters::{FilterKind, OrderFilter, QueryFilter};
use crate::models::{CustomsItem, Order};
use crate::resources::errors::ResourceError;
use crate::resources::take_array;

/// Client for the `/orders` endpoints.
///
/// Obtained from [`ShipStationClient::orders`](crate::ShipStationClient::orders).
#[derive(Debug, Clone)]
pub struct Orders {
    http: Arc<HttpClient>,
}

impl Orders {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches a single order by its identifier.
    ///
    /// Sends `GET /orders/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the response fails the
    /// structural checks, and [`ResourceError::Transport`] for network
    /// failures and non-2xx responses.
    pub async fn get_by_id(&self, order_id: u64) -> Result<Order, ResourceError> {
        let response = self.http.get(&format!("/orders/{order_id}"), None).await?;
        Order::from_value(response.body).map_err(Into::into)
    }

    /// Lists orders without any predicate.
    ///
    /// Sends `GET /orders`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn list(&self) -> Result<Vec<Order>, ResourceError> {
        self.fetch_orders(None).await
    }

    /// Lists orders matching the accumulated predicates of `filter`.
    ///
    /// Sends `GET /orders` with the filter's parameter set as query
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FilterTypeMismatch`], before any network
    /// call, if `filter` is not an order filter.
    pub async fn list_with_filter(
        &self,
        filter: &dyn QueryFilter,
    ) -> Result<Vec<Order>, ResourceError> {
        if filter.kind() != FilterKind::Order {
            return Err(ResourceError::FilterTypeMismatch {
                expected: FilterKind::Order,
                actual: filter.kind(),
            });
        }
        self.fetch_orders(Some(filter)).await
    }

    /// Fetches the orders matching a caller-assigned order number.
    ///
    /// Sugar over [`list_with_filter`](Self::list_with_filter) with only
    /// the order-number predicate set. Order numbers are not guaranteed
    /// unique over time, so this can return more than one order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn get_by_number(&self, order_number: &str) -> Result<Vec<Order>, ResourceError> {
        let mut filter = OrderFilter::new();
        filter.add_order_number(order_number);
        self.list_with_filter(&filter).await
    }

    /// Applies an existing tag to an order.
    ///
    /// Sends `POST /orders/addtag` with `{orderId, tagId}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn tag(&self, order_id: u64, tag_id: i64) -> Result<(), ResourceError> {
        let body = serde_json::json!({ "orderId": order_id, "tagId": tag_id });
        self.http.post("/orders/addtag", body).await?;
        Ok(())
    }

    /// Places an order on hold until the given date.
    ///
    /// Sends `POST /orders/holduntil` with `{orderId, holdUntilDate}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] for network failures and
    /// non-2xx responses.
    pub async fn hold(&self, order_id: u64, date: NaiveDate) -> Result<(), ResourceError> {
        let body = serde_json::json!({
            "orderId": order_id,
            "holdUntilDate": date.to_string(),
        });
        self.http.post("/orders/holduntil", body).await?;
        Ok(())
    }

    /// Prepends a note to an order's internal notes.
    ///
    /// Operates on a caller-supplied representation; use
    /// [`add_note_by_id`](Self::add_note_by_id) to fetch internally. The
    /// existing note is preserved: the new value is the space-joined
    /// `" {note} {existing}"`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingPrecondition`], before any network
    /// call, if the order has no `internalNotes` field.
    pub async fn add_note(&self, note: &str, order: &Order) -> Result<Order, ResourceError> {
        let existing = order
            .internal_notes
            .as_deref()
            .ok_or(ResourceError::MissingPrecondition {
                operation: "add note",
                field: "internalNotes",
            })?;

        let mut updated = order.clone();
        updated.internal_notes = Some(format!(" {note} {existing}"));
        self.save(&updated).await
    }

    /// Fetches an order and prepends a note to its internal notes.
    ///
    /// # Errors
    ///
    /// As [`add_note`](Self::add_note), plus any failure of the fetch.
    pub async fn add_note_by_id(&self, order_id: u64, note: &str) -> Result<Order, ResourceError> {
        let order = self.get_by_id(order_id).await?;
        self.add_note(note, &order).await
    }

    /// Sets the Saturday-delivery flag on an order.
    ///
    /// Operates on a caller-supplied representation; use
    /// [`activate_saturday_delivery_by_id`](Self::activate_saturday_delivery_by_id)
    /// to fetch internally. This is a boolean overwrite of
    /// `advancedOptions.saturdayDelivery`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingPrecondition`], before any network
    /// call, if the order has no `advancedOptions` block.
    pub async fn activate_saturday_delivery(
        &self,
        order: &Order,
        activate: bool,
    ) -> Result<Order, ResourceError> {
        let mut updated = order.clone();
        let advanced =
            updated
                .advanced_options
                .as_mut()
                .ok_or(ResourceError::MissingPrecondition {
                    operation: "activate Saturday delivery",
                    field: "advancedOptions",
                })?;
        advanced.saturday_delivery = Some(activate);
        self.save(&updated).await
    }

    /// Fetches an order and sets its Saturday-delivery flag.
    ///
    /// # Errors
    ///
    /// As [`activate_saturday_delivery`](Self::activate_saturday_delivery),
    /// plus any failure of the fetch.
    pub async fn activate_saturday_delivery_by_id(
        &self,
        order_id: u64,
        activate: bool,
    ) -> Result<Order, ResourceError> {
        let order = self.get_by_id(order_id).await?;
        self.activate_saturday_delivery(&order, activate).await
    }

    /// Replaces an order's customs declaration wholesale.
    ///
    /// The supplied items replace `internationalOptions.customsItems`
    /// entirely; this is never an append or merge. Operates on a
    /// caller-supplied representation; use
    /// [`update_customs_declaration_by_id`](Self::update_customs_declaration_by_id)
    /// to fetch internally.
    ///
    /// # Errors
    ///
    /// Raised before any network call:
    /// - [`ResourceError::EmptyCustomsDeclaration`] if `items` is empty;
    /// - [`ResourceError::MissingPrecondition`] if the order has no
    ///   `advancedOptions` or no `internationalOptions` block.
    pub async fn update_customs_declaration(
        &self,
        order: &Order,
        items: &[CustomsItem],
    ) -> Result<Order, ResourceError> {
        if items.is_empty() {
            return Err(ResourceError::EmptyCustomsDeclaration);
        }
        if order.advanced_options.is_none() {
            return Err(ResourceError::MissingPrecondition {
                operation: "update customs declaration",
                field: "advancedOptions",
            });
        }

        let mut updated = order.clone();
        let international =
            updated
                .international_options
                .as_mut()
                .ok_or(ResourceError::MissingPrecondition {
                    operation: "update customs declaration",
                    field: "internationalOptions",
                })?;
        international.customs_items = items.to_vec();
        self.save(&updated).await
    }

    /// Fetches an order and replaces its customs declaration.
    ///
    /// # Errors
    ///
    /// As [`update_customs_declaration`](Self::update_customs_declaration),
    /// plus any failure of the fetch.
    pub async fn update_customs_declaration_by_id(
        &self,
        order_id: u64,
        items: &[CustomsItem],
    ) -> Result<Order, ResourceError> {
        let order = self.get_by_id(order_id).await?;
        self.update_customs_declaration(&order, items).await
    }

    /// Sends the full order to the create-or-update endpoint.
    async fn save(&self, order: &Order) -> Result<Order, ResourceError> {
        let body = serde_json::to_value(order)
            .map_err(|e| crate::models::ValidationError::single("$", e.to_string()))?;
        let response = self.http.post("/orders/createorder", body).await?;
        Order::from_value(response.body).map_err(Into::into)
    }

    /// Issues the list request and decodes the `orders` envelope.
    async fn fetch_orders(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Vec<Order>, ResourceError> {
        let query = filter.map(|f| f.filters().clone());
        let response = self.http.get("/orders", query).await?;

        take_array(response.body, "orders", "an object with an \"orders\" array")?
            .into_iter()
            .map(|value| Order::from_value(value).map_err(Into::into))
            .collect()
    }
}
