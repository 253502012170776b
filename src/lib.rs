//! # ShipStation API Rust SDK
//!
//! A Rust SDK for the ShipStation API, providing resource-oriented
//! clients, composable query filters, and a validated domain model for
//! orders and their nested structures.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShipStationConfig`] and the validated
//!   [`ApiKey`] credential
//! - Resource clients for orders, customers, products, tags, and
//!   shipments via [`ShipStationClient`]
//! - Composable query filters ([`OrderFilter`], [`ProductFilter`]) that
//!   accumulate optional predicates into the exact parameter set the list
//!   endpoints expect
//! - A validated [`Order`] domain model whose structural failures are
//!   reported all at once
//! - Read-modify-write mutation helpers for notes, Saturday delivery,
//!   customs declarations, and product tags
//!
//! ## Quick Start
//!
//! ```rust
//! use shipstation_api::{ApiKey, ShipStationClient, ShipStationConfig};
//!
//! let key = ApiKey::from_key_secret("your-api-key", "your-api-secret").unwrap();
//! let client = ShipStationClient::new(ShipStationConfig::new(key));
//! ```
//!
//! ## Listing Orders with Filters
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use shipstation_api::filters::{DateField, OrderFilter};
//!
//! let mut filter = OrderFilter::new();
//! filter.add_order_status_filter("awaiting_shipment")?;
//! filter.add_date_filter(
//!     NaiveDate::from_ymd_opt(2024, 1, 1),
//!     NaiveDate::from_ymd_opt(2024, 1, 31),
//!     DateField::Create,
//! );
//!
//! let orders = client.orders().list_with_filter(&filter).await?;
//! ```
//!
//! Filters are caller-owned and single-use: build a fresh one per list
//! call, and do not share one across concurrent callers.
//!
//! ## Mutating Orders
//!
//! The service exposes one create-or-update endpoint that replaces the
//! entire order, so every mutation is a read-modify-write round trip:
//!
//! ```rust,ignore
//! // Fetch-and-mutate in one call...
//! let updated = client.orders().add_note_by_id(123_456_789, "URGENT").await?;
//!
//! // ...or mutate a representation fetched earlier.
//! let order = client.orders().get_by_id(123_456_789).await?;
//! let updated = client.orders().activate_saturday_delivery(&order, true).await?;
//! ```
//!
//! Because no concurrency token exists, the write resends the order as it
//! was known at fetch time: concurrent mutations to the same order are
//! last-write-wins.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed
//!   explicitly
//! - **Fail-fast validation**: argument and precondition failures are
//!   raised before any network call
//! - **Thread-safe**: clients are `Send + Sync` and mutate no instance
//!   state per call
//! - **Opaque transport failures**: non-2xx responses and network errors
//!   pass through unchanged; this layer never retries or interprets
//!   status codes

pub mod clients;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ShipStationConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, InvalidRequestError,
    TransportError,
};

pub use filters::{
    DateField, FilterError, FilterKind, OrderFilter, OrderStatus, ProductFilter, QueryFilter,
};

pub use models::{
    AdvancedOptions, Address, Customer, CustomsItem, Dimensions, FieldViolation, InsuranceOptions,
    InternationalOptions, ItemOption, Order, OrderItem, Product, ProductTag, Shipment, Tag,
    ValidationError, Weight,
};

pub use resources::{
    CustomerListParams, Customers, Orders, Products, ResourceError, ShipStationClient, Shipments,
    Tags,
};
