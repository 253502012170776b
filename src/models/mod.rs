//! Typed, validated domain models for ShipStation resources.
//!
//! The [`Order`] aggregate and its nested value objects are the heart of
//! the model: orders built with [`Order::from_value`] are structurally
//! validated (all failures reported together) and normalized, so
//! downstream code never observes a missing `internationalOptions` block.
//!
//! Model instances are caller-owned; the SDK never caches or retains them
//! across calls. Fields assigned by the service carry
//! `#[serde(skip_serializing)]` and are never sent back on write.

mod address;
mod customer;
mod measures;
mod options;
mod order;
mod product;
mod shipment;
mod tag;
mod validate;

pub use address::Address;
pub use customer::{Customer, CustomerTag, MarketplaceUsername};
pub use measures::{Dimensions, Weight};
pub use options::{AdvancedOptions, CustomsItem, InsuranceOptions, InternationalOptions};
pub use order::{ItemOption, Order, OrderItem};
pub use product::{Product, ProductTag};
pub use shipment::Shipment;
pub use tag::Tag;
pub use validate::{FieldViolation, ValidationError};
