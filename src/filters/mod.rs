//! Query-filter builders for list endpoints.
//!
//! Filters are mutable accumulators of optional predicates. Each `add_*`
//! method writes its query parameter only when the supplied value is
//! non-empty; calling nothing leaves the predicate unset. The accumulated
//! state is exposed through [`QueryFilter::filters`] as an immutable view,
//! usable verbatim as query parameters.
//!
//! Two filter families exist, [`OrderFilter`] and [`ProductFilter`]. They
//! are structurally similar but not interchangeable: each resource client
//! checks the filter's [`FilterKind`] and rejects the wrong family before
//! issuing any request.
//!
//! Filters are caller-owned and intended for a single list call; reusing
//! one across calls accumulates state unless a fresh instance is built.

mod order;
mod product;

pub use order::{DateField, OrderFilter, OrderStatus};
pub use product::ProductFilter;

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// The resource family a filter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Filter for order list endpoints.
    Order,
    /// Filter for product list endpoints.
    Product,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::Product => write!(f, "product"),
        }
    }
}

/// Errors raised by filter mutators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The order status is not one of the values the service accepts.
    #[error(
        "unknown order status {status:?}; expected one of: awaiting_payment, \
         awaiting_shipment, shipped, on_hold, cancelled"
    )]
    UnknownOrderStatus {
        /// The rejected status value.
        status: String,
    },
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A filter that can be handed to a resource client's list operation.
///
/// This trait is sealed: the only implementors are [`OrderFilter`] and
/// [`ProductFilter`]. Resource clients use [`QueryFilter::kind`] to verify
/// at runtime that the filter belongs to their resource family.
pub trait QueryFilter: sealed::Sealed + fmt::Debug {
    /// Returns the resource family this filter targets.
    fn kind(&self) -> FilterKind;

    /// Returns the accumulated parameter set as an immutable view.
    fn filters(&self) -> &BTreeMap<String, String>;
}
