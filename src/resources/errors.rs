//! Error types for resource-client operations.
//!
//! [`ResourceError`] is the error surface of every resource operation.
//! Argument and precondition failures are raised synchronously, before any
//! network call is made; transport failures pass through unchanged from
//! the adapter, with no status-code interpretation and no retries at this
//! layer.

use thiserror::Error;

use crate::clients::TransportError;
use crate::filters::{FilterError, FilterKind};
use crate::models::ValidationError;

/// Error type for resource-client operations.
///
/// # Example
///
/// ```rust
/// use shipstation_api::filters::FilterKind;
/// use shipstation_api::resources::ResourceError;
///
/// let error = ResourceError::FilterTypeMismatch {
///     expected: FilterKind::Order,
///     actual: FilterKind::Product,
/// };
/// assert!(error.to_string().contains("expected order filter"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A filter of the wrong resource family was supplied.
    ///
    /// Raised before any network call when, for example, a product filter
    /// is passed to an order list operation.
    #[error("expected {expected} filter, got {actual} filter")]
    FilterTypeMismatch {
        /// The filter family the operation requires.
        expected: FilterKind,
        /// The filter family that was supplied.
        actual: FilterKind,
    },

    /// A mutation target is missing a nested field the operation needs.
    ///
    /// Mutations never treat a missing block as a silent no-op; the
    /// caller must supply a representation that carries the field.
    #[error("cannot {operation}: required field {field:?} is absent")]
    MissingPrecondition {
        /// The operation being attempted.
        operation: &'static str,
        /// The absent field, in wire casing.
        field: &'static str,
    },

    /// An empty customs-items list was supplied.
    ///
    /// A customs declaration replaces the existing list wholesale, so an
    /// empty replacement is rejected rather than silently clearing it.
    #[error("customs declaration requires at least one customs item")]
    EmptyCustomsDeclaration,

    /// No product matched the given SKU.
    #[error("no product found with sku {sku:?}")]
    ProductNotFound {
        /// The SKU that was looked up.
        sku: String,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response shape: expected {expected}")]
    UnexpectedResponse {
        /// What the client expected to find.
        expected: &'static str,
    },

    /// A filter mutator rejected its argument.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// A domain model failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport adapter failed; passed through unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
