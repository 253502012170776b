//! Product list filter.

use std::collections::BTreeMap;

use crate::filters::{sealed, FilterKind, QueryFilter};

/// Accumulator of optional predicates for `GET /products`.
///
/// Structurally a sibling of [`OrderFilter`](crate::filters::OrderFilter),
/// but the two are not interchangeable: order list operations reject a
/// `ProductFilter` before issuing any request.
///
/// # Example
///
/// ```rust
/// use shipstation_api::filters::{ProductFilter, QueryFilter};
///
/// let mut filter = ProductFilter::new();
/// filter.add_sku_filter("MUG-11OZ");
/// assert_eq!(filter.filters().get("sku").unwrap(), "MUG-11OZ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    params: BTreeMap<String, String>,
}

impl ProductFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a SKU predicate. No-op on the empty string.
    pub fn add_sku_filter(&mut self, sku: &str) {
        if !sku.is_empty() {
            self.params.insert("sku".to_string(), sku.to_string());
        }
    }
}

impl sealed::Sealed for ProductFilter {}

impl QueryFilter for ProductFilter {
    fn kind(&self) -> FilterKind {
        FilterKind::Product
    }

    fn filters(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_filter_writes_parameter() {
        let mut filter = ProductFilter::new();
        filter.add_sku_filter("MUG-11OZ");

        assert_eq!(filter.filters().get("sku").unwrap(), "MUG-11OZ");
    }

    #[test]
    fn test_sku_filter_skips_empty_value() {
        let mut filter = ProductFilter::new();
        filter.add_sku_filter("");
        assert!(filter.filters().is_empty());
    }

    #[test]
    fn test_filter_kind_is_product() {
        let filter = ProductFilter::new();
        assert_eq!(filter.kind(), FilterKind::Product);
    }
}
