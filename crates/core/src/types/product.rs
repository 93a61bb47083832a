//! Product records as the remote catalog delivers them.
//!
//! These types mirror the catalog wire schema directly. Fields the demo does
//! not use (e.g. the long-form description) are ignored on deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::money::Price;

/// Aggregate review rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value on a 0-5 scale.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Total number of reviews.
    pub count: i64,
}

/// A product in the catalog.
///
/// Immutable once fetched; owned exclusively by the catalog store. Cart
/// lines snapshot the fields they need rather than referencing back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-unique product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Category facet (exact-match filter key).
    pub category: String,
    /// Product image URL.
    pub image: String,
    /// Aggregate review rating.
    pub rating: Rating,
}
