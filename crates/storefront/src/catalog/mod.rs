//! Catalog store: owns the fetched product collection and its facets.
//!
//! Loads are asynchronous and may be superseded: every load attempt takes a
//! generation token, and a completion carrying a stale token is discarded so
//! a response that arrives after a newer request started can never clobber
//! the newer result.

mod client;

pub use client::{CatalogClient, CatalogError};

use papershop_core::{Product, ProductId};

/// Sentinel category meaning "no category filter".
///
/// Always the first entry of the published facet list.
pub const CATEGORY_ALL: &str = "all";

/// Token identifying one load attempt.
///
/// Obtained from [`CatalogStore::begin_load`] and handed back to
/// [`CatalogStore::complete_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Holds the fetched products and the derived category facet list.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<String>,
    generation: u64,
    last_error: Option<CatalogError>,
}

impl CatalogStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            generation: 0,
            last_error: None,
        }
    }

    /// Start a new load attempt, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Complete a load attempt.
    ///
    /// Returns `false` (and changes nothing) if `token` does not belong to
    /// the newest load attempt. On success the product collection and the
    /// facet list are replaced wholesale; on failure the previous products
    /// are kept and the error is retained for the UI to surface.
    pub fn complete_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<Product>, CatalogError>,
    ) -> bool {
        if token.0 != self.generation {
            tracing::debug!(
                stale = token.0,
                current = self.generation,
                "discarding superseded catalog load"
            );
            return false;
        }

        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.products = products;
                self.categories = derive_categories(&self.products);
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed");
                self.last_error = Some(err);
            }
        }

        true
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Distinct categories in first-seen order, prefixed with
    /// [`CATEGORY_ALL`].
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The error from the most recent load attempt, if it failed.
    #[must_use]
    pub const fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    /// Whether no products have been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Distinct product categories in first-seen order, with the `"all"`
/// sentinel prepended.
fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![CATEGORY_ALL.to_string()];
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
