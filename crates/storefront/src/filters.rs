//! Filter engine: derives the visible product subset from the catalog.
//!
//! The visible set is never mutated independently; it is recomputed from the
//! active criteria whenever the criteria or the catalog change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use papershop_core::Product;

use crate::catalog::{CATEGORY_ALL, CatalogStore};

/// The active filter settings, replaced wholesale on each application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against product titles.
    pub search: String,
    /// Exact category, or [`CATEGORY_ALL`] for no category filter.
    pub category: String,
    /// Inclusive lower price bound.
    pub min_price: Decimal,
    /// Inclusive upper price bound.
    pub max_price: Decimal,
    /// Minimum average rating.
    pub min_rating: Decimal,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CATEGORY_ALL.to_string(),
            min_price: Decimal::ZERO,
            max_price: Decimal::new(1000, 0),
            min_rating: Decimal::ZERO,
        }
    }
}

/// Derives and holds the filtered product view.
#[derive(Debug, Default)]
pub struct FilterEngine {
    criteria: FilterCriteria,
    visible: Vec<Product>,
}

impl FilterEngine {
    /// Create an engine with default criteria and an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active criteria and recompute the visible set.
    ///
    /// A product is visible when all four predicates hold: title contains
    /// `search` (case-insensitive), category matches exactly or the
    /// criteria's category is the `"all"` sentinel, price lies in
    /// `[min_price, max_price]`, and rating is at least `min_rating`.
    /// `min_price > max_price` yields an empty set by construction.
    pub fn apply(&mut self, catalog: &CatalogStore, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh(catalog);
    }

    /// Reset criteria to the defaults and reapply.
    pub fn clear(&mut self, catalog: &CatalogStore) {
        self.apply(catalog, FilterCriteria::default());
    }

    /// Recompute the visible set under the current criteria.
    ///
    /// Called after a catalog reload so the view tracks the new collection.
    pub fn refresh(&mut self, catalog: &CatalogStore) {
        self.visible = catalog
            .products()
            .iter()
            .filter(|product| matches(product, &self.criteria))
            .cloned()
            .collect();
    }

    /// The visible products, in catalog order.
    #[must_use]
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// The active criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// `(visible, total)` product counts for the filter summary display.
    #[must_use]
    pub fn counts(&self, catalog: &CatalogStore) -> (usize, usize) {
        (self.visible.len(), catalog.products().len())
    }
}

/// Conjunction of the four filter predicates.
fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    let matches_search = product
        .title
        .to_lowercase()
        .contains(&criteria.search.to_lowercase());
    let matches_category =
        criteria.category == CATEGORY_ALL || product.category == criteria.category;
    let price = product.price.amount();
    let matches_price = price >= criteria.min_price && price <= criteria.max_price;
    let matches_rating = product.rating.rate >= criteria.min_rating;

    matches_search && matches_category && matches_price && matches_rating
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use papershop_core::{Price, ProductId, Rating};

    fn red_shirt() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Red Shirt".to_string(),
            price: Price::new(Decimal::new(20, 0)).unwrap(),
            category: "clothing".to_string(),
            image: String::new(),
            rating: Rating {
                rate: Decimal::new(45, 1),
                count: 10,
            },
        }
    }

    fn loaded_catalog() -> CatalogStore {
        let mut catalog = CatalogStore::new();
        let token = catalog.begin_load();
        catalog.complete_load(token, Ok(vec![red_shirt()]));
        catalog
    }

    fn criteria(search: &str) -> FilterCriteria {
        FilterCriteria {
            search: search.to_string(),
            category: CATEGORY_ALL.to_string(),
            min_price: Decimal::ZERO,
            max_price: Decimal::new(100, 0),
            min_rating: Decimal::ZERO,
        }
    }

    #[test]
    fn test_search_match_is_case_insensitive() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        engine.apply(&catalog, criteria("red"));
        assert_eq!(engine.visible().len(), 1);

        engine.apply(&catalog, criteria("blue"));
        assert!(engine.visible().is_empty());
    }

    #[test]
    fn test_category_exact_or_all() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        let mut by_category = criteria("");
        by_category.category = "clothing".to_string();
        engine.apply(&catalog, by_category);
        assert_eq!(engine.visible().len(), 1);

        let mut other_category = criteria("");
        other_category.category = "electronics".to_string();
        engine.apply(&catalog, other_category);
        assert!(engine.visible().is_empty());
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        let mut exact = criteria("");
        exact.min_price = Decimal::new(20, 0);
        exact.max_price = Decimal::new(20, 0);
        engine.apply(&catalog, exact);
        assert_eq!(engine.visible().len(), 1);
    }

    #[test]
    fn test_inverted_price_bounds_yield_empty_set() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        let mut inverted = criteria("");
        inverted.min_price = Decimal::new(50, 0);
        inverted.max_price = Decimal::new(10, 0);
        engine.apply(&catalog, inverted);
        assert!(engine.visible().is_empty());
    }

    #[test]
    fn test_min_rating() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        let mut high_bar = criteria("");
        high_bar.min_rating = Decimal::new(49, 1);
        engine.apply(&catalog, high_bar);
        assert!(engine.visible().is_empty());

        let mut met_bar = criteria("");
        met_bar.min_rating = Decimal::new(45, 1);
        engine.apply(&catalog, met_bar);
        assert_eq!(engine.visible().len(), 1);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        engine.apply(&catalog, criteria("red"));
        let first: Vec<_> = engine.visible().to_vec();
        engine.apply(&catalog, criteria("red"));

        assert_eq!(engine.visible(), first.as_slice());
    }

    #[test]
    fn test_clear_restores_full_catalog() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        engine.apply(&catalog, criteria("blue"));
        assert!(engine.visible().is_empty());

        engine.clear(&catalog);
        assert_eq!(engine.visible().len(), catalog.products().len());
        assert_eq!(engine.criteria(), &FilterCriteria::default());
    }

    #[test]
    fn test_counts_pair() {
        let catalog = loaded_catalog();
        let mut engine = FilterEngine::new();

        engine.apply(&catalog, criteria("blue"));
        assert_eq!(engine.counts(&catalog), (0, 1));
    }
}
