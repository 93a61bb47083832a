//! Cart ledger: one aggregated line per distinct product, with derived totals.
//!
//! The ledger stores only the line collection. Subtotal, tax, total, and the
//! badge count are pure functions recomputed on demand.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use papershop_core::{Price, Product, ProductId};

/// Errors that can occur during cart operations.
///
/// Removal and quantity changes on an absent line are benign no-ops, not
/// errors.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested product is not in the current catalog.
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    /// An add was requested with a zero quantity.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// One aggregated cart entry for a distinct product.
///
/// Title, price, and image are snapshots taken at add-time; later catalog
/// changes do not reach lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub id: ProductId,
    /// Title snapshot.
    pub title: String,
    /// Unit price snapshot.
    pub price: Price,
    /// Image URL snapshot.
    pub image: String,
    /// Units of this product in the cart; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// The line total (`price x quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// The cart: a mutable line-item collection with merge/removal semantics.
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the same product id if there is
    /// one; otherwise appends a new line snapshotting the product's title,
    /// price, and image.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is 0.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                id: product.id,
                title: product.title.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity,
            });
        }

        Ok(())
    }

    /// Remove the line for `id`. No-op if there is none.
    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|line| line.id != id);
    }

    /// Add `delta` (may be negative) to the quantity of the line for `id`.
    ///
    /// If the resulting quantity is zero or below, the line is removed.
    /// No-op if there is no line for `id`.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return;
        };

        let updated = i64::from(line.quantity) + delta;
        if updated <= 0 {
            self.remove_item(id);
        } else {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price x quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Flat 10% tax on the subtotal.
    #[must_use]
    pub fn tax(&self) -> Decimal {
        self.subtotal() * tax_rate()
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }

    /// Sum of quantities across lines (the cart badge), not the line count.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Flat tax rate applied to every order.
fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}
