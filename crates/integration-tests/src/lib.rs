//! Integration test fixtures for Papershop.
//!
//! Tests drive the real [`StoreApp`] dispatcher over a pre-loaded catalog;
//! only the catalog-loading tests talk to a (local stub) server.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use papershop_core::{Price, Product, ProductId, Rating};
use papershop_storefront::app::StoreApp;
use papershop_storefront::catalog::CatalogClient;
use papershop_storefront::checkout::{CheckoutGateway, PaymentError, PaymentFields};
use papershop_storefront::config::StorefrontConfig;
use papershop_storefront::state::StoreState;

/// Build a product record for fixtures.
#[must_use]
pub fn product(id: i64, title: &str, price: &str, category: &str, rate: &str, count: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Price::new(price.parse::<Decimal>().unwrap()).unwrap(),
        category: category.to_string(),
        image: format!("https://example.com/{id}.jpg"),
        rating: Rating {
            rate: rate.parse().unwrap(),
            count,
        },
    }
}

/// The standard three-product demo catalog.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    vec![
        product(1, "Red Shirt", "20", "clothing", "4.5", 10),
        product(2, "Blue Jeans", "40", "clothing", "4.0", 5),
        product(3, "Steel Toaster", "35.50", "kitchen", "3.8", 42),
    ]
}

/// A state with the demo catalog already loaded and the filter view derived.
#[must_use]
pub fn loaded_state() -> StoreState {
    let mut state = StoreState::new();
    let token = state.catalog.begin_load();
    state.catalog.complete_load(token, Ok(demo_catalog()));
    state.filters.refresh(&state.catalog);
    state
}

/// An app over [`loaded_state`] with the fake checkout gateway.
///
/// The catalog client points at the default (remote) endpoint but is never
/// exercised unless a test dispatches `LoadCatalog`.
#[must_use]
pub fn test_app() -> StoreApp {
    test_app_with_gateway(Box::new(
        papershop_storefront::checkout::FakeGateway::new(),
    ))
}

/// An app over [`loaded_state`] with a caller-supplied gateway.
#[must_use]
pub fn test_app_with_gateway(gateway: Box<dyn CheckoutGateway + Send>) -> StoreApp {
    let config = StorefrontConfig::default();
    let client = CatalogClient::new(&config).unwrap();
    StoreApp::with_parts(loaded_state(), client, gateway)
}

/// Checkout form values that pass every syntactic check.
#[must_use]
pub fn valid_payment() -> PaymentFields {
    PaymentFields {
        full_name: "Demo User".to_string(),
        email: "user@example.com".to_string(),
        address: "1 Demo Street".to_string(),
        card_number: "4242 4242 4242 4242".to_string(),
        expiry: "12/28".to_string(),
        cvv: "123".to_string(),
    }
}

/// A deterministic gateway for asserting exact confirmation values.
#[derive(Debug)]
pub struct FixedGateway {
    /// Order id handed out by `next_order_id`.
    pub order_id: String,
    /// Delivery date handed out by `delivery_date`.
    pub delivery: NaiveDate,
}

impl CheckoutGateway for FixedGateway {
    fn validate_payment(&self, fields: &PaymentFields) -> Result<(), PaymentError> {
        // Same checks as the fake gateway, reused through it.
        papershop_storefront::checkout::FakeGateway::new().validate_payment(fields)
    }

    fn next_order_id(&mut self) -> String {
        self.order_id.clone()
    }

    fn delivery_date(&self) -> NaiveDate {
        self.delivery
    }
}
