//! Application state shared across operations.
//!
//! One explicit, mutable state object composing every component. It is
//! passed by reference into transitions and projections — there are no
//! ambient singletons.

use crate::cart::CartLedger;
use crate::catalog::CatalogStore;
use crate::checkout::OrderConfirmation;
use crate::filters::FilterEngine;
use crate::nav::Navigator;
use crate::services::auth::AuthService;

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The whole storefront state.
///
/// Everything the projections render lives here; keeping it in one place is
/// what keeps the rendered views consistent across navigation, filter
/// changes, and cart mutations.
#[derive(Debug)]
pub struct StoreState {
    /// Fetched products and category facets.
    pub catalog: CatalogStore,
    /// Active criteria and the derived visible subset.
    pub filters: FilterEngine,
    /// The cart line collection.
    pub cart: CartLedger,
    /// User directory and session.
    pub auth: AuthService,
    /// Active page.
    pub nav: Navigator,
    /// Display theme.
    pub theme: Theme,
    /// The most recent finalized order, shown on the confirmation page.
    pub last_order: Option<OrderConfirmation>,
    /// Inline message for the auth form, if the last attempt failed.
    pub auth_form_error: Option<String>,
    /// Inline message for the checkout form, if the last attempt failed.
    pub checkout_form_error: Option<String>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreState {
    /// Fresh state: empty catalog and cart, default filters, the seeded
    /// demo user, home page, light theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: CatalogStore::new(),
            filters: FilterEngine::new(),
            cart: CartLedger::new(),
            auth: AuthService::with_demo_user(),
            nav: Navigator::new(),
            theme: Theme::Light,
            last_order: None,
            auth_form_error: None,
            checkout_form_error: None,
        }
    }
}
