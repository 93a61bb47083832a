//! Pure state-to-projection functions and the rendering seam.
//!
//! Each component exposes a pure function from current state to a
//! display-ready projection with preformatted strings. A [`RenderSink`]
//! consumes those projections; it never talks back except through the
//! command stream. Swapping the sink swaps the display surface without
//! touching any state logic.

use rust_decimal::Decimal;

use papershop_core::ProductId;

use crate::nav::Page;
use crate::state::{StoreState, Theme};

/// Consumes page projections. The core writes; the sink displays.
pub trait RenderSink {
    /// Render the header chrome (badge, auth button, theme).
    fn header(&mut self, header: &HeaderView);

    /// Render the active page.
    fn page(&mut self, page: &PageView);
}

// =============================================================================
// View types
// =============================================================================

/// Header chrome shown on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Sum of cart quantities (not line count).
    pub cart_badge: u64,
    /// Auth button label: the username when signed in, "Login" otherwise.
    pub auth_label: String,
    /// Active theme.
    pub theme: Theme,
    /// Active page identifier.
    pub page: Page,
}

/// One product card on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    /// Product id, for wiring add-to-cart commands.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Category label.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Formatted unit price (`$19.99`).
    pub price: String,
    /// Formatted rating (`4.5 (10 reviews)`).
    pub rating: String,
}

/// The home page: filter options, product grid, count summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    /// Category filter options, `"all"` first.
    pub categories: Vec<String>,
    /// Visible product cards.
    pub cards: Vec<ProductCardView>,
    /// Count summary, e.g. `Showing 3 of 20 products`.
    pub summary: String,
    /// Whether the last catalog load failed (retry affordance).
    pub load_failed: bool,
}

/// One cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    /// Product id, for wiring quantity/removal commands.
    pub id: ProductId,
    /// Title snapshot.
    pub title: String,
    /// Image snapshot.
    pub image: String,
    /// Formatted unit price.
    pub unit_price: String,
    /// Current quantity.
    pub quantity: u32,
    /// Formatted `price x quantity`.
    pub line_total: String,
}

/// Order money summary (cart and checkout pages).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsView {
    /// Formatted subtotal.
    pub subtotal: String,
    /// Formatted tax line.
    pub tax: String,
    /// Formatted grand total.
    pub total: String,
}

/// The cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Rows, one per distinct product.
    pub rows: Vec<CartRowView>,
    /// Money summary.
    pub totals: TotalsView,
}

/// One compact checkout summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutItemView {
    /// Title snapshot.
    pub title: String,
    /// Current quantity.
    pub quantity: u32,
    /// Formatted line total.
    pub line_total: String,
}

/// The checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    /// Summary rows.
    pub items: Vec<CheckoutItemView>,
    /// Money summary.
    pub totals: TotalsView,
    /// Inline form error from the last rejected submission.
    pub form_error: Option<String>,
}

/// The auth page (login/signup forms).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthView {
    /// Inline form error from the last rejected attempt.
    pub form_error: Option<String>,
}

/// The profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// Display name.
    pub username: String,
    /// Account email.
    pub email: String,
}

/// The order confirmation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    /// Synthesized order id.
    pub order_id: String,
    /// Formatted delivery date.
    pub delivery_date: String,
}

/// Projection of the active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home(HomeView),
    Cart(CartView),
    /// Empty-state rendering when the cart has no lines.
    CartEmpty,
    Checkout(CheckoutView),
    Auth(AuthView),
    /// `None` only if projection is asked for while anonymous; navigation
    /// normally redirects before that happens.
    Profile(Option<ProfileView>),
    /// `None` before any order has been placed.
    Confirmation(Option<ConfirmationView>),
}

// =============================================================================
// Projections
// =============================================================================

/// Project the header chrome.
#[must_use]
pub fn header(state: &StoreState) -> HeaderView {
    HeaderView {
        cart_badge: state.cart.item_count(),
        auth_label: state
            .auth
            .current_user()
            .map_or_else(|| "Login".to_string(), |user| user.username.clone()),
        theme: state.theme,
        page: state.nav.current(),
    }
}

/// Project the active page.
#[must_use]
pub fn page(state: &StoreState) -> PageView {
    match state.nav.current() {
        Page::Home => PageView::Home(home(state)),
        Page::Cart => {
            if state.cart.is_empty() {
                PageView::CartEmpty
            } else {
                PageView::Cart(cart(state))
            }
        }
        Page::Checkout => PageView::Checkout(checkout(state)),
        Page::Auth => PageView::Auth(AuthView {
            form_error: state.auth_form_error.clone(),
        }),
        Page::Profile => PageView::Profile(profile(state)),
        Page::Confirmation => PageView::Confirmation(confirmation(state)),
    }
}

/// Project the home page from the filtered view.
#[must_use]
pub fn home(state: &StoreState) -> HomeView {
    let cards = state
        .filters
        .visible()
        .iter()
        .map(|product| ProductCardView {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price.to_string(),
            rating: format!(
                "{} ({} reviews)",
                product.rating.rate, product.rating.count
            ),
        })
        .collect();

    let (visible, total) = state.filters.counts(&state.catalog);

    HomeView {
        categories: state.catalog.categories().to_vec(),
        cards,
        summary: format!("Showing {visible} of {total} products"),
        load_failed: state.catalog.last_error().is_some(),
    }
}

/// Project the cart page.
#[must_use]
pub fn cart(state: &StoreState) -> CartView {
    let rows = state
        .cart
        .lines()
        .iter()
        .map(|line| CartRowView {
            id: line.id,
            title: line.title.clone(),
            image: line.image.clone(),
            unit_price: line.price.to_string(),
            quantity: line.quantity,
            line_total: money(line.line_total()),
        })
        .collect();

    CartView {
        rows,
        totals: totals(state),
    }
}

/// Project the checkout page.
#[must_use]
pub fn checkout(state: &StoreState) -> CheckoutView {
    let items = state
        .cart
        .lines()
        .iter()
        .map(|line| CheckoutItemView {
            title: line.title.clone(),
            quantity: line.quantity,
            line_total: money(line.line_total()),
        })
        .collect();

    CheckoutView {
        items,
        totals: totals(state),
        form_error: state.checkout_form_error.clone(),
    }
}

/// Project the money summary from the cart ledger.
#[must_use]
pub fn totals(state: &StoreState) -> TotalsView {
    TotalsView {
        subtotal: money(state.cart.subtotal()),
        tax: money(state.cart.tax()),
        total: money(state.cart.total()),
    }
}

fn profile(state: &StoreState) -> Option<ProfileView> {
    state.auth.current_user().map(|user| ProfileView {
        username: user.username.clone(),
        email: user.email.clone(),
    })
}

fn confirmation(state: &StoreState) -> Option<ConfirmationView> {
    state.last_order.as_ref().map(|order| ConfirmationView {
        order_id: order.order_id.clone(),
        delivery_date: order.formatted_delivery_date(),
    })
}

/// Format a decimal amount as dollars.
fn money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use papershop_core::{Price, Product, Rating};

    fn loaded_state() -> StoreState {
        let mut state = StoreState::new();
        let token = state.catalog.begin_load();
        state.catalog.complete_load(
            token,
            Ok(vec![Product {
                id: ProductId::new(1),
                title: "Red Shirt".to_string(),
                price: Price::new(Decimal::new(20, 0)).unwrap(),
                category: "clothing".to_string(),
                image: "https://example.com/red.jpg".to_string(),
                rating: Rating {
                    rate: Decimal::new(45, 1),
                    count: 10,
                },
            }]),
        );
        state.filters.refresh(&state.catalog);
        state
    }

    #[test]
    fn test_home_projection() {
        let state = loaded_state();
        let view = home(&state);

        assert_eq!(view.categories, ["all", "clothing"]);
        assert_eq!(view.summary, "Showing 1 of 1 products");
        assert!(!view.load_failed);

        let card = view.cards.first().unwrap();
        assert_eq!(card.price, "$20.00");
        assert_eq!(card.rating, "4.5 (10 reviews)");
    }

    #[test]
    fn test_cart_projection_formats_money() {
        let mut state = loaded_state();
        let product = state.catalog.product(ProductId::new(1)).unwrap().clone();
        state.cart.add_product(&product, 2).unwrap();

        let view = cart(&state);
        let row = view.rows.first().unwrap();
        assert_eq!(row.line_total, "$40.00");
        assert_eq!(view.totals.subtotal, "$40.00");
        assert_eq!(view.totals.tax, "$4.00");
        assert_eq!(view.totals.total, "$44.00");
    }

    #[test]
    fn test_empty_cart_projects_empty_state() {
        let mut state = loaded_state();
        state.nav.navigate_to(Page::Cart, false);

        assert_eq!(page(&state), PageView::CartEmpty);
    }

    #[test]
    fn test_header_labels() {
        let mut state = loaded_state();
        assert_eq!(header(&state).auth_label, "Login");

        state.auth.login("user@example.com", "password123").unwrap();
        assert_eq!(header(&state).auth_label, "demo_user");
    }

    #[test]
    fn test_profile_projection_requires_session() {
        let mut state = loaded_state();
        assert!(profile(&state).is_none());

        state.auth.login("user@example.com", "password123").unwrap();
        let view = profile(&state).unwrap();
        assert_eq!(view.username, "demo_user");
        assert_eq!(view.email, "user@example.com");
    }
}
