//! The storefront application: a command dispatcher over [`StoreState`].
//!
//! User input arrives as discrete [`Command`]s; each runs to completion
//! before the next is looked at. The only suspending command is
//! [`Command::LoadCatalog`] — everything else is a synchronous state
//! transition plus notification bookkeeping. Rendering happens separately:
//! callers project the state through [`crate::render`] after dispatching.

use std::time::Instant;

use papershop_core::ProductId;

use crate::cart::CartError;
use crate::catalog::CatalogClient;
use crate::checkout::{CheckoutGateway, FakeGateway, OrderConfirmation, PaymentFields};
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::filters::FilterCriteria;
use crate::nav::Page;
use crate::notify::NotificationCenter;
use crate::state::StoreState;

/// A discrete user command.
///
/// Field values are pre-validated by the UI layer (quantities parsed,
/// required fields present); semantic validation happens here.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the catalog, superseding any load still in flight.
    LoadCatalog,
    /// Replace the filter criteria and recompute the visible set.
    ApplyFilters(FilterCriteria),
    /// Reset filters to the defaults.
    ClearFilters,
    /// Add `quantity` units of a product to the cart.
    AddToCart {
        id: ProductId,
        quantity: u32,
    },
    /// Remove a product's line from the cart.
    RemoveFromCart(ProductId),
    /// Adjust a line's quantity by a signed delta.
    ChangeQuantity {
        id: ProductId,
        delta: i64,
    },
    /// Log in with email and password.
    Login {
        email: String,
        password: String,
    },
    /// Create an account and log it in.
    Signup {
        username: String,
        email: String,
        password: String,
    },
    /// Clear the session.
    Logout,
    /// Go to a page.
    Navigate(Page),
    /// Gate into checkout (requires session and a non-empty cart).
    ProceedToCheckout,
    /// Submit the checkout form.
    PlaceOrder(PaymentFields),
    /// Flip between light and dark.
    ToggleTheme,
}

/// The application: state, catalog client, checkout gateway, notifications.
pub struct StoreApp {
    state: StoreState,
    client: CatalogClient,
    gateway: Box<dyn CheckoutGateway + Send>,
    notices: NotificationCenter,
}

impl StoreApp {
    /// Build an app from configuration, with the fake checkout gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client cannot be constructed.
    pub fn new(config: &StorefrontConfig) -> Result<Self, AppError> {
        let client = CatalogClient::new(config)?;
        Ok(Self::with_parts(
            StoreState::new(),
            client,
            Box::new(FakeGateway::new()),
        ))
    }

    /// Build an app from explicit parts (tests swap in their own gateway).
    #[must_use]
    pub fn with_parts(
        state: StoreState,
        client: CatalogClient,
        gateway: Box<dyn CheckoutGateway + Send>,
    ) -> Self {
        Self {
            state,
            client,
            gateway,
            notices: NotificationCenter::new(),
        }
    }

    /// The current state, for projection.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// The notification channel.
    #[must_use]
    pub const fn notices(&self) -> &NotificationCenter {
        &self.notices
    }

    /// Drop notifications whose dismissal time has passed.
    pub fn sweep_notices(&mut self, now: Instant) {
        self.notices.sweep(now);
    }

    /// Run one command to completion.
    pub async fn dispatch(&mut self, command: Command) {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::LoadCatalog => self.load_catalog().await,
            Command::ApplyFilters(criteria) => {
                self.state.filters.apply(&self.state.catalog, criteria);
            }
            Command::ClearFilters => self.state.filters.clear(&self.state.catalog),
            Command::AddToCart { id, quantity } => self.add_to_cart(id, quantity),
            Command::RemoveFromCart(id) => {
                self.state.cart.remove_item(id);
                self.notices.info("Item removed from cart");
            }
            Command::ChangeQuantity { id, delta } => {
                self.state.cart.change_quantity(id, delta);
            }
            Command::Login { email, password } => self.login(&email, &password),
            Command::Signup {
                username,
                email,
                password,
            } => self.signup(&username, &email, &password),
            Command::Logout => self.logout(),
            Command::Navigate(page) => {
                self.state
                    .nav
                    .navigate_to(page, self.state.auth.is_authenticated());
            }
            Command::ProceedToCheckout => self.proceed_to_checkout(),
            Command::PlaceOrder(fields) => self.place_order(&fields),
            Command::ToggleTheme => self.state.theme = self.state.theme.toggled(),
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Fetch the catalog and apply the result unless a newer load started
    /// while this one was in flight.
    async fn load_catalog(&mut self) {
        let token = self.state.catalog.begin_load();
        let result = self.client.fetch_products().await;
        let failed = result.is_err();

        if !self.state.catalog.complete_load(token, result) {
            return;
        }

        if failed {
            self.notices
                .error("Failed to load products. Please try again.");
        } else {
            self.state.filters.refresh(&self.state.catalog);
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    fn add_to_cart(&mut self, id: ProductId, quantity: u32) {
        match self.try_add_to_cart(id, quantity) {
            Ok(()) => self.notices.success("Item added to cart!"),
            Err(err) => {
                tracing::warn!(product = %id, error = %err, "add to cart rejected");
                self.notices.error(err.user_message());
            }
        }
    }

    fn try_add_to_cart(&mut self, id: ProductId, quantity: u32) -> Result<(), AppError> {
        let product = self
            .state
            .catalog
            .product(id)
            .ok_or(CartError::UnknownProduct(id))?
            .clone();
        self.state.cart.add_product(&product, quantity)?;
        Ok(())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    fn login(&mut self, email: &str, password: &str) {
        match self.state.auth.login(email, password) {
            Ok(user) => {
                self.state.auth_form_error = None;
                self.notices
                    .success(format!("Welcome back, {}!", user.username));
                self.state.nav.navigate_to(Page::Home, true);
            }
            Err(err) => {
                self.state.auth_form_error = Some(AppError::from(err).user_message());
            }
        }
    }

    fn signup(&mut self, username: &str, email: &str, password: &str) {
        match self.state.auth.signup(username, email, password) {
            Ok(user) => {
                self.state.auth_form_error = None;
                self.notices
                    .success(format!("Account created! Welcome, {}!", user.username));
                self.state.nav.navigate_to(Page::Home, true);
            }
            Err(err) => {
                self.state.auth_form_error = Some(AppError::from(err).user_message());
            }
        }
    }

    fn logout(&mut self) {
        self.state.auth.logout();
        self.notices.info("Logged out successfully");
        self.state.nav.navigate_to(Page::Home, false);
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// The checkout gate: a session and a non-empty cart are preconditions
    /// of entering the checkout page.
    fn proceed_to_checkout(&mut self) {
        if !self.state.auth.is_authenticated() {
            self.notices.error("Please login to proceed to checkout");
            self.state.nav.navigate_to(Page::Auth, false);
            return;
        }

        if self.state.cart.is_empty() {
            self.notices.error("Your cart is empty");
            return;
        }

        self.state.nav.navigate_to(Page::Checkout, true);
    }

    fn place_order(&mut self, fields: &PaymentFields) {
        if let Err(err) = self.gateway.validate_payment(fields) {
            tracing::debug!(error = %err, "payment validation failed");
            let message = AppError::from(err).user_message();
            self.state.checkout_form_error = Some(message.clone());
            self.notices.error(message);
            return;
        }

        let confirmation = OrderConfirmation {
            order_id: self.gateway.next_order_id(),
            delivery_date: self.gateway.delivery_date(),
        };
        tracing::info!(order = %confirmation.order_id, "order placed");

        self.state.cart.clear();
        self.state.checkout_form_error = None;
        self.state.last_order = Some(confirmation);
        self.state
            .nav
            .navigate_to(Page::Confirmation, self.state.auth.is_authenticated());
        self.notices.success("Order placed successfully!");
    }
}
