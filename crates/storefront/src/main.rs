//! Papershop Storefront - console demo binary.
//!
//! Runs a scripted shopping session against the configured catalog source:
//! load the catalog, browse with filters, fill the cart, sign in as the
//! demo user, and walk the checkout through to a confirmation page. Every
//! step renders through the console [`RenderSink`] adapter, the same seam a
//! real display surface would plug into.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::{Duration, Instant};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use papershop_storefront::app::{Command, StoreApp};
use papershop_storefront::checkout::PaymentFields;
use papershop_storefront::config::StorefrontConfig;
use papershop_storefront::filters::FilterCriteria;
use papershop_storefront::nav::Page;
use papershop_storefront::render::RenderSink;

use crate::console::ConsoleSink;

#[tokio::main]
async fn main() {
    // Load configuration from environment (all variables have defaults)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "papershop_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(catalog = %config.catalog_url, "storefront demo starting");

    let mut app = StoreApp::new(&config).expect("Failed to initialize application");
    let mut sink = ConsoleSink;

    // Home: load the catalog and browse.
    app.dispatch(Command::LoadCatalog).await;
    render_step(&mut app, &mut sink);

    if app.state().catalog.is_empty() {
        tracing::warn!("catalog is empty or unreachable; nothing to demo");
        return;
    }

    // Filter down, then put the first couple of products in the cart.
    let criteria = FilterCriteria::default();
    app.dispatch(Command::ApplyFilters(criteria)).await;

    let picks: Vec<_> = app
        .state()
        .catalog
        .products()
        .iter()
        .take(2)
        .map(|product| product.id)
        .collect();
    for id in &picks {
        app.dispatch(Command::AddToCart {
            id: *id,
            quantity: 1,
        })
        .await;
    }
    if let Some(first) = picks.first() {
        // Same product again: merges into the existing line.
        app.dispatch(Command::AddToCart {
            id: *first,
            quantity: 1,
        })
        .await;
    }

    app.dispatch(Command::Navigate(Page::Cart)).await;
    render_step(&mut app, &mut sink);

    // Checkout requires a session; sign in as the seeded demo account.
    app.dispatch(Command::Login {
        email: "user@example.com".to_string(),
        password: "password123".to_string(),
    })
    .await;
    app.dispatch(Command::ProceedToCheckout).await;
    render_step(&mut app, &mut sink);

    app.dispatch(Command::PlaceOrder(demo_payment())).await;
    render_step(&mut app, &mut sink);

    tracing::info!("storefront demo finished");
}

/// Demo checkout form values (the card is the classic test number).
fn demo_payment() -> PaymentFields {
    PaymentFields {
        full_name: "Demo User".to_string(),
        email: "user@example.com".to_string(),
        address: "1 Demo Street".to_string(),
        card_number: "4242 4242 4242 4242".to_string(),
        expiry: "12/28".to_string(),
        cvv: "123".to_string(),
    }
}

/// Project the current state into the sink, then let the shown
/// notifications expire as a browser toast would.
fn render_step(app: &mut StoreApp, sink: &mut ConsoleSink) {
    sink.header(&papershop_storefront::render::header(app.state()));
    sink.page(&papershop_storefront::render::page(app.state()));
    sink.notices(app.notices().active());
    app.sweep_notices(Instant::now() + Duration::from_secs(3));
}

/// Console rendering adapter.
mod console {
    // The console is the demo's display surface.
    #![allow(clippy::print_stdout)]

    use papershop_storefront::notify::Notification;
    use papershop_storefront::render::{HeaderView, PageView, RenderSink, TotalsView};

    /// Renders page projections as plain text.
    pub struct ConsoleSink;

    impl ConsoleSink {
        /// Print the notifications that this step produced.
        pub fn notices(&mut self, notices: &[Notification]) {
            for notice in notices {
                println!("[{}] {}", notice.kind.as_str(), notice.message);
            }
        }
    }

    impl RenderSink for ConsoleSink {
        fn header(&mut self, header: &HeaderView) {
            println!();
            println!(
                "=== {} | cart: {} | {} ===",
                header.page, header.cart_badge, header.auth_label
            );
        }

        fn page(&mut self, page: &PageView) {
            match page {
                PageView::Home(home) => {
                    println!("{}", home.summary);
                    if home.load_failed {
                        println!("(!) Failed to load products.");
                    }
                    if home.cards.is_empty() {
                        println!("No products found matching your filters.");
                    }
                    for card in &home.cards {
                        println!(
                            "  {} | {} | {} | {}",
                            card.title, card.category, card.price, card.rating
                        );
                    }
                }
                PageView::CartEmpty => println!("Your cart is empty."),
                PageView::Cart(cart) => {
                    for row in &cart.rows {
                        println!(
                            "  {} x{} @ {} = {}",
                            row.title, row.quantity, row.unit_price, row.line_total
                        );
                    }
                    print_totals(&cart.totals);
                }
                PageView::Checkout(checkout) => {
                    for item in &checkout.items {
                        println!("  {} x{} = {}", item.title, item.quantity, item.line_total);
                    }
                    print_totals(&checkout.totals);
                    if let Some(err) = &checkout.form_error {
                        println!("(!) {err}");
                    }
                }
                PageView::Auth(auth) => {
                    println!("Login or create an account.");
                    if let Some(err) = &auth.form_error {
                        println!("(!) {err}");
                    }
                }
                PageView::Profile(Some(profile)) => {
                    println!("{} <{}>", profile.username, profile.email);
                }
                PageView::Profile(None) => println!("Not signed in."),
                PageView::Confirmation(Some(order)) => {
                    println!(
                        "Order {} confirmed. Estimated delivery {}.",
                        order.order_id, order.delivery_date
                    );
                }
                PageView::Confirmation(None) => println!("No order yet."),
            }
        }
    }

    fn print_totals(totals: &TotalsView) {
        println!(
            "  subtotal {} | tax {} | total {}",
            totals.subtotal, totals.tax, totals.total
        );
    }
}
