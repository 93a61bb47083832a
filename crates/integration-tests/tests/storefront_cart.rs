//! Cart behavior through the command dispatcher.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use papershop_core::ProductId;
use papershop_integration_tests::test_app;
use papershop_storefront::app::Command;
use papershop_storefront::notify::NotificationKind;

// =============================================================================
// Merge and removal semantics
// =============================================================================

#[tokio::test]
async fn test_double_add_merges_into_one_line() {
    let mut app = test_app();

    for _ in 0..2 {
        app.dispatch(Command::AddToCart {
            id: ProductId::new(1),
            quantity: 1,
        })
        .await;
    }

    let lines = app.state().cart.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.first().unwrap().quantity, 2);
}

#[tokio::test]
async fn test_negative_delta_removes_line() {
    let mut app = test_app();
    app.dispatch(Command::AddToCart {
        id: ProductId::new(1),
        quantity: 2,
    })
    .await;

    app.dispatch(Command::ChangeQuantity {
        id: ProductId::new(1),
        delta: -5,
    })
    .await;

    assert!(app.state().cart.is_empty());
}

#[tokio::test]
async fn test_remove_of_absent_line_is_benign() {
    let mut app = test_app();

    app.dispatch(Command::RemoveFromCart(ProductId::new(99))).await;
    assert!(app.state().cart.is_empty());
}

#[tokio::test]
async fn test_add_unknown_product_is_rejected() {
    let mut app = test_app();

    app.dispatch(Command::AddToCart {
        id: ProductId::new(99),
        quantity: 1,
    })
    .await;

    assert!(app.state().cart.is_empty());
    let notice = app.notices().active().last().unwrap();
    assert_eq!(notice.kind, NotificationKind::Error);
}

// =============================================================================
// Invariants across operation sequences
// =============================================================================

#[tokio::test]
async fn test_ids_stay_unique_and_quantities_positive() {
    let mut app = test_app();

    let script = [
        Command::AddToCart {
            id: ProductId::new(1),
            quantity: 2,
        },
        Command::AddToCart {
            id: ProductId::new(2),
            quantity: 1,
        },
        Command::AddToCart {
            id: ProductId::new(1),
            quantity: 3,
        },
        Command::ChangeQuantity {
            id: ProductId::new(2),
            delta: -1,
        },
        Command::RemoveFromCart(ProductId::new(3)),
        Command::AddToCart {
            id: ProductId::new(3),
            quantity: 1,
        },
        Command::ChangeQuantity {
            id: ProductId::new(1),
            delta: 1,
        },
    ];

    for command in script {
        app.dispatch(command).await;

        let lines = app.state().cart.lines();
        let mut ids: Vec<_> = lines.iter().map(|line| line.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), lines.len(), "duplicate line for a product id");
        assert!(lines.iter().all(|line| line.quantity >= 1));
    }
}

// =============================================================================
// Totals
// =============================================================================

#[tokio::test]
async fn test_totals_for_two_shirts() {
    let mut app = test_app();
    app.dispatch(Command::AddToCart {
        id: ProductId::new(1),
        quantity: 2,
    })
    .await;

    let cart = &app.state().cart;
    assert_eq!(cart.subtotal(), Decimal::new(40, 0));
    assert_eq!(cart.tax(), Decimal::new(4, 0));
    assert_eq!(cart.total(), Decimal::new(44, 0));
}

#[tokio::test]
async fn test_total_is_subtotal_times_one_point_one() {
    let mut app = test_app();
    app.dispatch(Command::AddToCart {
        id: ProductId::new(1),
        quantity: 1,
    })
    .await;
    app.dispatch(Command::AddToCart {
        id: ProductId::new(3),
        quantity: 2,
    })
    .await;

    let cart = &app.state().cart;
    let expected_subtotal: Decimal = cart
        .lines()
        .iter()
        .map(papershop_storefront::cart::CartLine::line_total)
        .sum();
    assert_eq!(cart.subtotal(), expected_subtotal);
    assert_eq!(cart.total(), cart.subtotal() * Decimal::new(110, 2));
}

#[tokio::test]
async fn test_badge_counts_quantities_not_lines() {
    let mut app = test_app();
    app.dispatch(Command::AddToCart {
        id: ProductId::new(1),
        quantity: 2,
    })
    .await;
    app.dispatch(Command::AddToCart {
        id: ProductId::new(2),
        quantity: 3,
    })
    .await;

    assert_eq!(app.state().cart.item_count(), 5);
    assert_eq!(app.state().cart.lines().len(), 2);
}
