//! Filter behavior through the command dispatcher.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use papershop_core::ProductId;
use papershop_integration_tests::test_app;
use papershop_storefront::app::Command;
use papershop_storefront::filters::FilterCriteria;

fn criteria(search: &str) -> FilterCriteria {
    FilterCriteria {
        search: search.to_string(),
        category: "all".to_string(),
        min_price: Decimal::ZERO,
        max_price: Decimal::new(100, 0),
        min_rating: Decimal::ZERO,
    }
}

#[tokio::test]
async fn test_search_scenario_red_then_blue() {
    let mut app = test_app();

    app.dispatch(Command::ApplyFilters(criteria("red"))).await;
    let visible = app.state().filters.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible.first().unwrap().id, ProductId::new(1));

    app.dispatch(Command::ApplyFilters(criteria("blue shirt"))).await;
    assert!(app.state().filters.visible().is_empty());
}

#[tokio::test]
async fn test_applying_same_criteria_twice_is_idempotent() {
    let mut app = test_app();

    app.dispatch(Command::ApplyFilters(criteria("shirt"))).await;
    let once: Vec<_> = app.state().filters.visible().to_vec();

    app.dispatch(Command::ApplyFilters(criteria("shirt"))).await;
    assert_eq!(app.state().filters.visible(), once.as_slice());
}

#[tokio::test]
async fn test_clear_filters_restores_full_catalog() {
    let mut app = test_app();

    app.dispatch(Command::ApplyFilters(criteria("nothing matches this")))
        .await;
    assert!(app.state().filters.visible().is_empty());

    app.dispatch(Command::ClearFilters).await;
    assert_eq!(
        app.state().filters.visible().len(),
        app.state().catalog.products().len()
    );
}

#[tokio::test]
async fn test_filtered_view_is_subset_of_catalog() {
    let mut app = test_app();

    app.dispatch(Command::ApplyFilters(FilterCriteria {
        category: "clothing".to_string(),
        min_price: Decimal::new(30, 0),
        ..criteria("")
    }))
    .await;

    for product in app.state().filters.visible() {
        assert!(app.state().catalog.product(product.id).is_some());
    }
    let (visible, total) = app.state().filters.counts(&app.state().catalog);
    assert_eq!(visible, 1); // only Blue Jeans is clothing at >= $30
    assert_eq!(total, 3);
}

#[tokio::test]
async fn test_category_facets_are_published_in_first_seen_order() {
    let app = test_app();
    assert_eq!(
        app.state().catalog.categories(),
        ["all", "clothing", "kitchen"]
    );
}
