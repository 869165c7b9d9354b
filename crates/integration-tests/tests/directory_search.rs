//! Shopper-facing directory and storefront browsing.

#![allow(clippy::unwrap_used)]

use findkaro_app::catalog;
use findkaro_core::PlanTier;
use findkaro_integration_tests::{merchant_form, offline_app};

#[tokio::test]
async fn test_search_matches_name_or_area() {
    let (mut app, _) = offline_app();
    app.finalize_merchant_onboarding(merchant_form(
        "a@example.com",
        "Madina Mart",
        "Clifton",
        PlanTier::Free,
    ))
    .await
    .unwrap();
    app.finalize_merchant_onboarding(merchant_form(
        "b@example.com",
        "Bismillah Store",
        "Gulshan",
        PlanTier::Free,
    ))
    .await
    .unwrap();

    assert_eq!(app.registry.search_stores("clifton").len(), 1);
    assert_eq!(app.registry.search_stores("BISMILLAH").len(), 1);
    assert_eq!(app.registry.search_stores("").len(), 2);
    assert!(app.registry.search_stores("lahore").is_empty());
}

#[tokio::test]
async fn test_storefront_lists_only_live_products() {
    let (mut app, _) = offline_app();
    let store = app
        .finalize_merchant_onboarding(merchant_form(
            "a@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Free,
        ))
        .await
        .unwrap();

    let milk = app
        .registry
        .add_product(&store.id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
        .unwrap();
    app.registry
        .add_product(&store.id, catalog::find_item("Grocery", "Farm Eggs (Dozen)").unwrap())
        .unwrap();

    assert_eq!(app.registry.storefront_products(&store.id, "").len(), 2);
    assert_eq!(app.registry.live_sku_count(&store.id), 2);

    app.registry.toggle_product(&milk.id).unwrap();
    let visible = app.registry.storefront_products(&store.id, "");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Farm Eggs (Dozen)");
}

#[tokio::test]
async fn test_storefront_product_search() {
    let (mut app, _) = offline_app();
    let store = app
        .finalize_merchant_onboarding(merchant_form(
            "a@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Free,
        ))
        .await
        .unwrap();
    app.registry
        .add_product(&store.id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
        .unwrap();
    app.registry
        .add_product(&store.id, catalog::find_item("Grocery", "Fresh Yogurt (1kg)").unwrap())
        .unwrap();

    assert_eq!(app.registry.storefront_products(&store.id, "fresh").len(), 2);
    assert_eq!(app.registry.storefront_products(&store.id, "yogurt").len(), 1);
    assert!(app.registry.storefront_products(&store.id, "biryani").is_empty());
}

#[tokio::test]
async fn test_products_are_scoped_to_their_store() {
    let (mut app, _) = offline_app();
    let first = app
        .finalize_merchant_onboarding(merchant_form(
            "a@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Free,
        ))
        .await
        .unwrap();
    let second = app
        .finalize_merchant_onboarding(merchant_form(
            "b@example.com",
            "Bismillah Store",
            "Gulshan",
            PlanTier::Free,
        ))
        .await
        .unwrap();

    app.registry
        .add_product(&first.id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
        .unwrap();

    assert_eq!(app.registry.live_sku_count(&first.id), 1);
    assert_eq!(app.registry.live_sku_count(&second.id), 0);
    assert!(app.registry.storefront_products(&second.id, "").is_empty());
}
