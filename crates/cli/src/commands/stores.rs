//! Shopper-facing directory commands.

use findkaro_core::StoreId;

use super::{CliApp, CliResult};

/// Search approved stores by name or area.
pub fn search(app: &CliApp, query: &str) -> CliResult {
    let stores = app.registry.search_stores(query);
    if stores.is_empty() {
        println!("No stores found");
        return Ok(());
    }
    for store in stores {
        println!(
            "{}  {} - {}, {} ({} items live)",
            store.id,
            store.name,
            store.area,
            store.city,
            app.registry.live_sku_count(&store.id)
        );
    }
    Ok(())
}

/// Show one store and its live inventory, optionally filtered by name.
pub fn show(app: &CliApp, store_id: &StoreId, query: &str) -> CliResult {
    let store = app
        .registry
        .store(store_id)
        .ok_or("store not found")?;
    println!("{} ({})", store.name, store.store_type);
    println!("{}, {}, {}", store.address, store.area, store.city);
    println!("Phone: {}  Rating: {:.1}", store.phone, store.rating);
    println!();

    let products = app.registry.storefront_products(store_id, query);
    if products.is_empty() {
        println!("No products");
        return Ok(());
    }
    for product in products {
        println!("{}  PKR {}  [{}]", product.name, product.price, product.category);
    }
    Ok(())
}
