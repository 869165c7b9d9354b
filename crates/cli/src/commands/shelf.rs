//! Merchant shelf commands.

use findkaro_app::catalog;
use findkaro_app::registry::ShelfFilter;
use findkaro_core::{ProductId, StockStatus};

use super::{CliApp, CliResult, own_store};

/// List the shelf, filtered.
pub fn list(
    app: &CliApp,
    keyword: Option<String>,
    category: Option<String>,
    min_qty: u32,
    max_qty: u32,
) -> CliResult {
    let store_id = own_store(app)?;
    let filter = ShelfFilter {
        keyword,
        category,
        quantity: min_qty..=max_qty,
    };
    let shelf = app.registry.shelf(&store_id, &filter);
    if shelf.is_empty() {
        println!("No matching products");
        return Ok(());
    }
    for product in shelf {
        println!(
            "{}  {}  qty {}  PKR {}  {}  [{}]",
            product.id,
            product.name,
            product.quantity,
            product.price,
            if product.in_stock { "live" } else { "hidden" },
            product.category
        );
    }
    Ok(())
}

/// Add an item from the verified library to the shelf.
pub fn add(app: &mut CliApp, item_name: &str) -> CliResult {
    let store_id = own_store(app)?;
    let store = app.registry.store(&store_id).ok_or("store not found")?;
    let item = catalog::find_item(&store.store_type, item_name)
        .ok_or("item not in the verified library; run `findkaro shelf library`")?;
    let product = app.registry.add_product(&store_id, item)?;
    println!("Added {} ({})", product.name, product.id);
    Ok(())
}

/// List the verified item library for this store's type.
pub fn library(app: &CliApp) -> CliResult {
    let store_id = own_store(app)?;
    let store = app.registry.store(&store_id).ok_or("store not found")?;
    for item in catalog::library_for(&store.store_type) {
        println!("{}  PKR {}  [{}]", item.name, item.price, item.category);
    }
    Ok(())
}

/// Flip a product between live and hidden.
pub fn toggle(app: &mut CliApp, product_id: &ProductId) -> CliResult {
    let live = app.registry.toggle_product(product_id)?;
    println!("{}", if live { "Now live" } else { "Now hidden" });
    Ok(())
}

/// Set a product's quantity.
pub fn quantity(app: &mut CliApp, product_id: &ProductId, qty: u32) -> CliResult {
    app.registry.set_quantity(product_id, qty)?;
    println!("Quantity set to {qty}");
    Ok(())
}

/// Set a product's stock status label.
pub fn status(app: &mut CliApp, product_id: &ProductId, status: &str) -> CliResult {
    let status = parse_status(status)?;
    app.registry.set_stock_status(product_id, status)?;
    println!("Status updated");
    Ok(())
}

/// Show dashboard counters for the shelf.
pub fn stats(app: &CliApp) -> CliResult {
    let store_id = own_store(app)?;
    let stats = app.registry.shelf_stats(&store_id);
    println!("Products:     {}", stats.total);
    println!("Low stock:    {}", stats.low_stock);
    println!("Out of stock: {}", stats.out_of_stock);
    println!("Shelf value:  PKR {}", stats.total_value);
    Ok(())
}

fn parse_status(s: &str) -> Result<StockStatus, Box<dyn std::error::Error>> {
    match s {
        "in-stock" => Ok(StockStatus::InStock),
        "low-stock" => Ok(StockStatus::LowStock),
        "short-supply" => Ok(StockStatus::ShortSupply),
        "arriving-soon" => Ok(StockStatus::ArrivingSoon),
        "not-available" => Ok(StockStatus::NotAvailable),
        _ => Err(format!(
            "invalid status {s}; expected in-stock, low-stock, short-supply, arriving-soon or not-available"
        )
        .into()),
    }
}
