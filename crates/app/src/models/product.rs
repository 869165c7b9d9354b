//! Product domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use findkaro_core::{ProductId, StockStatus, StoreId};

use crate::catalog::CatalogItem;

/// A product on a store's shelf.
///
/// Owned by exactly one store. Quantity and visibility are mutated by the
/// merchant; products are hidden rather than deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// The store this product belongs to.
    pub store_id: StoreId,
    /// Product name.
    pub name: String,
    /// Unit price in PKR.
    pub price: Decimal,
    /// Units on the shelf.
    pub quantity: u32,
    /// Category label (e.g. "Dairy & Eggs").
    pub category: String,
    /// Display image.
    pub image_url: String,
    /// Whether the product is visible to shoppers ("live").
    pub in_stock: bool,
    /// Shelf-level stock status.
    pub stock_status: StockStatus,
}

impl Product {
    /// Quantity every catalog addition starts with.
    pub const INITIAL_QUANTITY: u32 = 100;

    /// Create a shelf product from a catalog library entry.
    ///
    /// New products start live with a full shelf.
    #[must_use]
    pub fn from_catalog(item: &CatalogItem, store_id: StoreId) -> Self {
        Self {
            id: ProductId::new(Uuid::new_v4().to_string()),
            store_id,
            name: item.name.to_owned(),
            price: item.price,
            quantity: Self::INITIAL_QUANTITY,
            category: item.category.to_owned(),
            image_url: item.image_url.to_owned(),
            in_stock: true,
            stock_status: StockStatus::InStock,
        }
    }
}
