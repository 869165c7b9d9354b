//! Stock status for shelf products.

use serde::{Deserialize, Serialize};

/// Shelf-level stock status shown to shoppers.
///
/// Distinct from the `in_stock` visibility flag: a product can be visible
/// with any of these statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    ShortSupply,
    ArrivingSoon,
    NotAvailable,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "in stock"),
            Self::LowStock => write!(f, "low stock"),
            Self::ShortSupply => write!(f, "short supply"),
            Self::ArrivingSoon => write!(f, "arriving soon"),
            Self::NotAvailable => write!(f, "not available"),
        }
    }
}
