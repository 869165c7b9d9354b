//! Store directory and shelf inventory.
//!
//! The registry owns every store and every shelf product. Shoppers see only
//! approved stores and live products; merchants mutate their own shelf and
//! walk the approval workflow; the admin reviews pending stores. Every
//! mutation writes through to the `store_list` / `product_list` keys.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use findkaro_core::{
    ApprovalStatus, ProductId, ReviewDecision, StoreId, TransitionError, UserId,
};

use crate::catalog::CatalogItem;
use crate::models::{NewStore, Product, Store};
use crate::store::{Persistence, StoreKey};

/// Quantity strictly below this (and above zero) counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// Errors raised by registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The owner already has a store; one store per merchant.
    #[error("merchant already owns a store")]
    OwnerHasStore,
    /// No store with that ID.
    #[error("store not found")]
    StoreNotFound,
    /// No product with that ID.
    #[error("product not found")]
    ProductNotFound,
    /// The store is not approved, so its shelf cannot be changed.
    #[error("store is not operational")]
    NotOperational,
    /// The approval workflow rejected the transition.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Merchant-facing shelf filter. The default matches everything.
#[derive(Debug, Clone)]
pub struct ShelfFilter {
    /// Case-insensitive substring of the product name.
    pub keyword: Option<String>,
    /// Case-insensitive substring of the category label.
    pub category: Option<String>,
    /// Inclusive quantity range.
    pub quantity: RangeInclusive<u32>,
}

impl Default for ShelfFilter {
    fn default() -> Self {
        Self {
            keyword: None,
            category: None,
            quantity: 0..=u32::MAX,
        }
    }
}

/// Aggregates shown on the merchant dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfStats {
    /// All products on the shelf, live or not.
    pub total: usize,
    /// Products with quantity strictly between zero and the threshold.
    pub low_stock: usize,
    /// Products with zero quantity.
    pub out_of_stock: usize,
    /// Sum of price times quantity across the shelf, in PKR.
    pub total_value: Decimal,
}

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    /// All stores, in any status.
    pub total: usize,
    /// Stores awaiting review.
    pub pending: usize,
    /// Approved stores.
    pub approved: usize,
}

/// The store directory and all shelf inventory.
#[derive(Debug)]
pub struct Registry {
    persistence: Persistence,
    stores: Vec<Store>,
    products: Vec<Product>,
}

impl Registry {
    /// Hydrate the registry from persistence. Missing or malformed lists
    /// start empty.
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        let stores: Vec<Store> = persistence.load_json(StoreKey::StoreList).unwrap_or_default();
        let products: Vec<Product> = persistence
            .load_json(StoreKey::ProductList)
            .unwrap_or_default();
        info!(stores = stores.len(), products = products.len(), "registry loaded");
        Self {
            persistence,
            stores,
            products,
        }
    }

    // ========================================================================
    // Stores
    // ========================================================================

    /// Create a store for a merchant.
    ///
    /// The initial approval status follows the selected plan: free plans are
    /// approved immediately, paid plans start awaiting payment.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::OwnerHasStore`] when the owner already has a
    /// store.
    #[instrument(skip_all, fields(owner = %new.owner_id))]
    pub fn create_store(&mut self, new: NewStore) -> Result<Store, RegistryError> {
        if self.store_for_owner(&new.owner_id).is_some() {
            return Err(RegistryError::OwnerHasStore);
        }
        let store = new.into_store();
        info!(store = %store.id, status = %store.approval_status, "store created");
        self.stores.push(store.clone());
        self.persist_stores();
        Ok(store)
    }

    /// Look up a store by ID.
    #[must_use]
    pub fn store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.id == id)
    }

    /// The store a merchant owns, if any.
    #[must_use]
    pub fn store_for_owner(&self, owner: &UserId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.owner_id == owner)
    }

    /// Shopper-facing directory search.
    ///
    /// Only approved stores appear. A non-empty query matches case
    /// insensitively against the store name or area; an empty query matches
    /// every approved store.
    #[must_use]
    pub fn search_stores(&self, query: &str) -> Vec<&Store> {
        let needle = query.trim().to_lowercase();
        self.stores
            .iter()
            .filter(|s| s.approval_status.is_operational())
            .filter(|s| {
                needle.is_empty()
                    || s.name.to_lowercase().contains(&needle)
                    || s.area.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Admin listing: every store in a given status.
    #[must_use]
    pub fn stores_by_status(&self, status: ApprovalStatus) -> Vec<&Store> {
        self.stores
            .iter()
            .filter(|s| s.approval_status == status)
            .collect()
    }

    /// Admin dashboard counters.
    #[must_use]
    pub fn admin_stats(&self) -> AdminStats {
        AdminStats {
            total: self.stores.len(),
            pending: self
                .stores
                .iter()
                .filter(|s| s.approval_status == ApprovalStatus::PendingApproval)
                .count(),
            approved: self
                .stores
                .iter()
                .filter(|s| s.approval_status == ApprovalStatus::Approved)
                .count(),
        }
    }

    // ========================================================================
    // Approval workflow
    // ========================================================================

    /// Merchant declares the plan payment was made, moving the store from
    /// awaiting-payment to awaiting-review.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the store is unknown or not awaiting
    /// payment.
    #[instrument(skip(self))]
    pub fn submit_verification(&mut self, id: &StoreId) -> Result<ApprovalStatus, RegistryError> {
        let store = self.store_mut(id)?;
        store.approval_status = store.approval_status.submit_verification()?;
        let status = store.approval_status;
        info!(store = %id, status = %status, "verification submitted");
        self.persist_stores();
        Ok(status)
    }

    /// Admin approves or rejects a store awaiting review.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the store is unknown or not awaiting
    /// review.
    #[instrument(skip(self))]
    pub fn review(
        &mut self,
        id: &StoreId,
        decision: ReviewDecision,
    ) -> Result<ApprovalStatus, RegistryError> {
        let store = self.store_mut(id)?;
        store.approval_status = store.approval_status.review(decision)?;
        let status = store.approval_status;
        info!(store = %id, status = %status, "store reviewed");
        self.persist_stores();
        Ok(status)
    }

    // ========================================================================
    // Shelf
    // ========================================================================

    /// Add a catalog item to a store's shelf.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the store is unknown or not approved.
    #[instrument(skip_all, fields(store = %store_id, item = item.name))]
    pub fn add_product(
        &mut self,
        store_id: &StoreId,
        item: &CatalogItem,
    ) -> Result<Product, RegistryError> {
        let store = self.store(store_id).ok_or(RegistryError::StoreNotFound)?;
        if !store.approval_status.is_operational() {
            return Err(RegistryError::NotOperational);
        }
        let product = Product::from_catalog(item, store_id.clone());
        self.products.push(product.clone());
        self.persist_products();
        Ok(product)
    }

    /// Flip a product's live flag. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProductNotFound`] for an unknown product.
    pub fn toggle_product(&mut self, id: &ProductId) -> Result<bool, RegistryError> {
        let product = self.product_mut(id)?;
        product.in_stock = !product.in_stock;
        let live = product.in_stock;
        self.persist_products();
        Ok(live)
    }

    /// Set a product's shelf quantity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProductNotFound`] for an unknown product.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<(), RegistryError> {
        let product = self.product_mut(id)?;
        product.quantity = quantity;
        self.persist_products();
        Ok(())
    }

    /// Set a product's merchant-declared stock status label.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProductNotFound`] for an unknown product.
    pub fn set_stock_status(
        &mut self,
        id: &ProductId,
        status: findkaro_core::StockStatus,
    ) -> Result<(), RegistryError> {
        let product = self.product_mut(id)?;
        product.stock_status = status;
        self.persist_products();
        Ok(())
    }

    /// Merchant-facing shelf listing, filtered. Name and category match as
    /// case-insensitive substrings.
    #[must_use]
    pub fn shelf(&self, store_id: &StoreId, filter: &ShelfFilter) -> Vec<&Product> {
        let keyword = filter.keyword.as_deref().map(str::to_lowercase);
        let category = filter.category.as_deref().map(str::to_lowercase);
        self.products
            .iter()
            .filter(|p| &p.store_id == store_id)
            .filter(|p| {
                keyword
                    .as_deref()
                    .is_none_or(|k| p.name.to_lowercase().contains(k))
            })
            .filter(|p| {
                category
                    .as_deref()
                    .is_none_or(|c| p.category.to_lowercase().contains(c))
            })
            .filter(|p| filter.quantity.contains(&p.quantity))
            .collect()
    }

    /// Shopper-facing product listing for one store.
    ///
    /// Only live products appear; a non-empty query matches case
    /// insensitively against the product name.
    #[must_use]
    pub fn storefront_products(&self, store_id: &StoreId, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| &p.store_id == store_id && p.in_stock)
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// How many live products a store has (shown on directory cards).
    #[must_use]
    pub fn live_sku_count(&self, store_id: &StoreId) -> usize {
        self.products
            .iter()
            .filter(|p| &p.store_id == store_id && p.in_stock)
            .count()
    }

    /// Merchant dashboard counters for one shelf.
    #[must_use]
    pub fn shelf_stats(&self, store_id: &StoreId) -> ShelfStats {
        let shelf: Vec<&Product> =
            self.products.iter().filter(|p| &p.store_id == store_id).collect();
        ShelfStats {
            total: shelf.len(),
            low_stock: shelf
                .iter()
                .filter(|p| p.quantity > 0 && p.quantity < LOW_STOCK_THRESHOLD)
                .count(),
            out_of_stock: shelf.iter().filter(|p| p.quantity == 0).count(),
            total_value: shelf
                .iter()
                .map(|p| p.price * Decimal::from(p.quantity))
                .sum(),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn store_mut(&mut self, id: &StoreId) -> Result<&mut Store, RegistryError> {
        self.stores
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(RegistryError::StoreNotFound)
    }

    fn product_mut(&mut self, id: &ProductId) -> Result<&mut Product, RegistryError> {
        self.products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(RegistryError::ProductNotFound)
    }

    fn persist_stores(&self) {
        self.persistence.save_json(StoreKey::StoreList, &self.stores);
    }

    fn persist_products(&self) {
        self.persistence
            .save_json(StoreKey::ProductList, &self.products);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use findkaro_core::{PlanTier, StockStatus};

    use super::*;
    use crate::catalog;
    use crate::store::MemoryStore;

    fn registry() -> Registry {
        Registry::new(Persistence::new(MemoryStore::default()))
    }

    fn new_store(owner: &str, name: &str, area: &str, plan: PlanTier) -> NewStore {
        NewStore {
            owner_id: UserId::new(owner),
            name: name.to_owned(),
            store_type: "Grocery".to_owned(),
            city: "Karachi".to_owned(),
            area: area.to_owned(),
            address: "Shop 1".to_owned(),
            phone: "03001234567".to_owned(),
            plan,
        }
    }

    #[test]
    fn test_one_store_per_owner() {
        let mut registry = registry();
        registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Free))
            .unwrap();
        let err = registry
            .create_store(new_store("u_1", "Second Shop", "DHA", PlanTier::Free))
            .unwrap_err();
        assert!(matches!(err, RegistryError::OwnerHasStore));
    }

    #[test]
    fn test_search_shows_only_approved_stores() {
        let mut registry = registry();
        registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Free))
            .unwrap();
        registry
            .create_store(new_store("u_2", "Bismillah Store", "DHA", PlanTier::Pro))
            .unwrap();

        let visible = registry.search_stores("");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Madina Mart");
    }

    #[test]
    fn test_search_matches_name_or_area_case_insensitive() {
        let mut registry = registry();
        registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Free))
            .unwrap();
        registry
            .create_store(new_store("u_2", "Corner Shop", "Gulshan", PlanTier::Free))
            .unwrap();

        assert_eq!(registry.search_stores("madina").len(), 1);
        assert_eq!(registry.search_stores("CLIFTON").len(), 1);
        assert_eq!(registry.search_stores("gulshan").len(), 1);
        assert!(registry.search_stores("lahore").is_empty());
    }

    #[test]
    fn test_paid_store_approval_workflow() {
        let mut registry = registry();
        let store = registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Basic))
            .unwrap();
        assert_eq!(store.approval_status, ApprovalStatus::PendingPayment);

        let status = registry.submit_verification(&store.id).unwrap();
        assert_eq!(status, ApprovalStatus::PendingApproval);

        let status = registry.review(&store.id, ReviewDecision::Approve).unwrap();
        assert_eq!(status, ApprovalStatus::Approved);
        assert_eq!(registry.search_stores("").len(), 1);
    }

    #[test]
    fn test_rejected_store_stays_hidden() {
        let mut registry = registry();
        let store = registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Basic))
            .unwrap();
        registry.submit_verification(&store.id).unwrap();
        registry.review(&store.id, ReviewDecision::Reject).unwrap();

        assert!(registry.search_stores("").is_empty());
        // Rejection is terminal.
        assert!(registry.submit_verification(&store.id).is_err());
        assert!(registry.review(&store.id, ReviewDecision::Approve).is_err());
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut registry = registry();
        let store = registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Free))
            .unwrap();

        // Already approved: neither merchant nor admin transition applies.
        assert!(matches!(
            registry.submit_verification(&store.id),
            Err(RegistryError::Transition(_))
        ));
        assert!(matches!(
            registry.review(&store.id, ReviewDecision::Approve),
            Err(RegistryError::Transition(_))
        ));
    }

    #[test]
    fn test_admin_stats() {
        let mut registry = registry();
        registry
            .create_store(new_store("u_1", "A", "Clifton", PlanTier::Free))
            .unwrap();
        let pending = registry
            .create_store(new_store("u_2", "B", "DHA", PlanTier::Pro))
            .unwrap();
        registry.submit_verification(&pending.id).unwrap();

        let stats = registry.admin_stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.approved, 1);
        assert_eq!(
            registry.stores_by_status(ApprovalStatus::PendingApproval).len(),
            1
        );
    }

    #[test]
    fn test_shelf_requires_operational_store() {
        let mut registry = registry();
        let store = registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Pro))
            .unwrap();
        let item = catalog::library_for("Grocery").first().unwrap();

        assert!(matches!(
            registry.add_product(&store.id, item),
            Err(RegistryError::NotOperational)
        ));
    }

    fn approved_store(registry: &mut Registry) -> StoreId {
        registry
            .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Free))
            .unwrap()
            .id
    }

    #[test]
    fn test_toggle_hides_product_from_shoppers() {
        let mut registry = registry();
        let store_id = approved_store(&mut registry);
        let item = catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap();
        let product = registry.add_product(&store_id, item).unwrap();

        assert_eq!(registry.storefront_products(&store_id, "").len(), 1);
        assert_eq!(registry.live_sku_count(&store_id), 1);

        assert!(!registry.toggle_product(&product.id).unwrap());
        assert!(registry.storefront_products(&store_id, "").is_empty());
        assert_eq!(registry.live_sku_count(&store_id), 0);
        // Still on the merchant's shelf.
        assert_eq!(registry.shelf(&store_id, &ShelfFilter::default()).len(), 1);
    }

    #[test]
    fn test_storefront_search_by_name() {
        let mut registry = registry();
        let store_id = approved_store(&mut registry);
        registry
            .add_product(&store_id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
            .unwrap();
        registry
            .add_product(&store_id, catalog::find_item("Grocery", "Farm Eggs (Dozen)").unwrap())
            .unwrap();

        assert_eq!(registry.storefront_products(&store_id, "milk").len(), 1);
        assert_eq!(registry.storefront_products(&store_id, "").len(), 2);
    }

    #[test]
    fn test_shelf_filter() {
        let mut registry = registry();
        let store_id = approved_store(&mut registry);
        let milk = registry
            .add_product(&store_id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
            .unwrap();
        registry
            .add_product(&store_id, catalog::find_item("Grocery", "Farm Eggs (Dozen)").unwrap())
            .unwrap();
        registry.set_quantity(&milk.id, 5).unwrap();

        let low = ShelfFilter {
            quantity: 0..=(LOW_STOCK_THRESHOLD - 1),
            ..ShelfFilter::default()
        };
        let matches = registry.shelf(&store_id, &low);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Fresh Milk (1L)");

        let dairy = ShelfFilter {
            category: Some("Dairy & Eggs".to_owned()),
            ..ShelfFilter::default()
        };
        assert_eq!(registry.shelf(&store_id, &dairy).len(), 2);

        let keyword = ShelfFilter {
            keyword: Some("eggs".to_owned()),
            ..ShelfFilter::default()
        };
        assert_eq!(registry.shelf(&store_id, &keyword).len(), 1);
    }

    #[test]
    fn test_shelf_stats() {
        let mut registry = registry();
        let store_id = approved_store(&mut registry);
        let milk = registry
            .add_product(&store_id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
            .unwrap();
        let eggs = registry
            .add_product(&store_id, catalog::find_item("Grocery", "Farm Eggs (Dozen)").unwrap())
            .unwrap();
        let bread = registry
            .add_product(&store_id, catalog::find_item("Grocery", "White Bread (Large)").unwrap())
            .unwrap();

        registry.set_quantity(&milk.id, 5).unwrap();
        registry.set_quantity(&eggs.id, 0).unwrap();
        registry.set_quantity(&bread.id, 50).unwrap();

        let stats = registry.shelf_stats(&store_id);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 1);
        // 290 * 5 + 345 * 0 + 195 * 50
        assert_eq!(stats.total_value, Decimal::from(290 * 5 + 195 * 50));
    }

    #[test]
    fn test_boundary_quantities() {
        let mut registry = registry();
        let store_id = approved_store(&mut registry);
        let milk = registry
            .add_product(&store_id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
            .unwrap();

        // Exactly at the threshold is not low stock.
        registry.set_quantity(&milk.id, LOW_STOCK_THRESHOLD).unwrap();
        assert_eq!(registry.shelf_stats(&store_id).low_stock, 0);

        registry.set_quantity(&milk.id, LOW_STOCK_THRESHOLD - 1).unwrap();
        assert_eq!(registry.shelf_stats(&store_id).low_stock, 1);

        // Zero is out of stock, not low stock.
        registry.set_quantity(&milk.id, 0).unwrap();
        let stats = registry.shelf_stats(&store_id);
        assert_eq!(stats.low_stock, 0);
        assert_eq!(stats.out_of_stock, 1);
    }

    #[test]
    fn test_stock_status_label() {
        let mut registry = registry();
        let store_id = approved_store(&mut registry);
        let milk = registry
            .add_product(&store_id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
            .unwrap();

        registry
            .set_stock_status(&milk.id, StockStatus::ArrivingSoon)
            .unwrap();
        let shelf = registry.shelf(&store_id, &ShelfFilter::default());
        assert_eq!(shelf[0].stock_status, StockStatus::ArrivingSoon);
    }

    #[test]
    fn test_registry_survives_restart() {
        let persistence = Persistence::new(MemoryStore::default());
        let store_id = {
            let mut registry = Registry::new(persistence.clone());
            let store = registry
                .create_store(new_store("u_1", "Madina Mart", "Clifton", PlanTier::Free))
                .unwrap();
            registry
                .add_product(&store.id, catalog::find_item("Grocery", "Fresh Milk (1L)").unwrap())
                .unwrap();
            store.id
        };

        let reloaded = Registry::new(persistence);
        assert!(reloaded.store(&store_id).is_some());
        assert_eq!(reloaded.live_sku_count(&store_id), 1);
    }
}
