//! Store domain type.

use serde::{Deserialize, Serialize};

use findkaro_core::{ApprovalStatus, PlanTier, StoreId, UserId};

/// A merchant store in the directory.
///
/// Created when a merchant completes onboarding. `approval_status` is
/// mutated by the merchant (submit-for-verification) and by the admin
/// (approve/reject); stores are never deleted in normal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store ID, derived from the owner.
    pub id: StoreId,
    /// The merchant who owns this store. At most one store per owner.
    pub owner_id: UserId,
    /// Brand / shop name.
    pub name: String,
    /// Street address within the area.
    pub address: String,
    /// City (from the reference table).
    pub city: String,
    /// Area within the city.
    pub area: String,
    /// Store type (e.g. "Grocery"), selects the catalog library.
    #[serde(rename = "type")]
    pub store_type: String,
    /// Contact phone number.
    pub phone: String,
    /// Display image.
    pub image_url: String,
    /// Shopper rating (display metadata).
    pub rating: f32,
    /// Whether the store is currently marked online.
    pub is_online: bool,
    /// Position in the approval workflow.
    pub approval_status: ApprovalStatus,
    /// Subscription tier selected at onboarding.
    #[serde(rename = "selectedPlan")]
    pub plan: PlanTier,
}

/// Input for creating a store at the end of merchant onboarding.
#[derive(Debug, Clone)]
pub struct NewStore {
    pub owner_id: UserId,
    pub name: String,
    pub store_type: String,
    pub city: String,
    pub area: String,
    pub address: String,
    pub phone: String,
    pub plan: PlanTier,
}

impl NewStore {
    /// Default store image used when the merchant has not uploaded one.
    pub const DEFAULT_IMAGE: &'static str =
        "https://images.unsplash.com/photo-1542838132-92c53300491e?w=800";

    /// Build the full store record. The initial approval status is a pure
    /// function of the selected plan.
    #[must_use]
    pub fn into_store(self) -> Store {
        let id = StoreId::for_owner(&self.owner_id);
        Store {
            id,
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            city: self.city,
            area: self.area,
            store_type: self.store_type,
            phone: self.phone,
            image_url: Self::DEFAULT_IMAGE.to_owned(),
            rating: 5.0,
            is_online: true,
            approval_status: ApprovalStatus::initial_for(self.plan),
            plan: self.plan,
        }
    }
}
