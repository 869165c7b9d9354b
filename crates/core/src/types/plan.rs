//! Subscription tiers and the static plan catalog.
//!
//! Plans are read-only reference data: the tier a merchant picks during
//! onboarding decides the store's initial approval status and its listing
//! limit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription tier selected at merchant onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanTier {
    #[default]
    Free,
    Basic,
    Pro,
    Elite,
}

impl PlanTier {
    /// All tiers in catalog order.
    pub const ALL: [Self; 4] = [Self::Free, Self::Basic, Self::Pro, Self::Elite];

    /// The catalog entry for this tier.
    #[must_use]
    pub fn plan(self) -> &'static Plan {
        match self {
            Self::Free => &CATALOG[0],
            Self::Basic => &CATALOG[1],
            Self::Pro => &CATALOG[2],
            Self::Elite => &CATALOG[3],
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Basic => write!(f, "basic"),
            Self::Pro => write!(f, "pro"),
            Self::Elite => write!(f, "elite"),
        }
    }
}

impl std::str::FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" | "FREE" => Ok(Self::Free),
            "basic" | "BASIC" => Ok(Self::Basic),
            "pro" | "PRO" => Ok(Self::Pro),
            "elite" | "ELITE" => Ok(Self::Elite),
            _ => Err(format!("invalid plan tier: {s}")),
        }
    }
}

/// A static plan catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Tier this entry describes.
    pub tier: PlanTier,
    /// Marketing name.
    pub name: &'static str,
    /// Monthly price in PKR.
    pub monthly_price: Decimal,
    /// Headline features.
    pub features: &'static [&'static str],
    /// Accent color used by presentation layers.
    pub color: &'static str,
}

/// The plan catalog. Never mutated at runtime.
pub static CATALOG: [Plan; 4] = [
    Plan {
        tier: PlanTier::Free,
        name: "Basic",
        monthly_price: Decimal::from_parts(0, 0, 0, false, 0),
        features: &["50 Listings"],
        color: "#94A3B8",
    },
    Plan {
        tier: PlanTier::Basic,
        name: "Starter",
        monthly_price: Decimal::from_parts(1500, 0, 0, false, 0),
        features: &["200 Listings"],
        color: "#0047AB",
    },
    Plan {
        tier: PlanTier::Pro,
        name: "Grower",
        monthly_price: Decimal::from_parts(3500, 0, 0, false, 0),
        features: &["Unlimited"],
        color: "#FF9F1C",
    },
    Plan {
        tier: PlanTier::Elite,
        name: "Elite",
        monthly_price: Decimal::from_parts(7500, 0, 0, false, 0),
        features: &["Automation"],
        color: "#01411C",
    },
];
