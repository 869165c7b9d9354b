//! Account roles.

use serde::{Deserialize, Serialize};

/// Role of an authenticated identity.
///
/// Wire names match the persisted JSON format (`USER`, `OWNER`, `ADMIN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Browses approved stores and their live inventory.
    #[serde(rename = "USER")]
    Shopper,
    /// Owns a store and manages its shelf.
    #[serde(rename = "OWNER")]
    MerchantOwner,
    /// Reviews merchant stores (approve/reject).
    #[serde(rename = "ADMIN")]
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shopper => write!(f, "shopper"),
            Self::MerchantOwner => write!(f, "merchant"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shopper" | "USER" => Ok(Self::Shopper),
            "merchant" | "OWNER" => Ok(Self::MerchantOwner),
            "admin" | "ADMIN" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::MerchantOwner).unwrap(),
            "\"OWNER\""
        );
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::Shopper);
    }

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!("merchant".parse::<Role>().unwrap(), Role::MerchantOwner);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("overlord".parse::<Role>().is_err());
    }
}
