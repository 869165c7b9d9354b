//! Authenticated identity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use findkaro_core::{Email, Role, StoreId, UserId};

/// The current authenticated identity.
///
/// Exactly one identity is "current" at a time, or none (logged out).
/// Created on successful authentication (remote or fallback), destroyed on
/// logout, persisted under the `current_identity` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable user ID (remote UID or locally derived synthetic ID).
    pub id: UserId,
    /// Email the identity was created from.
    pub email: Email,
    /// Display name; defaults to the email's local part.
    pub display_name: String,
    /// Account role.
    pub role: Role,
    /// The store this merchant owns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Remote session token, when the remote service issued one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Identity {
    /// Default avatar URL for an email (deterministic per email).
    #[must_use]
    pub fn avatar_for(email: &Email) -> String {
        format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}")
    }
}

/// A locally cached role profile for a synthetic (fallback) identity.
///
/// Written on fallback sign-up, keyed by the synthetic user ID under the
/// `local_profile_cache` key, so later fallback logins for the same email
/// recover the previously chosen role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalProfile {
    /// Role chosen at sign-up.
    pub role: Role,
    /// Email the profile was created from.
    pub email: Email,
    /// Display name at sign-up time.
    pub display_name: String,
    /// When the profile was first written.
    pub created_at: DateTime<Utc>,
}
