//! Deterministic local identity derivation.
//!
//! When the remote identity service is unavailable or errors, the session
//! layer fabricates a synthetic identity from the email. The derivation is
//! deterministic: repeated fallback logins for the same email map to the
//! same synthetic ID, which is what lets the locally cached role profile be
//! recovered on the next login.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

use findkaro_core::{Email, Role, UserId};

use crate::models::LocalProfile;
use crate::store::{Persistence, StoreKey};

/// Length of the encoded portion of a synthetic user ID.
const ENCODED_LEN: usize = 12;

/// Derive the synthetic user ID for an email.
///
/// `u_` followed by the first 12 characters of the URL-safe base64 encoding
/// of the email. Reversibility is not required, determinism is.
#[must_use]
pub fn fallback_user_id(email: &Email) -> UserId {
    let encoded = URL_SAFE_NO_PAD.encode(email.as_str());
    let short: String = encoded.chars().take(ENCODED_LEN).collect();
    UserId::new(format!("u_{short}"))
}

/// Local role-profile cache for synthetic identities.
///
/// Backed by the `local_profile_cache` key; written on fallback sign-up and
/// consulted on fallback login and profile refresh.
#[derive(Debug, Clone)]
pub struct ProfileCache {
    persistence: Persistence,
}

impl ProfileCache {
    /// Attach the cache to persistence.
    #[must_use]
    pub const fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    fn load_all(&self) -> HashMap<UserId, LocalProfile> {
        self.persistence
            .load_json(StoreKey::LocalProfileCache)
            .unwrap_or_default()
    }

    /// Look up the cached profile for a synthetic user ID.
    #[must_use]
    pub fn get(&self, uid: &UserId) -> Option<LocalProfile> {
        let mut all = self.load_all();
        all.remove(uid)
    }

    /// Record the profile chosen at fallback sign-up.
    pub fn insert(&self, uid: UserId, role: Role, email: &Email) {
        let mut all = self.load_all();
        all.insert(
            uid,
            LocalProfile {
                role,
                email: email.clone(),
                display_name: email.local_part().to_owned(),
                created_at: Utc::now(),
            },
        );
        self.persistence.save_json(StoreKey::LocalProfileCache, &all);
    }
}
