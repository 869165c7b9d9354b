//! Chat thread addressing.
//!
//! A two-party chat thread is keyed by the participants' IDs sorted into
//! canonical (ascending) order and joined with `_`. The key is derived, not
//! stored, so both participants always resolve to the same thread no matter
//! who initiates.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// Canonical, order-independent identifier for a two-party chat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadKey(String);

impl ThreadKey {
    /// Separator between the two participant IDs.
    const SEPARATOR: char = '_';

    /// Derive the thread key for an unordered pair of participants.
    ///
    /// `between(a, b)` and `between(b, a)` yield the same key.
    #[must_use]
    pub fn between(a: &UserId, b: &UserId) -> Self {
        let (lo, hi) = if a.as_str() <= b.as_str() {
            (a, b)
        } else {
            (b, a)
        };
        Self(format!("{lo}{}{hi}", Self::SEPARATOR))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the given user participates in this thread.
    ///
    /// Participant IDs may themselves contain the separator (locally
    /// derived IDs are `u_` plus base64, whose alphabet includes `_`), so
    /// the key cannot be split back into its parts. Containment over the
    /// joined key is the membership test.
    #[must_use]
    pub fn involves(&self, user: &UserId) -> bool {
        self.0.contains(user.as_str())
    }
}

impl std::fmt::Display for ThreadKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
