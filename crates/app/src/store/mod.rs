//! Local key-value persistence.
//!
//! Durable mapping from named keys to JSON values. Each key holds one
//! serialized document and is independent: a failure writing one key never
//! blocks another. The [`Persistence`] facade is fail-soft - malformed or
//! missing data loads as `None`, write failures are logged and swallowed -
//! so no persistence error ever reaches a caller.
//!
//! Adapters implement the [`KeyValueStore`] port: [`JsonFileStore`] writes
//! one file per key under a data directory, [`MemoryStore`] backs tests.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Persisted keys, one JSON value each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The current authenticated identity (absent when logged out).
    CurrentIdentity,
    /// All stores in the directory.
    StoreList,
    /// All shelf products across stores.
    ProductList,
    /// Mapping of thread key to message sequence.
    ChatThreads,
    /// Append-only notification list.
    NotificationList,
    /// Mapping of synthetic user ID to fallback profile.
    LocalProfileCache,
}

impl StoreKey {
    /// All keys, for enumeration in tests and tooling.
    pub const ALL: [Self; 6] = [
        Self::CurrentIdentity,
        Self::StoreList,
        Self::ProductList,
        Self::ChatThreads,
        Self::NotificationList,
        Self::LocalProfileCache,
    ];

    /// Stable name used as the storage key (and file stem on disk).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentIdentity => "current_identity",
            Self::StoreList => "store_list",
            Self::ProductList => "product_list",
            Self::ChatThreads => "chat_threads",
            Self::NotificationList => "notification_list",
            Self::LocalProfileCache => "local_profile_cache",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors an adapter may raise internally.
///
/// These never cross the [`Persistence`] facade; they exist so adapters can
/// report what went wrong to the log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for raw key-value storage.
///
/// Adapters store opaque strings; (de)serialization lives in the facade.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for a key. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    /// Write the value for a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&self, key: StoreKey, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn remove(&self, key: StoreKey) -> Result<(), StoreError>;
}

/// Fail-soft persistence facade shared by all services.
///
/// Cheaply cloneable; every mutation in the application writes through this
/// facade immediately (last write wins per key).
#[derive(Clone)]
pub struct Persistence {
    inner: Arc<dyn KeyValueStore>,
}

impl Persistence {
    /// Wrap a storage adapter.
    #[must_use]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Load and deserialize the value for a key.
    ///
    /// Absence, read failure and malformed JSON all yield `None`; nothing
    /// here is surfaced to the caller.
    #[must_use]
    pub fn load_json<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let raw = match self.inner.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%key, "no persisted value");
                return None;
            }
            Err(err) => {
                warn!(%key, error = %err, "failed to read persisted value, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%key, error = %err, "malformed persisted value, treating as absent");
                None
            }
        }
    }

    /// Serialize and write the value for a key. Best effort: failures are
    /// logged and swallowed.
    pub fn save_json<T: Serialize>(&self, key: StoreKey, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%key, error = %err, "failed to serialize value, skipping write");
                return;
            }
        };

        if let Err(err) = self.inner.save(key, &raw) {
            warn!(%key, error = %err, "failed to persist value, continuing with in-memory state");
        }
    }

    /// Delete a key. Used on logout so a fresh load reports "no session"
    /// instead of a stale empty object. Best effort.
    pub fn clear(&self, key: StoreKey) {
        if let Err(err) = self.inner.remove(key) {
            warn!(%key, error = %err, "failed to clear persisted key");
        }
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_is_none() {
        let persistence = Persistence::new(MemoryStore::default());
        let loaded: Option<Vec<String>> = persistence.load_json(StoreKey::StoreList);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let persistence = Persistence::new(MemoryStore::default());
        persistence.save_json(StoreKey::StoreList, &vec!["a".to_owned(), "b".to_owned()]);
        let loaded: Vec<String> = persistence.load_json(StoreKey::StoreList).unwrap();
        assert_eq!(loaded, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_value_loads_as_none() {
        let store = MemoryStore::default();
        store.save(StoreKey::ProductList, "{not json").unwrap();
        let persistence = Persistence::new(store);
        let loaded: Option<Vec<String>> = persistence.load_json(StoreKey::ProductList);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clear_removes_key() {
        let persistence = Persistence::new(MemoryStore::default());
        persistence.save_json(StoreKey::CurrentIdentity, &"someone");
        persistence.clear(StoreKey::CurrentIdentity);
        let loaded: Option<String> = persistence.load_json(StoreKey::CurrentIdentity);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut names: Vec<&str> = StoreKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StoreKey::ALL.len());
    }

    /// Adapter that fails every operation; the facade must swallow it all.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: StoreKey) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }

        fn save(&self, _key: StoreKey, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }

        fn remove(&self, _key: StoreKey) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn test_facade_is_fail_soft() {
        let persistence = Persistence::new(BrokenStore);
        persistence.save_json(StoreKey::StoreList, &vec![1, 2, 3]);
        let loaded: Option<Vec<i32>> = persistence.load_json(StoreKey::StoreList);
        assert!(loaded.is_none());
        persistence.clear(StoreKey::CurrentIdentity);
    }
}
