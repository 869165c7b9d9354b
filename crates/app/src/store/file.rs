//! Filesystem adapter: one JSON file per key under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError, StoreKey};

/// Key-value store backed by flat files in a single directory.
///
/// Writes are whole-file replacements, so the last completed write wins per
/// key - the contract the rest of the application assumes.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.load(StoreKey::StoreList).unwrap().is_none());
    }

    #[test]
    fn test_save_load_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save(StoreKey::StoreList, "[1,2]").unwrap();
        assert_eq!(
            store.load(StoreKey::StoreList).unwrap().as_deref(),
            Some("[1,2]")
        );

        store.remove(StoreKey::StoreList).unwrap();
        assert!(store.load(StoreKey::StoreList).unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.remove(StoreKey::CurrentIdentity).unwrap();
    }

    #[test]
    fn test_keys_do_not_collide_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.save(StoreKey::StoreList, "\"stores\"").unwrap();
        store.save(StoreKey::ProductList, "\"products\"").unwrap();
        assert_eq!(
            store.load(StoreKey::StoreList).unwrap().as_deref(),
            Some("\"stores\"")
        );
        assert_eq!(
            store.load(StoreKey::ProductList).unwrap().as_deref(),
            Some("\"products\"")
        );
    }

    #[test]
    fn test_open_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonFileStore::open(&nested).unwrap();
        store.save(StoreKey::ChatThreads, "{}").unwrap();
        assert!(nested.join("chat_threads.json").exists());
    }
}
