//! Durable key-value backends for cart persistence.
//!
//! The cart store serializes each tenant's lines to a deterministic
//! namespaced key, so different tenants' carts coexist without collision in
//! the same backend. Backends only move strings; (de)serialization and all
//! corruption handling live in the cart store, which treats unreadable
//! values as an empty cart.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tidemark_core::StoreId;

/// Storage errors. The cart store logs and swallows these - a broken cart
/// backend must never take down checkout.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The durable storage key for a tenant's cart.
///
/// Deterministic and namespaced by store ID: `storefront_cart__<store-id>`.
#[must_use]
pub fn storage_key(store_id: &StoreId) -> String {
    format!("storefront_cart__{store_id}")
}

/// A durable string key-value backend for cart data.
pub trait CartStorage: Send + Sync {
    /// Read the value at `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON file per key under a directory.
#[derive(Debug)]
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }
}

/// In-memory storage for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryCartStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, for assertions on persistence behavior.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Seed a raw value, e.g. a corrupt payload.
    pub fn seed(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CartStorage for MemoryCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// No-storage-context backend: reads are empty, writes are no-ops.
///
/// Used when the process has no durable storage available. The cart store
/// still keeps in-memory state for the process lifetime; it just isn't
/// durable.
#[derive(Debug, Default)]
pub struct DetachedCartStorage;

impl DetachedCartStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CartStorage for DetachedCartStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_namespaced_per_tenant() {
        let a = storage_key(&StoreId::new("harbor"));
        let b = storage_key(&StoreId::new("outlet"));
        assert_eq!(a, "storefront_cart__harbor");
        assert_ne!(a, b);
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path().join("carts"));

        assert!(storage.read("storefront_cart__a").unwrap().is_none());
        storage.write("storefront_cart__a", "[1,2,3]").unwrap();
        assert_eq!(
            storage.read("storefront_cart__a").unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn file_storage_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path());

        storage.write("k", "old").unwrap();
        storage.write("k", "new").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn detached_storage_reads_empty_and_swallows_writes() {
        let storage = DetachedCartStorage::new();
        storage.write("k", "v").unwrap();
        assert!(storage.read("k").unwrap().is_none());
    }
}
