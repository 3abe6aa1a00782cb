//! In-memory storage backend
//!
//! Holds credentials in a plain map for the lifetime of the process.
//! Serves as the test fake for the presentation layer, and as the
//! fallback when no platform keychain is reachable.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use super::CredentialStore;
use crate::credential::{CredentialKey, Secret};
use crate::error::Result;

/// In-memory storage backend
#[derive(Default)]
pub struct MemoryStore {
    /// Map of key -> secret bytes
    entries: RwLock<HashMap<CredentialKey, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn save(&self, key: &CredentialKey, secret: &[u8]) -> Result<()> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        entries.insert(key.clone(), secret.to_vec());

        debug!("Stored credential in memory: {}/{}", key.service, key.account);
        Ok(())
    }

    fn read(&self, key: &CredentialKey) -> Result<Option<Secret>> {
        let entries = self.entries.read().expect("store lock poisoned");
        Ok(entries.get(key).map(|bytes| Secret::new(bytes.clone())))
    }

    fn delete(&self, key: &CredentialKey) -> Result<()> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        entries.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "In-Memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_read_returns_exact_bytes() {
        let store = MemoryStore::new();
        let key = CredentialKey::default();

        store.save(&key, b"hunter2").unwrap();

        let secret = store.read(&key).unwrap().unwrap();
        assert_eq!(secret.as_bytes(), b"hunter2");
    }

    #[test]
    fn save_overwrites_existing_entry() {
        let store = MemoryStore::new();
        let key = CredentialKey::default();

        store.save(&key, b"old").unwrap();
        store.save(&key, b"new").unwrap();

        let secret = store.read(&key).unwrap().unwrap();
        assert_eq!(secret.as_bytes(), b"new");
    }

    #[test]
    fn read_missing_entry_is_none() {
        let store = MemoryStore::new();
        let key = CredentialKey::default();

        assert!(store.read(&key).unwrap().is_none());
    }

    #[test]
    fn delete_removes_entry() {
        let store = MemoryStore::new();
        let key = CredentialKey::default();

        store.save(&key, b"hunter2").unwrap();
        store.delete(&key).unwrap();

        assert!(store.read(&key).unwrap().is_none());
    }

    #[test]
    fn delete_missing_entry_is_ok() {
        let store = MemoryStore::new();
        let key = CredentialKey::default();

        assert!(store.delete(&key).is_ok());
    }

    #[test]
    fn keys_are_distinct_by_pair() {
        let store = MemoryStore::new();

        store
            .save(&CredentialKey::new("password", "yamamoto"), b"one")
            .unwrap();
        store
            .save(&CredentialKey::new("password", "other"), b"two")
            .unwrap();

        let secret = store
            .read(&CredentialKey::new("password", "yamamoto"))
            .unwrap()
            .unwrap();
        assert_eq!(secret.as_bytes(), b"one");
    }
}
