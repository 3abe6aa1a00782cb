//! Storage backends for credential persistence
//!
//! This module provides two storage backends:
//! 1. OS keychain (platform credential store)
//! 2. In-memory (test fake, and fallback when no keychain is reachable)

mod keychain;
mod memory;

pub use keychain::KeychainStore;
pub use memory::MemoryStore;

use tracing::warn;

use crate::credential::{CredentialKey, Secret};
use crate::error::Result;

/// Capability trait for secure credential storage
pub trait CredentialStore: Send + Sync {
    /// Store a secret under the given key, overwriting any existing entry
    fn save(&self, key: &CredentialKey, secret: &[u8]) -> Result<()>;

    /// Retrieve the secret for a key, or `None` when nothing is stored
    fn read(&self, key: &CredentialKey) -> Result<Option<Secret>>;

    /// Remove the entry for a key; a missing entry is not an error
    fn delete(&self, key: &CredentialKey) -> Result<()>;

    /// Get a human-readable name for this storage backend
    fn backend_name(&self) -> &'static str;
}

/// Open the default store: the platform keychain when reachable,
/// otherwise the in-memory fallback.
pub fn open_default_store(force_memory: bool) -> Box<dyn CredentialStore> {
    if force_memory {
        return Box::new(MemoryStore::new());
    }

    let keychain = KeychainStore::new();
    if keychain.is_available() {
        Box::new(keychain)
    } else {
        warn!("Keychain not reachable - falling back to in-memory store");
        Box::new(MemoryStore::new())
    }
}
