//! # keyhold-core
//!
//! Core storage facade for Keyhold including:
//! - `CredentialStore` capability trait over the platform credential store
//! - OS keychain backend with in-memory fallback
//! - Secret values with zeroize-on-drop security

pub mod credential;
pub mod error;
pub mod store;

pub use credential::{CredentialKey, Secret, DEFAULT_ACCOUNT, DEFAULT_SERVICE};
pub use error::{Result, StoreError};
pub use store::{open_default_store, CredentialStore, KeychainStore, MemoryStore};
