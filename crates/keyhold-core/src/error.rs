//! Error types for keyhold-core

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("Keychain is not available on this system")]
    Unavailable,

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("Stored secret is not valid UTF-8")]
    NotUtf8,
}
