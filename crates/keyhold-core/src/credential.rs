//! Credential identity and secret value types

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, StoreError};

/// Service half of the fixed platform key pair
pub const DEFAULT_SERVICE: &str = "password";

/// Account half of the fixed platform key pair
pub const DEFAULT_ACCOUNT: &str = "yamamoto";

/// Identifies a credential in the platform store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CredentialKey {
    /// Service name (e.g., "password")
    pub service: String,
    /// Account name the entry is stored under
    pub account: String,
}

impl CredentialKey {
    /// Create a key for the given service/account pair
    pub fn new(service: &str, account: &str) -> Self {
        Self {
            service: service.to_string(),
            account: account.to_string(),
        }
    }
}

impl Default for CredentialKey {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE, DEFAULT_ACCOUNT)
    }
}

/// Secret bytes read back from a store - automatically zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Wrap raw secret bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Borrow the raw bytes (use carefully)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decode the secret as UTF-8, reporting invalid bytes as an error
    pub fn into_string(mut self) -> Result<String> {
        String::from_utf8(std::mem::take(&mut self.bytes)).map_err(|_| StoreError::NotUtf8)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_fixed_pair() {
        let key = CredentialKey::default();
        assert_eq!(key.service, "password");
        assert_eq!(key.account, "yamamoto");
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = Secret::new(b"hunter2".to_vec());
        let rendered = format!("{:?}", secret);
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn secret_decodes_utf8() {
        let secret = Secret::new("hunter2".as_bytes().to_vec());
        assert_eq!(secret.into_string().unwrap(), "hunter2");
    }

    #[test]
    fn secret_rejects_invalid_utf8() {
        let secret = Secret::new(vec![0xff, 0xfe, 0xfd]);
        assert!(matches!(secret.into_string(), Err(StoreError::NotUtf8)));
    }
}
