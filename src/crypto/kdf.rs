//! SHA-512 key derivation from the user's secret.

use sha2::{Digest, Sha512};

/// Length of the derived cipher key (256 bits).
pub const KEY_LENGTH: usize = 32;

/// Key material derived from a secret.
///
/// The raw secret is never kept; only the first 256 bits of its SHA-512
/// digest are.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    key: [u8; KEY_LENGTH],
}

impl SecretKey {
    /// Derive a key from a secret. The empty secret is allowed.
    pub fn derive(secret: &str) -> Self {
        let digest = Sha512::digest(secret.as_bytes());
        let mut key = [0u8; KEY_LENGTH];
        key.copy_from_slice(&digest[..KEY_LENGTH]);
        Self { key }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}
