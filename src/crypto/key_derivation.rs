//! Key derivation from passwords
//!
//! Derives the AES-256 key by hashing the UTF-8 password bytes with SHA-256.
//!
//! A single fast hash offers no resistance to offline brute-force against a
//! captured token. Tokens are only as strong as the password behind them.
//! Moving to a salted, memory-hard function means a new token layout with an
//! explicit version marker.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the derived key in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// A derived encryption key
///
/// Whoever holds this can open every token sealed under the same password,
/// so it is never cloned, printed or serialized. The bytes are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an encryption key from a password
///
/// Deterministic and total: every string, the empty one included, maps to
/// exactly one key.
pub fn derive_key(password: &str) -> DerivedKey {
    let key: [u8; KEY_SIZE] = Sha256::digest(password.as_bytes()).into();
    DerivedKey { key }
}
