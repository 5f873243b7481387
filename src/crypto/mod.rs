//! Cryptographic core of fragseal
//!
//! SHA-256 password hashing feeds AES-256-GCM; nonce and ciphertext travel
//! together as one base64 token.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;
pub mod token;

pub use encryption::{
    decrypt, decrypt_with_key, encrypt, encrypt_with_key_and_rng, encrypt_with_rng,
};
pub use key_derivation::{derive_key, DerivedKey, KEY_SIZE};
pub use secure_memory::SecureString;
pub use token::{Token, TokenParts, NONCE_SIZE, TAG_SIZE};
