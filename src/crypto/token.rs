//! Token framing
//!
//! A token is the standard padded base64 encoding of
//! `nonce (12) || ciphertext (N) || tag (16)`. There is no version byte and no
//! length prefix: the first 12 decoded bytes are always the nonce.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SealError, SealResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// An encoded, self-contained sealed payload
///
/// Carries no secret on its own and may be copied freely. Construction does
/// not validate anything; opening does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

/// A decoded token split into its nonce and ciphertext-with-tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts {
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Token {
    /// Pack a nonce and ciphertext into a token
    pub fn pack(nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Self {
        let mut framed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        framed.extend_from_slice(nonce);
        framed.extend_from_slice(ciphertext);
        Self(STANDARD.encode(framed))
    }

    /// Decode and split the token
    ///
    /// Fails with the collapsed decryption error when the text is not base64
    /// or is too short to hold a nonce.
    pub fn parts(&self) -> SealResult<TokenParts> {
        let decoded = STANDARD
            .decode(self.0.trim())
            .map_err(|_| SealError::Decryption)?;

        if decoded.len() < NONCE_SIZE {
            return Err(SealError::Decryption);
        }

        let (nonce_bytes, ciphertext) = decoded.split_at(NONCE_SIZE);
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);

        Ok(TokenParts {
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Get the encoded text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token and return the encoded text
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the encoded text in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Token {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
