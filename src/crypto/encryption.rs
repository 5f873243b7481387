//! AES-256-GCM sealing and opening of text payloads
//!
//! Each seal draws a fresh random nonce, so sealing the same text twice gives
//! two different tokens. Nothing here detects nonce reuse: uniqueness rests
//! entirely on the quality of the random source.

use aes_gcm::aead::rand_core::{CryptoRng, RngCore};
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use zeroize::Zeroize;

use crate::error::{SealError, SealResult};

use super::key_derivation::{derive_key, DerivedKey};
use super::token::{Token, NONCE_SIZE};

fn cipher_for(key: &DerivedKey) -> SealResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Seal a text payload under a password
///
/// Uses the operating system's random source for the nonce.
pub fn encrypt(plaintext: &str, password: &str) -> SealResult<Token> {
    encrypt_with_rng(plaintext, password, &mut OsRng)
}

/// Seal a text payload under a password, drawing the nonce from `rng`
pub fn encrypt_with_rng<R>(plaintext: &str, password: &str, rng: &mut R) -> SealResult<Token>
where
    R: RngCore + CryptoRng,
{
    let key = derive_key(password);
    encrypt_with_key_and_rng(plaintext, &key, rng)
}

/// Seal a text payload under an already derived key
pub fn encrypt_with_key_and_rng<R>(
    plaintext: &str,
    key: &DerivedKey,
    rng: &mut R,
) -> SealResult<Token>
where
    R: RngCore + CryptoRng,
{
    let cipher = cipher_for(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rng.try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| SealError::Encryption(format!("Random source failed: {}", e)))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| SealError::Encryption(format!("Encryption failed: {}", e)))?;

    let token = Token::pack(&nonce_bytes, &ciphertext);
    tracing::debug!(
        plaintext_bytes = plaintext.len(),
        token_bytes = token.len(),
        "sealed payload"
    );

    Ok(token)
}

/// Open a token with a password
///
/// Every failure, whether a wrong password, a tampered or truncated token,
/// bad base64 or non-UTF-8 plaintext, is reported as
/// [`SealError::Decryption`]. No partial plaintext is ever returned.
pub fn decrypt(token: &str, password: &str) -> SealResult<String> {
    let key = derive_key(password);
    decrypt_with_key(&Token::from(token), &key)
}

/// Open a token with an already derived key
pub fn decrypt_with_key(token: &Token, key: &DerivedKey) -> SealResult<String> {
    let result = open(token, key);
    if result.is_err() {
        tracing::debug!("{}", crate::error::DECRYPTION_FAILED);
    }
    result
}

fn open(token: &Token, key: &DerivedKey) -> SealResult<String> {
    let parts = token.parts()?;

    let cipher = cipher_for(key).map_err(|_| SealError::Decryption)?;
    let nonce = Nonce::from_slice(&parts.nonce);

    let plaintext = cipher
        .decrypt(nonce, parts.ciphertext.as_slice())
        .map_err(|_| SealError::Decryption)?;

    String::from_utf8(plaintext).map_err(|e| {
        let mut bytes = e.into_bytes();
        bytes.zeroize();
        SealError::Decryption
    })
}
