//! fragseal - password-sealed text tokens for URL fragments
//!
//! Seals a short text under a password into one base64 token that holds
//! everything needed to open it except the password. The token is meant to
//! ride in the fragment of a share link, which browsers never send to a
//! server, and be opened client-side.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, sealing/opening and token framing
//! - `share`: building and reading share links
//! - `demo`: sample JSON payload
//! - `audit`: append-only operation log (never holds secrets)
//! - `config`: paths and settings
//! - `cli`: command handlers for the `fragseal` binary
//! - `error`: error types
//!
//! # Example
//!
//! ```rust
//! use fragseal::crypto::{decrypt, encrypt};
//!
//! let token = encrypt("hello world", "pw")?;
//! assert_eq!(decrypt(token.as_str(), "pw")?, "hello world");
//! assert!(decrypt(token.as_str(), "wrongpw").is_err());
//! # Ok::<(), fragseal::SealError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod demo;
pub mod error;
pub mod share;

pub use crypto::{decrypt, encrypt, Token};
pub use error::{SealError, SealResult};
