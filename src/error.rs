//! Custom error types for fragseal
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Message shown for every decryption failure, whatever the cause
pub const DECRYPTION_FAILED: &str = "Decryption failed: invalid password or corrupted token";

/// The main error type for fragseal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// The AEAD primitive or the random source could not be used
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// A token could not be opened.
    ///
    /// Wrong password, tampering, truncation, bad base64 and invalid UTF-8
    /// all end up here with no further detail.
    #[error("{}", DECRYPTION_FAILED)]
    Decryption,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Share link could not be built or parsed
    #[error("Link error: {0}")]
    Link(String),

    /// Demo record did not survive a seal/open round trip
    #[error("Demo error: {0}")]
    Demo(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),
}

impl SealError {
    /// Check if this is the collapsed decryption failure
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fragseal operations
pub type SealResult<T> = Result<T, SealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SealError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_decryption_error_is_opaque() {
        let err = SealError::Decryption;
        assert_eq!(err.to_string(), DECRYPTION_FAILED);
        assert_eq!(format!("{:?}", err), "Decryption");
        assert!(err.is_decryption());
    }

    #[test]
    fn test_encryption_error_is_not_decryption() {
        let err = SealError::Encryption("cipher init".into());
        assert!(!err.is_decryption());
        assert_eq!(err.to_string(), "Encryption error: cipher init");
    }

    #[test]
    fn test_demo_error_display() {
        let err = SealError::Demo("record changed".into());
        assert_eq!(err.to_string(), "Demo error: record changed");
        assert!(!err.is_decryption());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let seal_err: SealError = io_err.into();
        assert!(matches!(seal_err, SealError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let seal_err: SealError = json_err.into();
        assert!(matches!(seal_err, SealError::Json(_)));
    }
}
