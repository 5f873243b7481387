//! Audit entry data structures
//!
//! An entry records what was done and whether it worked. It never holds a
//! password, key, plaintext or token, only the token's encoded length.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A payload was sealed into a token
    Seal,
    /// A token was opened
    Open,
    /// A share link was built
    Link,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Seal => write!(f, "SEAL"),
            Operation::Open => write!(f, "OPEN"),
            Operation::Link => write!(f, "LINK"),
        }
    }
}

/// Whether the audited operation succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "ok"),
            Outcome::Failure => write!(f, "failed"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// How it ended
    pub outcome: Outcome,

    /// Length of the encoded token involved, in bytes
    pub token_bytes: usize,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(operation: Operation, outcome: Outcome, token_bytes: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            outcome,
            token_bytes,
        }
    }

    /// Entry for a successful seal
    pub fn sealed(token_bytes: usize) -> Self {
        Self::new(Operation::Seal, Outcome::Success, token_bytes)
    }

    /// Entry for an open attempt
    pub fn opened(token_bytes: usize, success: bool) -> Self {
        let outcome = if success {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        Self::new(Operation::Open, outcome, token_bytes)
    }

    /// Entry for a built share link
    pub fn linked(token_bytes: usize) -> Self {
        Self::new(Operation::Link, Outcome::Success, token_bytes)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} ({} token bytes)",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.outcome,
            self.token_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Seal.to_string(), "SEAL");
        assert_eq!(Operation::Open.to_string(), "OPEN");
        assert_eq!(Operation::Link.to_string(), "LINK");
    }

    #[test]
    fn test_opened_outcomes() {
        assert_eq!(AuditEntry::opened(40, true).outcome, Outcome::Success);
        assert_eq!(AuditEntry::opened(40, false).outcome, Outcome::Failure);
        assert_eq!(AuditEntry::opened(40, false).operation, Operation::Open);
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::sealed(52);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"seal\""));
        assert!(json.contains("\"outcome\":\"success\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Seal);
        assert_eq!(deserialized.token_bytes, 52);
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::opened(64, false).format_human_readable();
        assert!(formatted.contains("OPEN"));
        assert!(formatted.contains("failed"));
        assert!(formatted.contains("64 token bytes"));
    }
}
