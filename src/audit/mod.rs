//! Audit logging system for fragseal
//!
//! Records every seal, open and link operation in an append-only JSON Lines
//! file. Entries carry a timestamp, the operation, its outcome and the token
//! length. Nothing secret is ever written.
//!
//! # Example
//!
//! ```rust,ignore
//! use fragseal::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::sealed(token.len()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation, Outcome};
pub use logger::AuditLogger;
