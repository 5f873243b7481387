//! Shared state for CLI command handlers

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{SealPaths, Settings};
use crate::error::SealResult;

/// Paths, settings and the optional audit logger for one invocation
pub struct CliContext {
    pub paths: SealPaths,
    pub settings: Settings,
    audit: Option<AuditLogger>,
}

impl CliContext {
    /// Build a context from resolved paths, loading settings from disk
    pub fn load(paths: SealPaths) -> SealResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self::with_settings(paths, settings))
    }

    /// Build a context from already loaded settings
    pub fn with_settings(paths: SealPaths, settings: Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            paths,
            settings,
            audit,
        }
    }

    /// The audit logger, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an entry if auditing is on
    ///
    /// A failing audit write never fails the operation itself.
    pub fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!("Failed to write audit entry: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ctx = CliContext::load(paths).unwrap();

        ctx.record(AuditEntry::sealed(40));

        let logger = ctx.audit().unwrap();
        assert_eq!(logger.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_record_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let ctx = CliContext::with_settings(paths.clone(), settings);

        ctx.record(AuditEntry::sealed(40));

        assert!(ctx.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
