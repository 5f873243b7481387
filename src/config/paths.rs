//! Path management for fragseal
//!
//! ## Path Resolution Order
//!
//! 1. `FRAGSEAL_HOME` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fragseal` or `~/.config/fragseal`
//! 3. Windows: `%APPDATA%\fragseal`

use std::path::PathBuf;

use crate::error::SealError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "FRAGSEAL_HOME";

/// Manages all paths used by fragseal
#[derive(Debug, Clone)]
pub struct SealPaths {
    /// Base directory for settings and the audit log
    base_dir: PathBuf,
}

impl SealPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, SealError> {
        let base_dir = match std::env::var(HOME_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SealPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SealError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SealError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SealError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SealError::Config(format!(
                    "Could not determine home directory; set {} or HOME",
                    HOME_ENV_VAR
                ))
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("fragseal"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SealError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SealError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fragseal"))
}
