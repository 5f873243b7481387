//! History and configuration commands

use clap::{Args, ValueEnum};

use crate::config::{SealPaths, Settings};
use crate::error::SealResult;
use crate::share::validate_base;

use super::context::CliContext;

/// On/off switch for boolean settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

/// Arguments for `fragseal config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set the base URL share links are built on
    #[arg(long, value_name = "URL")]
    pub link_base: Option<String>,

    /// Turn the audit log on or off
    #[arg(long, value_enum)]
    pub audit: Option<Toggle>,
}

impl ConfigArgs {
    /// Whether any setting is being changed
    pub fn has_changes(&self) -> bool {
        self.link_base.is_some() || self.audit.is_some()
    }
}

/// Handle `fragseal history`
pub fn handle_history_command(ctx: &CliContext, limit: usize) -> SealResult<()> {
    let Some(logger) = ctx.audit() else {
        println!("Audit logging is disabled.");
        println!("Run 'fragseal config --audit on' to enable it.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No operations recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

/// Apply the requested changes and persist them
///
/// The link base is checked before anything is written.
pub fn update_settings(
    paths: &SealPaths,
    current: &Settings,
    args: &ConfigArgs,
) -> SealResult<Settings> {
    let mut settings = current.clone();

    if let Some(base) = &args.link_base {
        validate_base(base)?;
        settings.link_base_url = base.clone();
    }

    if let Some(audit) = args.audit {
        settings.audit_enabled = audit.into();
    }

    settings.save(paths)?;
    tracing::info!(path = %paths.settings_file().display(), "saved settings");

    Ok(settings)
}

/// Handle `fragseal config`
pub fn handle_config_command(ctx: &CliContext, args: ConfigArgs) -> SealResult<()> {
    let settings = if args.has_changes() {
        let updated = update_settings(&ctx.paths, &ctx.settings, &args)?;
        println!("Settings saved.");
        println!();
        updated
    } else {
        ctx.settings.clone()
    };

    let settings_state = if ctx.paths.is_initialized() {
        ""
    } else {
        " (not saved yet, using defaults)"
    };

    println!("fragseal Configuration");
    println!("======================");
    println!("Base directory: {}", ctx.paths.base_dir().display());
    println!(
        "Settings file:  {}{}",
        ctx.paths.settings_file().display(),
        settings_state
    );
    println!("Audit log:      {}", ctx.paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Link base URL: {}", settings.link_base_url);
    println!("  Audit enabled: {}", settings.audit_enabled);
    println!();
    println!("Token format: base64(nonce[12] || ciphertext || tag[16])");
    println!("Cipher: AES-256-GCM, key = SHA-256(password)");
    println!("Note: a fast hash key offers no protection against offline guessing;");
    println!("      use a long, random password.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SealError;
    use tempfile::TempDir;

    #[test]
    fn test_update_persists_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().join("home"));
        let args = ConfigArgs {
            link_base: Some("https://notes.example.com/open".to_string()),
            audit: Some(Toggle::Off),
        };

        let updated = update_settings(&paths, &Settings::default(), &args).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, updated);
        assert_eq!(loaded.link_base_url, "https://notes.example.com/open");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_update_keeps_unchanged_fields() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
        let args = ConfigArgs {
            audit: Some(Toggle::Off),
            ..ConfigArgs::default()
        };

        let updated = update_settings(&paths, &Settings::default(), &args).unwrap();
        assert_eq!(updated.link_base_url, Settings::default().link_base_url);
    }

    #[test]
    fn test_invalid_link_base_not_saved() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
        let args = ConfigArgs {
            link_base: Some("not a url".to_string()),
            audit: None,
        };

        let err = update_settings(&paths, &Settings::default(), &args).unwrap_err();
        assert!(matches!(err, SealError::Link(_)));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_has_changes() {
        assert!(!ConfigArgs::default().has_changes());
        assert!(ConfigArgs {
            audit: Some(Toggle::On),
            ..ConfigArgs::default()
        }
        .has_changes());
    }
}
