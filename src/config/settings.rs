use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SaltError};

/// User configuration, loaded from `.salt.toml`.
///
/// Every field has a sensible default so salt works out-of-the-box
/// without any config file at all.  Key sizes and Argon2 costs are not
/// configurable: they are part of the file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Allow the unsalted password-only mode (default: true).
    #[serde(default = "default_allow_password_only")]
    pub allow_password_only: bool,

    /// Ask for a new password twice when encrypting (default: true).
    #[serde(default = "default_confirm_password")]
    pub confirm_password: bool,

    /// Log filter used when `SALT_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_allow_password_only() -> bool {
    true
}

fn default_confirm_password() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_password_only: default_allow_password_only(),
            confirm_password: default_confirm_password(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".salt.toml";

    /// Load settings from `<dir>/.salt.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SaltError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Fail if password-only mode has been switched off.
    pub fn ensure_password_only_allowed(&self) -> Result<()> {
        if self.allow_password_only {
            Ok(())
        } else {
            Err(SaltError::PasswordOnlyDisabled)
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
