//! Settings and configuration utilities.
//!
//! This module provides functionality to read settings from
//! $HOME/.toolbelt/settings.json and use them as a fallback for environment
//! variables, e.g. for overriding the external tool executables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// Settings loaded from $HOME/.toolbelt/settings.json.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default settings
        if !path.exists() {
            return Ok(Settings {
                env: HashMap::new(),
            });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".toolbelt").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        // Try to get from actual environment first
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }
}

/// Returns an environment variable with fallback to settings.
///
/// An unreadable settings file is not fatal here: the environment is still
/// consulted, and the lookup only fails when neither source has the key.
pub fn get_env_var(key: &str) -> Result<String> {
    let settings = Settings::load().unwrap_or_else(|err| {
        warn!("ignoring unreadable settings file: {err:#}");
        Settings {
            env: HashMap::new(),
        }
    });

    settings
        .get_env_var(key)
        .ok_or_else(|| anyhow::anyhow!("Environment variable not found: {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn settings_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let settings_json = r#"{
            "env": {
                "DISPLAYPLACER_BIN": "/opt/homebrew/bin/displayplacer",
                "TOOLBELT_FZF_BIN": "/usr/local/bin/fzf"
            }
        }"#;
        fs::write(&settings_path, settings_json).unwrap();

        let settings = Settings::load_from_path(&settings_path).unwrap();

        assert_eq!(
            settings.env.get("DISPLAYPLACER_BIN").unwrap(),
            "/opt/homebrew/bin/displayplacer"
        );
        assert_eq!(
            settings.env.get("TOOLBELT_FZF_BIN").unwrap(),
            "/usr/local/bin/fzf"
        );
    }

    #[test]
    fn missing_settings_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn env_var_takes_precedence_over_settings() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let settings_json = r#"{"env": {"TOOLBELT_TEST_VAR": "from_settings"}}"#;
        fs::write(&settings_path, settings_json).unwrap();

        let settings = Settings::load_from_path(&settings_path).unwrap();

        env::set_var("TOOLBELT_TEST_VAR", "from_env");
        assert_eq!(
            settings.get_env_var("TOOLBELT_TEST_VAR").unwrap(),
            "from_env"
        );

        env::remove_var("TOOLBELT_TEST_VAR");
        assert_eq!(
            settings.get_env_var("TOOLBELT_TEST_VAR").unwrap(),
            "from_settings"
        );
    }

    #[test]
    fn free_get_env_var_reads_environment() {
        env::set_var("TOOLBELT_FREE_LOOKUP_VAR", "from_env");
        assert_eq!(get_env_var("TOOLBELT_FREE_LOOKUP_VAR").unwrap(), "from_env");

        env::remove_var("TOOLBELT_FREE_LOOKUP_VAR");
        assert!(get_env_var("TOOLBELT_FREE_LOOKUP_VAR").is_err());
    }
}
