use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// Configuration for the application.
///
/// Read from a hand-authored TOML file under the user's platform
/// config directory. The only knob is an optional path to a roster
/// TOML file; when unset the built-in roster is used, so a fresh
/// install behaves exactly like having no config at all.
///
/// Storage location:
/// - Linux: $XDG_CONFIG_HOME/folio/config.toml or
///   $HOME/.config/folio/config.toml
/// - macOS: $HOME/Library/Application Support/folio/config.toml
/// - Windows: %APPDATA%\folio\config.toml
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub roster_path: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the configuration directory path under the user's
    /// platform-appropriate config directory.
    pub fn config_dir() -> Result<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = env::var("APPDATA") {
                return Ok(PathBuf::from(appdata).join("folio"));
            }
            if let Ok(userprofile) = env::var("USERPROFILE") {
                return Ok(PathBuf::from(userprofile).join(".config").join("folio"));
            }
            return Err(anyhow!(
                "Unable to determine config directory (missing APPDATA/USERPROFILE)"
            ));
        }

        #[cfg(target_os = "macos")]
        {
            if let Ok(home) = env::var("HOME") {
                return Ok(PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
                    .join("folio"));
            }
            return Err(anyhow!("Unable to determine config directory (missing HOME)"));
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let config_dir = if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
                PathBuf::from(xdg_config_home)
            } else if let Ok(home) = env::var("HOME") {
                PathBuf::from(home).join(".config")
            } else {
                return Err(anyhow!(
                    "Unable to determine config directory (missing XDG_CONFIG_HOME/HOME)"
                ));
            };
            Ok(config_dir.join("folio"))
        }
    }

    /// Returns the full config file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration from disk. If the file does not exist,
    /// returns a default configuration.
    pub fn load() -> Result<Self> {
        let config_file = Self::config_file()?;

        if !config_file.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_file).with_context(|| {
            format!("Failed to read config file: {}", config_file.display())
        })?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Resolves the roster for this session: the configured roster
    /// file when one is set, otherwise the built-in team data.
    pub fn resolve_roster(&self) -> Result<Roster> {
        match &self.roster_path {
            Some(path) => {
                log::debug!("loading roster from {}", path.display());
                Roster::load(path).with_context(|| {
                    format!("Failed to load roster file: {}", path.display())
                })
            }
            None => Ok(Roster::builtin()),
        }
    }
}
