//! Settings configuration loaded from TOML files.
//!
//! This module handles the configuration stored in TOML format in the XDG
//! config directory (~/.config/parley/config.toml).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::knowledge::KnowledgeFormat;

/// Default TOML configuration file content
const DEFAULT_CONFIG_TOML: &str = r#"# parley configuration file
# Located at: ~/.config/parley/config.toml

[knowledge]
# Backing text file, relative to the working directory unless absolute
path = "data.txt"
# "classified": one entry per line (Q&A lines, jokes, facts)
# "blocks": question lines ending in ':' or '?' followed by answer lines
format = "classified"

[matcher]
# Best token-overlap score must be strictly above this
# threshold = 0.3
# Containment between question and input wins immediately
# substring_short_circuit = true
# Bonus for questions starting with the input (blocks format only)
# prefix_boost = 0.5

[responder]
# Fixed seed for reproducible replies
# seed = 42

[logging]
level = "info"
"#;

/// Settings loaded from TOML configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Backing knowledge source
    #[serde(default)]
    pub knowledge: KnowledgeSourceSettings,

    /// Matcher overrides
    #[serde(default)]
    pub matcher: MatcherSettings,

    /// Reply selection settings
    #[serde(default)]
    pub responder: ResponderSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Knowledge source settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KnowledgeSourceSettings {
    /// Path to the backing text file (defaults to `data.txt`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// File layout
    #[serde(default)]
    pub format: KnowledgeFormat,
}

/// Matcher tuning overrides
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatcherSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substring_short_circuit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_boost: Option<f64>,
}

/// Responder settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResponderSettings {
    /// Seed for the reply random source. Entropy-seeded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

impl Settings {
    /// Load settings from the TOML configuration file.
    ///
    /// If the config file doesn't exist, creates it with default values.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load settings from a specific file, creating the default file first if missing.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::info!("Creating default configuration at {:?}", path);
            Self::create_default_config(path)?;
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }

    /// Serialize settings to TOML content.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the configuration file path.
    ///
    /// `PARLEY_CONFIG_DIR` wins; otherwise the XDG config directory is used.
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        if let Ok(override_dir) = std::env::var("PARLEY_CONFIG_DIR") {
            let dir = PathBuf::from(override_dir);
            return Ok(dir.join("config.toml"));
        }

        let config_dir = dirs::config_dir()
            .ok_or(SettingsError::ConfigDirNotFound)?
            .join("parley");

        Ok(config_dir.join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_TOML)?;
        Ok(())
    }

    /// Save settings to a specific file path.
    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }
}
