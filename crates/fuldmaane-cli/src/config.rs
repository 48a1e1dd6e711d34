//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use fuldmaane_domain::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Timezone that decides where "today" begins and ends.
pub const DEFAULT_TIMEZONE: &str = "Europe/Copenhagen";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone used to resolve the current date
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Language of rendered text
    #[serde(default)]
    pub locale: Locale,

    /// Display settings
    #[serde(default)]
    pub settings: Settings,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// How many dates `upcoming` lists by default
    #[serde(default = "default_upcoming_count")]
    pub upcoming_count: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain terminal lines
    Text,
    /// JSON view model
    Json,
    /// HTML page fragment
    Html,
    /// Verdict only
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".fuldmaane").join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration, falling back to defaults when there is no usable file.
    ///
    /// A report needs no config file, so an unknown location or a broken file
    /// only costs a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            warn!("no configuration path, using defaults");
            return Self::default();
        };
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), "ignoring unreadable config: {}", e);
            Self::default()
        })
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the configured timezone.
    pub fn tz(&self) -> Result<chrono_tz::Tz> {
        crate::clock::parse_timezone(&self.timezone)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            locale: Locale::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            upcoming_count: default_upcoming_count(),
        }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_upcoming_count() -> usize {
    6
}
