//! Configuration management for OL.
//!
//! Parses `ol.toml` configuration files with serde. CLI settings can be
//! applied on top of a loaded config via [`CliSettings`]; only non-None
//! values override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "ol.toml";

/// Fallback glob patterns used when no patterns are given or the given
/// ones match nothing.
pub const DEFAULT_FALLBACK_PATTERNS: [&str; 4] = [
    "**/*.outline.yaml",
    "**/*.outline.yml",
    "__outlines__/**/*.yaml",
    "__outlines__/**/*.yml",
];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs output directory.
    pub docs_dir: Option<PathBuf>,
    /// Override sidebars file path.
    pub sidebars_file: Option<PathBuf>,
    /// Override fallback glob patterns.
    pub fallback_patterns: Option<Vec<String>>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory generated topic documents are written under.
    pub docs_dir: PathBuf,
    /// Path of the generated sidebars module.
    pub sidebars_file: PathBuf,
    /// Glob patterns tried when the primary patterns match nothing.
    pub fallback_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            sidebars_file: PathBuf::from("sidebars.js"),
            fallback_patterns: DEFAULT_FALLBACK_PATTERNS
                .iter()
                .map(|&p| p.to_owned())
                .collect(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing, unreadable, or
    /// not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or broken.
    ///
    /// The degradation is logged; a misspelled config file should not
    /// silently change build behavior without a trace.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "No configuration file; using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Unusable configuration file; using defaults");
                Self::default()
            }
        }
    }

    /// Apply CLI overrides; only non-None settings take effect.
    pub fn apply_cli(&mut self, settings: CliSettings) {
        if let Some(docs_dir) = settings.docs_dir {
            self.docs_dir = docs_dir;
        }
        if let Some(sidebars_file) = settings.sidebars_file {
            self.sidebars_file = sidebars_file;
        }
        if let Some(fallback_patterns) = settings.fallback_patterns {
            self.fallback_patterns = fallback_patterns;
        }
    }

    /// Write this configuration as TOML to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when serialization or the write fails.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
