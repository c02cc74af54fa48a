//! Configuration management for autoimport
//!
//! Handles configuration loading and validation for the import table.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::module::registry::{WalkOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};

/// Import table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportsConfig {
    /// Root directory to index (None = current working directory)
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Directory names never descended into
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Extensions (without the dot) of files to index
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Index every regular file regardless of extension
    #[serde(default = "default_false")]
    pub accept_all_files: bool,

    /// Descend into symlinked directories
    #[serde(default = "default_true")]
    pub follow_links: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info", "autoimport=debug"); RUST_LOG takes precedence
    #[serde(default)]
    pub filter: Option<String>,

    /// Emit JSON lines (requires the `json-logging` feature)
    #[serde(default)]
    pub json_format: bool,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            root: None,
            excluded_dirs: default_excluded_dirs(),
            extensions: default_extensions(),
            accept_all_files: false,
            follow_links: true,
            logging: None,
        }
    }
}

impl ImportsConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ImportsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ImportsConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, picking the format from the file extension
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some("toml") => Self::from_toml_file(path),
            _ => Err(anyhow::anyhow!(
                "Unsupported config file {:?}: expected a .json or .toml extension",
                path
            )),
        }
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.extensions.is_empty() && !self.accept_all_files {
            return Err(anyhow::anyhow!(
                "extensions must not be empty unless accept_all_files is set"
            ));
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.contains('.') {
                return Err(anyhow::anyhow!(
                    "invalid extension {:?}: give the bare extension, e.g. \"json\"",
                    ext
                ));
            }
        }

        for dir in &self.excluded_dirs {
            if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
                return Err(anyhow::anyhow!(
                    "invalid excluded directory {:?}: must be a single path segment",
                    dir
                ));
            }
        }

        Ok(())
    }

    /// Walk options for the directory walker
    pub fn to_walk_options(&self) -> WalkOptions {
        WalkOptions {
            excluded_dirs: self.excluded_dirs.clone(),
            extensions: self.extensions.clone(),
            accept_all_files: self.accept_all_files,
            follow_links: self.follow_links,
        }
    }
}
