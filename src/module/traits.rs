//! Import system traits and errors
//!
//! Defines the loader seam used by the resolver and the error type shared by
//! discovery and loading.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Loader trait for turning a discovered file into a value
///
/// Implementations are stateless with respect to caching; memoization by
/// canonical path is done by [`LoadCache`](crate::module::loader::LoadCache).
pub trait Loader: Send + Sync {
    /// Load and parse the file at `path`
    fn load(&self, path: &Path) -> Result<Value, ImportError>;

    /// Whether this loader understands files with the given extension
    fn supports(&self, extension: &str) -> bool;
}

/// Data format of a loadable file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Json,
    Toml,
    Text,
}

impl FileFormat {
    /// Map a file extension (without the dot) to a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    /// Map a path to a format by its final extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Json => write!(f, "JSON"),
            FileFormat::Toml => write!(f, "TOML"),
            FileFormat::Text => write!(f, "text"),
        }
    }
}

/// Import system errors
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Root directory {path:?} is unavailable: {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root path {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} file {path:?}: {message}")]
    Parse {
        path: PathBuf,
        format: FileFormat,
        message: String,
    },

    #[error("No loader for file {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("Value for key {key:?} does not have the requested shape: {message}")]
    TypeMismatch { key: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ImportError {
    /// True for errors raised while building the lookup table
    pub fn is_discovery_error(&self) -> bool {
        matches!(
            self,
            ImportError::RootUnavailable { .. } | ImportError::NotADirectory(_) | ImportError::Walk(_)
        )
    }

    /// True for errors raised while loading a known file
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ImportError::Io { .. } | ImportError::Parse { .. } | ImportError::UnsupportedFormat(_)
        )
    }
}
