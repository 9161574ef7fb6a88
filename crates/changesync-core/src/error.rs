//! Error types for changesync

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChangesyncError
pub type Result<T> = std::result::Result<T, ChangesyncError>;

/// Main error type for changesync operations
#[derive(Debug, Error)]
pub enum ChangesyncError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Source script errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Changelog document errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while extracting the embedded version history
#[derive(Debug, Error)]
pub enum SourceError {
    /// The frozen version-history declaration is missing from the script
    #[error("Version history declaration not found in the source script")]
    ListNotFound,

    /// Extraction produced no versions, so there is nothing to synchronize
    #[error("No versions could be extracted from {0}")]
    NoVersions(PathBuf),
}

/// Changelog document errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write the rendered document
    #[error("Failed to write changelog {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ChangesyncError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
