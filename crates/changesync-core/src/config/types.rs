//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for changesync
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the script carrying the embedded version history
    pub source: PathBuf,

    /// Path of the changelog document to read and rewrite
    pub changelog: PathBuf,

    /// Header block of the generated changelog
    pub header: HeaderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("main.user.js"),
            changelog: PathBuf::from("CHANGELOG.md"),
            header: HeaderConfig::default(),
        }
    }
}

/// Header block written at the top of the generated changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Product name shown in the changelog title
    pub title: String,

    /// One-line description below the title
    pub description: String,

    /// Provenance note explaining where the entries come from
    pub note: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "Userscript".to_string(),
            description: "All versions and changes of the script.".to_string(),
            note: "This file is generated automatically from the version history embedded in the script.".to_string(),
        }
    }
}
