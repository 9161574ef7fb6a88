//! Changesync Core - foundational types for the changelog synchronizer
//!
//! This crate provides the error taxonomy, configuration loading, and the
//! version table data model shared by the changesync crates.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ChangelogError, ChangesyncError, ConfigError, Result, SourceError};
pub use types::{SyncReport, VersionTable};
