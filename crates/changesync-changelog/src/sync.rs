//! The synchronization engine
//!
//! Sequences the pipeline: extract the version table from the source script,
//! parse the existing changelog, merge with source precedence, render, and
//! write the document wholesale.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use changesync_core::config::Config;
use changesync_core::{ChangelogError, Result, SourceError, SyncReport};

use crate::order::compare_versions;
use crate::{extract, parse, render};

/// Changelog synchronizer
#[derive(Debug)]
pub struct ChangelogSync {
    config: Config,
    base_dir: PathBuf,
}

impl ChangelogSync {
    /// Create a synchronizer; relative configured paths resolve against
    /// `base_dir`
    pub fn new(config: Config, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Resolved path of the source script
    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.source)
    }

    /// Resolved path of the changelog document
    pub fn changelog_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.changelog)
    }

    /// Run one synchronization pass.
    ///
    /// An empty extraction result is fatal - there is nothing to synchronize
    /// and no file is written. A missing or unreadable changelog is not: the
    /// run proceeds as a first run. The rendered document is fully computed
    /// in memory and written in a single operation.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<SyncReport> {
        let source_path = self.source_path();
        let changelog_path = self.changelog_path();
        info!(
            source = %source_path.display(),
            changelog = %changelog_path.display(),
            "synchronizing changelog"
        );

        let source = extract::extract_from_file(&source_path);
        if source.is_empty() {
            return Err(SourceError::NoVersions(source_path).into());
        }
        info!(count = source.len(), "versions found in source script");

        let existing = parse::parse_changelog_file(&changelog_path);
        info!(count = existing.len(), "versions found in existing changelog");

        let mut merged = existing.clone();
        merged.merge_from(&source);

        let document = render::render_changelog(&merged, &self.config.header);
        write_changelog(&changelog_path, &document)?;

        let mut added: Vec<String> = source
            .versions()
            .filter(|version| !existing.contains(version))
            .map(String::from)
            .collect();
        added.sort_by(|a, b| compare_versions(b, a));

        debug!(added = added.len(), "synchronization complete");
        Ok(SyncReport {
            source_count: source.len(),
            existing_count: existing.len(),
            added,
            changelog_path,
        })
    }
}

/// Replace the changelog document in one write
fn write_changelog(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document).map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
