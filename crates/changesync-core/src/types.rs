//! Version table and sync report types

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A mapping from version identifier to release-note description.
///
/// Versions are conventionally `YYYY.MM.DD.NN` strings but any identifier is
/// accepted. Each version appears at most once; inserting an existing version
/// replaces its description (last writer wins). The table carries no
/// intrinsic ordering - ordering is imposed at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTable {
    entries: BTreeMap<String, String>,
}

impl VersionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a version, replacing any previous description for it
    pub fn insert(&mut self, version: impl Into<String>, description: impl Into<String>) {
        self.entries.insert(version.into(), description.into());
    }

    /// Look up the description for a version
    pub fn get(&self, version: &str) -> Option<&str> {
        self.entries.get(version).map(String::as_str)
    }

    /// Check whether a version is present
    pub fn contains(&self, version: &str) -> bool {
        self.entries.contains_key(version)
    }

    /// Number of versions in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table holds no versions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over version identifiers
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over (version, description) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, d)| (v.as_str(), d.as_str()))
    }

    /// Overlay every entry of `other` onto this table.
    ///
    /// Entries from `other` win on key collision; versions only present in
    /// this table are preserved.
    pub fn merge_from(&mut self, other: &VersionTable) {
        for (version, description) in other.iter() {
            self.insert(version, description);
        }
    }
}

/// Summary of one synchronization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Number of versions extracted from the source script
    pub source_count: usize,

    /// Number of versions found in the pre-existing changelog
    pub existing_count: usize,

    /// Versions present in the source but absent from the pre-existing
    /// changelog, most recent first
    pub added: Vec<String>,

    /// Path of the changelog document that was written
    pub changelog_path: PathBuf,
}

impl SyncReport {
    /// Check whether this run introduced any new versions
    pub fn has_new_versions(&self) -> bool {
        !self.added.is_empty()
    }
}
