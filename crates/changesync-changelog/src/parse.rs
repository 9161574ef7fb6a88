//! Parsing of the existing changelog document
//!
//! Only heading lines of the shape `## [<version>] - <text>` are recognized;
//! the trailing text of the heading is stored as the description. Body
//! paragraphs under a heading are not recovered, so descriptions spanning
//! multiple lines collapse to their heading line on the next sync unless a
//! source entry overrides them.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use changesync_core::VersionTable;

/// Matches one changelog heading line, e.g. `## [2024.11.27.01] - 2024-11-27`
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+\[([^\]]+)\]\s*-\s*(.*)$").expect("Invalid regex"));

/// Parse changelog text into a version table
pub fn parse_changelog(document: &str) -> VersionTable {
    let mut table = VersionTable::new();
    for heading in HEADING_REGEX.captures_iter(document) {
        table.insert(&heading[1], heading[2].trim());
    }

    debug!(count = table.len(), "parsed existing changelog entries");
    table
}

/// Parse an existing changelog file.
///
/// A missing file yields an empty table without a diagnostic - the first run
/// is a valid state. A read failure also yields an empty table but logs a
/// warning; the sync proceeds as if this were a first run.
pub fn parse_changelog_file(path: &Path) -> VersionTable {
    if !path.exists() {
        debug!(path = %path.display(), "no existing changelog, starting fresh");
        return VersionTable::new();
    }

    match std::fs::read_to_string(path) {
        Ok(document) => parse_changelog(&document),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read existing changelog");
            VersionTable::new()
        }
    }
}
