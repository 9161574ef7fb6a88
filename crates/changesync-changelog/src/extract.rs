//! Extraction of the embedded version history from the source script
//!
//! The script declares its history as a frozen object literal:
//!
//! ```text
//! const _WHATS_NEW_LIST = Object.freeze({
//!     '2024.11.27.01': 'Fixed missing update request icons',
//!     ...
//! });
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error};

use changesync_core::{SourceError, VersionTable};

/// Matches the frozen version-history declaration and captures its body
static WHATS_NEW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const\s+_WHATS_NEW_LIST\s*=\s*Object\.freeze\(\s*\{(.*?)\}\s*\);")
        .expect("Invalid regex")
});

/// Matches one `'version': 'description'` entry inside the block body.
///
/// A backslash escapes the following character inside the description, so an
/// escaped quote does not terminate the value; the closing quote must be
/// followed by a comma or the closing brace of the block.
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'([^']+)':\s*'([^'\\]*(?:\\(?s:.)[^'\\]*)*)'\s*[,}]").expect("Invalid regex")
});

/// Decode the escape sequences the script uses inside description strings.
///
/// Applied as literal substring replacements in this fixed order.
fn decode_escapes(raw: &str) -> String {
    raw.replace(r"\n", "\n")
        .replace(r"\r", "\r")
        .replace(r"\/", "/")
        .replace(r"\'", "'")
        .replace(r"\\", "\\")
}

/// Extract the version table from source script text.
///
/// Entries are collected in order of first appearance; a duplicate version
/// replaces the earlier description. Returns [`SourceError::ListNotFound`]
/// when the declaration block is absent.
pub fn extract_versions(source: &str) -> Result<VersionTable, SourceError> {
    let captures = WHATS_NEW_REGEX
        .captures(source)
        .ok_or(SourceError::ListNotFound)?;
    let body = captures.get(1).map_or("", |m| m.as_str());

    let mut table = VersionTable::new();
    for entry in ENTRY_REGEX.captures_iter(body) {
        let version = &entry[1];
        let description = decode_escapes(&entry[2]);
        table.insert(version, description);
    }

    debug!(count = table.len(), "extracted version history entries");
    Ok(table)
}

/// Extract the version table from a script file.
///
/// Read and format failures degrade to an empty table with a logged
/// diagnostic; the caller decides whether an empty result is fatal.
pub fn extract_from_file(path: &Path) -> VersionTable {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!(path = %path.display(), %err, "failed to read source script");
            return VersionTable::new();
        }
    };

    match extract_versions(&text) {
        Ok(table) => table,
        Err(err) => {
            error!(path = %path.display(), %err, "failed to extract version history");
            VersionTable::new()
        }
    }
}
