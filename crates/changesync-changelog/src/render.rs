//! Changelog document rendering

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use changesync_core::config::HeaderConfig;
use changesync_core::VersionTable;

use crate::order::sorted_desc;

/// Matches a `YYYY.MM.DD` prefix on a version identifier
static DATE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\.(\d{2})\.(\d{2})").expect("Invalid regex"));

/// Derive the heading date from a version identifier.
///
/// A `YYYY.MM.DD` prefix is reformatted as `YYYY-MM-DD`; any other version
/// is displayed verbatim.
pub fn format_release_date(version: &str) -> String {
    match DATE_PREFIX_REGEX.captures(version) {
        Some(date) => format!("{}-{}-{}", &date[1], &date[2], &date[3]),
        None => version.to_string(),
    }
}

/// Render a version table as the full changelog document.
///
/// Pure: identical inputs always produce identical output text. Versions are
/// emitted in descending order, most recent first.
pub fn render_changelog(table: &VersionTable, header: &HeaderConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Changelog - {}\n\n", header.title));
    output.push_str(&format!("{}\n\n", header.description));
    output.push_str(&format!("> **Note** : {}\n\n", header.note));
    output.push_str("---\n\n");

    for (version, description) in sorted_desc(table) {
        output.push_str(&format!(
            "## [{}] - {}\n",
            version,
            format_release_date(version)
        ));
        output.push_str(&format!("\n{}\n\n", description));
    }

    debug!(
        version_count = table.len(),
        output_len = output.len(),
        "changelog rendered"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_prefix_reformatted() {
        assert_eq!(format_release_date("2024.11.27.01"), "2024-11-27");
        assert_eq!(format_release_date("2024.11.27"), "2024-11-27");
    }

    #[test]
    fn test_non_conforming_version_verbatim() {
        assert_eq!(format_release_date("beta-preview"), "beta-preview");
        // Single-digit segments do not match the fixed-width prefix
        assert_eq!(format_release_date("2024.1.5"), "2024.1.5");
    }

    #[test]
    fn test_render_full_document() {
        let mut table = VersionTable::new();
        table.insert("2024.11.26.01", "Initial release.");
        table.insert("2024.11.27.01", "Fixed icons.");

        let output = render_changelog(&table, &HeaderConfig::default());

        assert!(output.starts_with("# Changelog - Userscript\n\n"));
        assert!(output.contains("> **Note** : "));
        assert!(output.contains("---\n\n"));
        assert!(output.contains("## [2024.11.27.01] - 2024-11-27\n\nFixed icons.\n\n"));

        // Descending order: the newer entry comes first
        let newer = output.find("[2024.11.27.01]").unwrap();
        let older = output.find("[2024.11.26.01]").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_render_heading_for_non_date_version() {
        let mut table = VersionTable::new();
        table.insert("beta-preview", "Preview build.");

        let output = render_changelog(&table, &HeaderConfig::default());
        assert!(output.contains("## [beta-preview] - beta-preview\n"));
    }

    #[test]
    fn test_multiline_description_rendered_in_full() {
        let mut table = VersionTable::new();
        table.insert("2024.11.27.01", "First line.\nSecond line.");

        let output = render_changelog(&table, &HeaderConfig::default());
        assert!(output.contains("\nFirst line.\nSecond line.\n\n"));
    }
}
