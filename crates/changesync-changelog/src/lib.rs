//! Changesync Changelog - extraction, parsing and rendering
//!
//! This crate turns the frozen version-history literal embedded in a
//! userscript into a canonical changelog document: it extracts the
//! version table from the script, parses whatever the existing changelog
//! already holds, merges the two with source precedence, and renders the
//! result sorted most-recent-first.

pub mod extract;
pub mod order;
pub mod parse;
pub mod render;
pub mod sync;

pub use extract::extract_versions;
pub use order::compare_versions;
pub use parse::parse_changelog;
pub use render::{format_release_date, render_changelog};
pub use sync::ChangelogSync;
