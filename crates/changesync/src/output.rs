//! Console output formatting

use console::style;

use changesync_core::SyncReport;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Print the run summary: counts, the written path, and either the list of
/// newly added versions or a no-change notice
pub fn print_report(report: &SyncReport) {
    success(&format!(
        "{} versions found in the source script",
        report.source_count
    ));
    success(&format!(
        "{} versions found in the existing changelog",
        report.existing_count
    ));
    success(&format!(
        "changelog synchronized: {}",
        style(report.changelog_path.display()).cyan()
    ));

    if report.has_new_versions() {
        println!();
        println!(
            "{}",
            style(format!("New versions added ({}):", report.added.len())).bold()
        );
        for version in &report.added {
            println!("  - {}", style(version).green());
        }
    } else {
        println!();
        info("no new versions detected");
    }
}
