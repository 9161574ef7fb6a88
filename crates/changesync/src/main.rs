//! changesync - keeps a changelog document in sync with the version history
//! embedded in a userscript

mod exit_codes;
mod output;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use changesync_changelog::ChangelogSync;
use changesync_core::config::load_config_or_default;

fn main() -> ExitCode {
    let _guard = init_tracing();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            output::error(&format!("cannot determine working directory: {err}"));
            return ExitCode::from(exit_codes::ERROR);
        }
    };

    // Relative paths in the config resolve against the config file's
    // directory; with no config file everything resolves against cwd.
    let (config, config_path) = load_config_or_default(&cwd);
    let base_dir = config_path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(cwd);

    output::info("synchronizing changelog");

    let sync = ChangelogSync::new(config, base_dir);
    match sync.run() {
        Ok(report) => {
            output::print_report(&report);
            ExitCode::from(exit_codes::SUCCESS)
        }
        Err(err) => {
            output::error(&err.to_string());
            ExitCode::from(exit_codes::for_error(&err))
        }
    }
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn)
/// - File: always debug-level JSON to ~/.changesync/logs/
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "changesync.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".changesync").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
