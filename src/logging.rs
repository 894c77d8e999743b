//! File-based structured logging.
//!
//! The TUI owns the terminal, so nothing may write to stdout while it runs.
//! All log output goes to a JSON-formatted daily-rolling file under the
//! platform data directory. The tracker core emits `tracing` events
//! directly; standard `log` macro events from the TUI and config layers are
//! bridged into the same subscriber.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Resolved log directory: `<data dir>/easyinit/logs`.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("easyinit").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize logging for TUI mode.
///
/// Sets up a non-blocking daily-rolling JSON file logger and redirects `log`
/// crate events to `tracing`. No stdout layer — the terminal belongs to
/// ratatui while the app runs.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application so buffered logs are flushed on shutdown.
pub fn init_tui() -> WorkerGuard {
    let log_dir = log_dir();
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {e}");
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "easyinit.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(file_layer).init();

    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {e}");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_ends_with_crate_path() {
        let dir = log_dir();
        let s = dir.to_string_lossy();
        assert!(s.contains("easyinit") || dir == PathBuf::from("logs"));
        assert!(s.ends_with("logs"));
    }
}
