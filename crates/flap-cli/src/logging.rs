//! File-based tracing setup.
//!
//! The TUI owns the terminal, so logs go to a daily-rolled file under
//! `$FLAPBOARD_HOME/logs/` instead of stderr. Filter with the
//! `FLAPBOARD_LOG` env var (standard `EnvFilter` syntax, default `info`).

use std::fs;

use anyhow::{Context, Result};
use flap_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber, writing to the logs directory.
///
/// The returned guard flushes buffered log lines on drop; hold it for the
/// process lifetime.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create logs dir at {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "flapboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("FLAPBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
