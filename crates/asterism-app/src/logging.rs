//! Tracing subscriber setup.
//!
//! The terminal renderer owns stdout, so while it runs logs go to a file.
//! Otherwise they go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log output goes.
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file (~/.cache/asterism/asterism.log).
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("asterism")
        .join("asterism.log")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the whole run, or buffered file output
/// is lost.
pub fn init(target: &LogTarget) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Stderr => {
            fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path.parent().unwrap_or(Path::new("."));
            std::fs::create_dir_all(dir).with_context(|| format!("creating log dir {}", dir.display()))?;
            let file_name = path
                .file_name()
                .context("log file path has no file name")?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
    }
}
