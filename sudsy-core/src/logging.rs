//! Logging for sudsy binaries.
//!
//! Both the TUI and `sudsy-pick` log to a daily file under the XDG state
//! directory (see [`Config::log_path`]). Nothing goes to stdout: the TUI owns
//! the terminal and `sudsy-pick` output is meant to be piped.

use crate::config::{Config, LoggingConfig};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Start file logging at `config.level`; `RUST_LOG` wins when set.
///
/// Keep the returned guard alive for the life of the process so buffered
/// lines are flushed on exit.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard> {
    let (log_dir, file_name) = split_log_path(&Config::log_path())?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!(
        log_dir = %log_dir.display(),
        level = %config.level,
        "Logging initialized"
    );

    Ok(LoggingGuard { _guard: guard })
}

/// Route log lines to the test harness so fallback warnings show up with
/// `cargo test -- --nocapture`.
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Flushes pending log lines when dropped.
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Directory and file-name prefix for the rolling appender.
fn split_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::Config(format!("log path {:?} has no directory", path)))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Config(format!("log path {:?} has no file name", path)))?;
    Ok((dir.to_path_buf(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/tmp/state/sudsy/sudsy.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/state/sudsy"));
        assert_eq!(name, "sudsy.log");

        assert!(split_log_path(Path::new("/")).is_err());
    }
}
