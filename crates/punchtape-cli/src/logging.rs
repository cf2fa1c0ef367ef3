//! Tracing subscriber setup.
//!
//! The filter comes from `--log-level`, never from the environment. While
//! the viewer owns the terminal, logs only go to `--log-file`; headless
//! modes fall back to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Where log lines end up.
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// No subscriber; the terminal belongs to the viewer.
    Off,
}

pub fn init(target: LogTarget<'_>, level: &str) -> Result<()> {
    let filter = || {
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
    };

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter()?)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("install log subscriber: {e}")),
        LogTarget::File(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("log path '{}' has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let writer = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir)
                .with_context(|| format!("open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter()?)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))
        }
    }
}
