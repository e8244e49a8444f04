//! Tracing setup for the window and the command-line tool.
//!
//! The window logs to stdout and to `logs/toxiscope_<launch time>.log` in the
//! app directory. The CLI logs to stderr only so stdout stays machine-readable.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Launch logs kept in the logs directory, oldest removed first.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "toxiscope_";
const LOG_FILE_SUFFIX: &str = ".log";

static ACTIVE_LOG: OnceLock<(WorkerGuard, PathBuf)> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Log directory unavailable: {0}")]
    Dir(#[from] app_dirs::AppDirError),
    #[error("Log file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log file name: {0}")]
    FormatTime(#[from] time::error::Format),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the window's subscriber and return the log file of this launch.
///
/// Calling it again returns the same path without reinstalling anything.
pub fn init() -> Result<PathBuf, LoggingError> {
    if let Some((_, path)) = ACTIVE_LOG.get() {
        return Ok(path.clone());
    }

    let dir = app_dirs::logs_dir()?;
    let file_name = log_file_name(now_local_or_utc())?;
    let path = dir.join(&file_name);
    prune_launch_logs(&dir, MAX_LOG_FILES.saturating_sub(1))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, &file_name));
    let timer = local_timer();
    let subscriber = Registry::default()
        .with(env_filter("info"))
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = ACTIVE_LOG.set((guard, path.clone()));

    tracing::info!("Logging to {}", path.display());
    Ok(path)
}

/// Install a stderr-only subscriber for command-line tools. Quiet unless
/// `RUST_LOG` asks for more.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_timer(local_timer())
        .with_writer(std::io::stderr)
        .try_init();
}

/// `RUST_LOG` when set and valid, otherwise `default_directive`.
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn local_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// `toxiscope_2023-11-14_22-13-20.log`. Names sort in launch order.
fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!(
        "{LOG_FILE_PREFIX}{}{LOG_FILE_SUFFIX}",
        now.format(NAME_FORMAT)?
    ))
}

fn is_launch_log(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_SUFFIX)
}

/// Delete the oldest launch logs until at most `keep` remain.
///
/// Only files named like [`log_file_name`] are considered.
fn prune_launch_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| LoggingError::Io { path, source }
    };
    let mut names: Vec<String> = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_launch_log(name))
        .collect();
    names.sort();
    let excess = names.len().saturating_sub(keep);
    for name in names.into_iter().take(excess) {
        let path = dir.join(name);
        fs::remove_file(&path).map_err(io_error(&path))?;
    }
    Ok(())
}
