//! Tracing setup: stdout plus one `placement_<timestamp>.log` file per launch.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};
use tracing::level_filters::LevelFilter;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs::{self, AppDirError};
use crate::config::{self, AppSettings};

const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "placement_";
const LOG_FILE_EXT: &str = ".log";

const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
const LINE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error(transparent)]
    AppDir(#[from] AppDirError),
    #[error("Log file I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log file timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Returns the log file path of this launch.
///
/// A second call returns `Ok(None)` without touching the subscriber.
pub fn init() -> Result<Option<PathBuf>, LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(None);
    }
    let dir = app_dirs::logs_dir()?;
    let file_name = log_file_name(local_now())?;
    let (writer, guard) = tracing_appender::non_blocking(rolling::never(&dir, &file_name));
    prune_old_logs(&dir, MAX_LOG_FILES)?;

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer: fmt::time::OffsetTime<BorrowedFormatItem<'static>> =
        fmt::time::OffsetTime::new(offset, LINE_STAMP.into());
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()))
        .with(fmt::layer().with_ansi(false).with_timer(timer).with_writer(writer));
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    let path = dir.join(file_name);
    tracing::info!(log_file = %path.display(), "Logging initialized");
    Ok(Some(path))
}

/// Paths a launch resolved, recorded once settings are known.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPaths {
    pub config: Option<PathBuf>,
    pub model: PathBuf,
}

impl LaunchPaths {
    pub fn resolve(settings: &AppSettings) -> Self {
        Self {
            config: config::config_path().ok(),
            model: settings.model.resolved_path(),
        }
    }

    pub fn log(&self) {
        let config = self
            .config
            .as_deref()
            .map_or_else(|| "<unavailable>".to_string(), |path| path.display().to_string());
        tracing::info!(
            config_path = %config,
            model_path = %self.model.display(),
            model_exists = self.model.is_file(),
            "Launch paths resolved"
        );
    }
}

fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    Ok(format!("{LOG_FILE_PREFIX}{}{LOG_FILE_EXT}", now.format(FILE_STAMP)?))
}

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Keep the newest `keep` launch logs. Names sort chronologically, so the
/// oldest files come first.
fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| LoggingError::Io { path, source }
    };
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err(dir))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && is_launch_log(path))
        .collect();
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    for path in &logs[..excess] {
        fs::remove_file(path).map_err(io_err(path))?;
    }
    Ok(())
}

fn is_launch_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_EXT))
}
