//! File logging for the terminal client.
//!
//! Stdout carries the game itself, so logs only go to
//! `<cache dir>/guess/logs/<session>/client.log`.

use std::{env, fs};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "client.log";

/// Install the global subscriber. Keep the returned guard alive for the life
/// of the process or buffered lines are lost.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(default_session_id);
    let session_log_dir = prepare_session_dir(&log_directory(), &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let filter = env_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// `RUST_LOG` directives when they parse, `info` otherwise.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Platform cache directory for logs, `/tmp/guess/logs` as a fallback.
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "guess")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/guess"))
        .join("logs")
}

/// Create (if needed) and return `<base>/<session_id>`.
pub fn prepare_session_dir(base: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = base.join(session_id);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_dir_is_created_under_base() {
        let base = tempfile::tempdir().unwrap();

        let dir = prepare_session_dir(base.path(), "session_1").unwrap();

        assert!(dir.is_dir());
        assert_eq!(dir, base.path().join("session_1"));
        // Idempotent for an existing session.
        prepare_session_dir(base.path(), "session_1").unwrap();
    }

    #[test]
    fn rust_log_level_is_honoured() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(Some("trace")).max_level_hint(), Some(LevelFilter::TRACE));
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            env_filter(Some("client=notalevel")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn generated_session_ids_are_prefixed() {
        assert!(default_session_id().starts_with("session_"));
    }
}
