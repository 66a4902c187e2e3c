use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "worddee-backend.log";

/// Per-statement sqlx logging is noise at the default level.
const QUIET_SQLX: &str = "sqlx=warn";

/// Flushes the practice log file until dropped; hold it for the process lifetime.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// `RUST_LOG`-style filter, falling back to `info` when unparsable. sqlx is
/// held at `warn` unless the level names it explicitly.
pub fn build_env_filter(log_level: &str) -> EnvFilter {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    if log_level.contains("sqlx") {
        return filter;
    }
    match QUIET_SQLX.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Stdout always; a daily-rolling file under `log_dir` as well when given.
pub fn init_tracing(log_level: &str, log_dir: Option<&Path>) -> Option<FileLogGuard> {
    let (file_layer, guard) = match log_dir.map(open_log_dir) {
        Some(Some((writer, guard))) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(FileLogGuard { _guard: guard }))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(build_env_filter(log_level))
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();

    guard
}

fn open_log_dir(dir: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("failed to create log directory {}: {err}", dir.display());
        return None;
    }
    let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
    Some(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_quiets_sqlx_by_default() {
        let filter = build_env_filter("info").to_string();
        assert!(filter.contains("sqlx=warn"), "{filter}");
    }

    #[test]
    fn test_filter_keeps_explicit_sqlx_level() {
        let filter = build_env_filter("info,sqlx=debug").to_string();
        assert!(!filter.contains("sqlx=warn"), "{filter}");
    }

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        let filter = build_env_filter("info,worddee=loudest").to_string();
        assert!(filter.contains("info"), "{filter}");
        assert!(!filter.contains("loudest"), "{filter}");
    }

    #[test]
    fn test_open_log_dir_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("logs").join("practice");
        assert!(open_log_dir(&nested).is_some());
        assert!(nested.is_dir());
    }
}
