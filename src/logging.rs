use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "adaptive-practice.log";

/// Keeps the non-blocking file writer alive; drop it last.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn file_logging_enabled() -> bool {
    std::env::var("ENABLE_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

fn file_log_dir() -> Option<PathBuf> {
    if !file_logging_enabled() {
        return None;
    }
    let log_dir = PathBuf::from(std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()));
    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => Some(log_dir),
        Err(err) => {
            eprintln!("failed to create log directory {}: {err}", log_dir.display());
            None
        }
    }
}

/// Installs the global subscriber. Console output goes to stderr so stdout
/// stays free for the practice transcript.
pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let (file_layer, guard) = match file_log_dir() {
        Some(dir) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(FileLogGuard { _guard: guard }))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
