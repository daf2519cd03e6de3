//! File logging
//!
//! The terminal belongs to the UI, so all tracing output goes to a daily
//! rolling file under the config directory.

use crate::config::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the background log writer alive; flushes on drop.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `None` when no log
/// directory is available, in which case events are discarded.
pub fn init_tracing(config: &Config) -> Option<LogGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = Config::log_dir()?;
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!("failed to create log directory {}: {err}", log_dir.display());
        return None;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "english-hub.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Some(LogGuard { _guard: guard })
}
