//! File-based logging.
//!
//! The TUI owns the terminal, so tracing output goes to a daily rolling file
//! under the user data directory instead of stdout.

use crate::config::{APP_NAME, data_dir};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_DIR: &str = "logs";
const DEFAULT_FILTER: &str = "serenata=debug,symphonia=warn,warn";

/// Initialize the logging system.
///
/// Logs are written to `<data_dir>/serenata/logs/serenata.YYYY-MM-DD.log`.
/// `RUST_LOG` overrides the default filter. The returned guard flushes the
/// writer when dropped and must be held for the lifetime of the program.
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = data_dir()?.join(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, APP_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(dir = %log_dir.display(), "Logging initialized");

    Ok(guard)
}
