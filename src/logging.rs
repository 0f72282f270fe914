//! Tracing subscriber setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Installs a stderr subscriber filtered by `MODULE_INFO_LOG`
///
/// Buffered lines are flushed when the returned guard is dropped, so keep it alive
/// until the run finishes.
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(LOG_ENV).ok()))
        .with_writer(writer)
        .with_target(false)
        .init();

    guard
}

fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
