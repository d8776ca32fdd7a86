//! Tracing bootstrap shared by the binaries.
//!
//! Logs always go to a daily-rolling file; a coloured stdout layer is added
//! when `log_to_stdout` is set.

use std::{fs, io, path::Path};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Directive used when `log_level` is not a valid filter.
pub const DEFAULT_DIRECTIVE: &str = "api=info";

/// Installs the global subscriber and returns the file writer's guard.
///
/// Keep the guard alive for the lifetime of the process; dropping it flushes
/// and stops the background writer.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(
    log_dir: impl AsRef<Path>,
    log_file: &str,
    log_level: &str,
    log_to_stdout: bool,
) -> Result<WorkerGuard, TryInitError> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir).ok();

    let file_appender = rolling::daily(log_dir, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(guard)
}

/// Parses `log_level` as an `EnvFilter`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
