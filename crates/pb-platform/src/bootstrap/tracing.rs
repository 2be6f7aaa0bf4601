//! Tracing configuration for Pickleboard
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! When `[logging] directory` is set, a second non-ANSI layer writes a daily
//! rolling file through a non-blocking appender.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use pb_core::config::PicklingConfig;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is unset.
///
/// An explicit `level` from configuration applies to every workspace crate;
/// otherwise debug builds log at debug and release builds at info.
fn build_filter_directives(level: &str, is_dev: bool) -> Vec<String> {
    let level = match level.trim() {
        "" if is_dev => "debug",
        "" => "info",
        explicit => explicit,
    };

    vec![
        "warn".to_string(),
        format!("pickleboard={level}"),
        format!("pb_core={level}"),
        format!("pb_app={level}"),
        format!("pb_platform={level}"),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once, before the first use case runs. `RUST_LOG` overrides the
/// configured level.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(config: &PicklingConfig) -> anyhow::Result<()> {
    let directives = build_filter_directives(&config.log_level, is_development());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    let file_writer = if config.log_directory.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&config.log_directory) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, continuing with stderr: {err}");
                None
            }
        }
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::daily(directory, "pickleboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
