//! Tracing setup for the pagekit binary.
//!
//! Logs go to stderr so that command output on stdout stays clean.

use std::io;

use anyhow::Context;
use pk_core::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Build the filter directives from config.
///
/// The configured filter applies to the whole process; the widget crates
/// follow it unless it names them explicitly.
fn build_filter_directives(logging: &LoggingConfig) -> String {
    let base = logging.filter.trim();
    if base.is_empty() {
        "info".to_string()
    } else {
        base.to_string()
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter.
///
/// ## Errors / 错误
///
/// Returns `Err` if the configured filter is invalid or a subscriber is
/// already registered.
pub fn init_tracing_subscriber(logging: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(build_filter_directives(logging))
            .context("Invalid logging.filter in config")?,
    };

    // "2025-01-15 10:30:45.123 INFO [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
