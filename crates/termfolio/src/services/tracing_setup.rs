//! Tracing subscriber setup
//!
//! The terminal is owned by the UI while termfolio runs, so all diagnostics
//! go to a log file instead of stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, writing to `log_file_path`.
///
/// Filtering follows `RUST_LOG` with a DEBUG default.
pub fn init_global(log_file_path: &Path) -> Result<()> {
    let log_file = File::create(log_file_path)
        .with_context(|| format!("creating log file {}", log_file_path.display()))?;

    build_subscriber(log_file)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}

/// Build the file-logging subscriber shared by the binary and tests.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let mut env_filter =
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());
    // HTTP and TLS internals are noisy at DEBUG
    for directive in ["ureq=info", "rustls=info"] {
        if let Ok(directive) = directive.parse::<Directive>() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
