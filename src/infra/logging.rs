//! Diagnostic output on stderr.
//!
//! Stdout carries the spinner itself, so every log line goes to stderr.
//! Verbosity comes from `RUST_LOG` and defaults to warnings only.

use std::io::{self, IsTerminal};

use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "warn";

/// Builds the filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_DIRECTIVES`] when they are missing or do not parse.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(build_filter(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
