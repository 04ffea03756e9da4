//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Resolve the filter: `RUST_LOG`, then `--verbose`, then config

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used by `--verbose`.
pub const VERBOSE_FILTER: &str = "provider_lifecycle_probe=debug";

/// Pick the filter from the environment value, verbosity and config default.
pub fn resolve_filter(env: Option<&str>, verbose: bool, configured: &str) -> EnvFilter {
    if let Some(directives) = env {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }

    let fallback = if verbose { VERBOSE_FILTER } else { configured };
    EnvFilter::try_new(fallback).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber, writing to stderr.
pub fn init_logging(verbose: bool, configured: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(resolve_filter(env.as_deref(), verbose, configured))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
