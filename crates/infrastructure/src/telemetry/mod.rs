//! Logging setup
//!
//! Structured logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter; a non-empty `RUST_LOG` wins over the verbosity count
fn build_filter(verbose: u8) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(verbose))),
        _ => EnvFilter::new(log_filter_from_verbosity(verbose)),
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbose: u8) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
