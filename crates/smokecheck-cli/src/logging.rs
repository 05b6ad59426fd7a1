//! Logging setup.
//!
//! All log output goes to stderr so stdout carries only the report.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::bootstrap::{CliConfig, LOG_FILTER_ENV};
use crate::error::CliError;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Build the filter: explicit directives win, then `--verbose`, then `warn`.
pub fn resolve_filter(config: &CliConfig) -> Result<EnvFilter, CliError> {
    match config.log_filter.as_deref() {
        Some(spec) => EnvFilter::try_new(spec)
            .map_err(|e| CliError::Config(format!("invalid {LOG_FILTER_ENV} '{spec}': {e}"))),
        None if config.verbose => Ok(EnvFilter::new(VERBOSE_FILTER)),
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(config: &CliConfig) -> Result<(), CliError> {
    let env_filter = resolve_filter(config)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .ok(); // Ignore error if already initialized

    Ok(())
}
