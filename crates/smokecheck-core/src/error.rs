//! Core error type.
//!
//! Wraps the probe failures and the few parse failures the domain can produce.
//! Adapters map this into their own error types (see the CLI's `CliError`).

use thiserror::Error;

use crate::ports::ProbeError;

/// Errors produced by the core domain.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An environment probe could not supply a value.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// A timestamp string was not valid ISO 8601.
    #[error("Invalid ISO 8601 timestamp '{input}': {source}")]
    Timestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
