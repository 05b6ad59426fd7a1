//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use smokecheck_core::{CoreError, ProbeError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The environment could not be queried.
    #[error("Environment probe failed: {0}")]
    Probe(String),

    /// Argument parsing error (clap's rendered message).
    #[error("{0}")]
    Arguments(String),

    /// IO error (stdout closed, broken pipe, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Probe(_) => 71,    // EX_OSERR
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<ProbeError> for CliError {
    fn from(err: ProbeError) -> Self {
        CliError::Probe(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Probe(probe_err) => probe_err.into(),
            CoreError::Timestamp { .. } => CliError::Probe(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
