//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The concrete environment probe (via
//! smokecheck-runtime) is instantiated here and handed to handlers as a
//! trait object.

use std::path::PathBuf;
use std::sync::Arc;

use smokecheck_core::ports::EnvironmentProbe;
use smokecheck_runtime::HostProbe;
use tracing::debug;

use crate::parser::Cli;

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// `--verbose` was passed.
    pub verbose: bool,
    /// Filter directives from `RUST_LOG`, if set and non-blank.
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Resolve config from parsed arguments and the process environment.
    ///
    /// Call [`load_dotenv`] first so `.env` values are visible here.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::from_parts(cli.verbose, std::env::var(LOG_FILTER_ENV).ok())
    }

    /// Resolve config from explicit values.
    pub fn from_parts(verbose: bool, log_filter: Option<String>) -> Self {
        Self {
            verbose,
            log_filter: log_filter.filter(|spec| !spec.trim().is_empty()),
        }
    }
}

/// Load a `.env` file from the working directory or its ancestors, if any.
///
/// Returns the path that was loaded. A missing or unreadable file is not an
/// error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Fully composed context for CLI handlers.
pub struct CliContext {
    /// Resolved configuration.
    pub config: CliConfig,
    /// Source of version, platform and time.
    pub probe: Arc<dyn EnvironmentProbe>,
}

/// Wire the host probe into a [`CliContext`].
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(?config, "Bootstrapping CLI context");
    CliContext {
        config,
        probe: Arc::new(HostProbe::new()),
    }
}
