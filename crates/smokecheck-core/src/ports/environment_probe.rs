//! Environment probe port for version, platform and clock queries.
//!
//! This port abstracts host queries (toolchain metadata, OS information, wall
//! clock) from the core domain. Implementations live in adapters (e.g.,
//! smokecheck-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (`sysinfo`, `chrono::Local`)
//! - CLI injects the probe via main.rs

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::snapshot::PlatformDescriptor;

/// Errors that can occur while probing the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The toolchain version was not recorded at build time.
    #[error("Runtime version unavailable")]
    RuntimeVersionUnavailable,

    /// The operating system name or release could not be determined.
    #[error("Platform information unavailable: {0}")]
    PlatformUnavailable(String),
}

/// Result type for environment probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Port for querying the environment the program runs in.
///
/// # Example
///
/// ```ignore
/// use smokecheck_core::ports::EnvironmentProbe;
///
/// fn describe(probe: &dyn EnvironmentProbe) {
///     let version = probe.runtime_version();
///     let platform = probe.platform();
///     let now = probe.now();
///     // ...
/// }
/// ```
pub trait EnvironmentProbe: Send + Sync {
    /// Full version string of the runtime/toolchain.
    ///
    /// Shaped like `rustc --version` without the program name, e.g.
    /// `1.85.0 (4d91de4e4 2025-02-17)`.
    fn runtime_version(&self) -> ProbeResult<String>;

    /// Operating system name and release.
    fn platform(&self) -> ProbeResult<PlatformDescriptor>;

    /// Current local wall-clock time, without offset.
    fn now(&self) -> NaiveDateTime;
}
