//! Environment probe implementation for smokecheck-runtime.
//!
//! This module provides the `HostProbe` which implements `EnvironmentProbe`
//! from smokecheck-core. Toolchain data comes from build-time metadata; OS
//! data and the clock are read from the running host.

mod platform;
mod toolchain;

use chrono::{Local, NaiveDateTime};
use smokecheck_core::ports::{EnvironmentProbe, ProbeResult};
use smokecheck_core::snapshot::PlatformDescriptor;

use platform::detect_platform;
use toolchain::rustc_version;

/// Default implementation of `EnvironmentProbe`.
///
/// # Example
///
/// ```ignore
/// use smokecheck_runtime::HostProbe;
/// use smokecheck_core::ports::EnvironmentProbe;
///
/// let probe = HostProbe::new();
/// let platform = probe.platform()?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl HostProbe {
    /// Create a new host probe.
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentProbe for HostProbe {
    fn runtime_version(&self) -> ProbeResult<String> {
        rustc_version()
    }

    fn platform(&self) -> ProbeResult<PlatformDescriptor> {
        detect_platform()
    }

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
