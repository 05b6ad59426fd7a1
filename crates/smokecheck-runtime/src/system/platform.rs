//! Platform detection utilities.

use smokecheck_core::ports::{ProbeError, ProbeResult};
use smokecheck_core::snapshot::PlatformDescriptor;
use sysinfo::System;
use tracing::debug;

/// Operating system family of the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    MacOS,
    Windows,
    FreeBSD,
    Other(&'static str),
}

impl Os {
    /// Map a `std::env::consts::OS` value to an OS family.
    pub fn from_target(os: &'static str) -> Self {
        match os {
            "linux" | "android" => Self::Linux,
            "macos" | "ios" => Self::MacOS,
            "windows" => Self::Windows,
            "freebsd" => Self::FreeBSD,
            other => Self::Other(other),
        }
    }

    /// uname-style system name (`Darwin` for macOS, as `uname -s` reports it).
    pub fn system_name(self) -> String {
        match self {
            Self::Linux => "Linux".to_string(),
            Self::MacOS => "Darwin".to_string(),
            Self::Windows => "Windows".to_string(),
            Self::FreeBSD => "FreeBSD".to_string(),
            Self::Other(raw) => capitalize(raw),
        }
    }
}

/// Detect the current operating system.
pub fn detect_os() -> Os {
    Os::from_target(std::env::consts::OS)
}

/// Detect OS name and release for the running host.
pub fn detect_platform() -> ProbeResult<PlatformDescriptor> {
    let os = detect_os();
    let raw_release = raw_release(os).ok_or_else(|| {
        ProbeError::PlatformUnavailable(format!("{} release not reported", os.system_name()))
    })?;

    let release = normalize_release(&raw_release).ok_or_else(|| {
        ProbeError::PlatformUnavailable(format!("{} release is empty", os.system_name()))
    })?;
    if release != raw_release {
        debug!(raw = %raw_release, normalized = %release, "Trimmed OS release to a single token");
    }

    let platform = PlatformDescriptor::new(os.system_name(), release);
    debug!(%platform, "Detected platform");
    Ok(platform)
}

/// Release string as the host reports it, before normalization.
fn raw_release(os: Os) -> Option<String> {
    match os {
        // `os_version` is the marketing version ("11 (22631)"); kernel_version
        // is only the build number on Windows.
        Os::Windows => System::os_version(),
        _ => System::kernel_version(),
    }
}

/// Reduce a release string to its first whitespace-delimited token.
fn normalize_release(raw: &str) -> Option<String> {
    raw.split_whitespace().next().map(str::to_string)
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
