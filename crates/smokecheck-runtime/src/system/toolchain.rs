//! Toolchain version lookup.
//!
//! The "runtime" of a compiled binary is the compiler that produced it, so
//! the version comes from build-time metadata rather than a live `rustc`.

use smokecheck_build_info::{RUSTC_SEMVER, is_known, rustc_version_string};
use smokecheck_core::ports::{ProbeError, ProbeResult};
use tracing::debug;

/// Full rustc version string, e.g. `1.85.0 (4d91de4e4 2025-02-17)`.
pub fn rustc_version() -> ProbeResult<String> {
    if !is_known(RUSTC_SEMVER) {
        return Err(ProbeError::RuntimeVersionUnavailable);
    }

    let version = rustc_version_string();
    debug!(%version, "Resolved rustc version");
    Ok(version)
}
