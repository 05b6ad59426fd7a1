//! Values gathered from the environment for a single report.

use std::fmt;

use chrono::NaiveDateTime;

use crate::ports::{EnvironmentProbe, ProbeError, ProbeResult};
use crate::version::first_token;

/// Operating system name plus release, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// uname-style system name (`Linux`, `Darwin`, `Windows`, ...).
    pub name: String,
    /// Release string; a single token, e.g. `6.8.0-45-generic`.
    pub release: String,
}

impl PlatformDescriptor {
    pub fn new(name: impl Into<String>, release: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release: release.into(),
        }
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.release)
    }
}

/// Everything the report needs, read once per execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    /// Full runtime version string (may contain build details after the semver).
    pub runtime_version: String,
    pub platform: PlatformDescriptor,
    pub timestamp: NaiveDateTime,
}

impl EnvironmentSnapshot {
    /// First whitespace-delimited token of the runtime version string.
    pub fn short_version(&self) -> &str {
        first_token(&self.runtime_version).unwrap_or_default()
    }
}

/// Read version, platform and time from `probe`.
///
/// Queries happen in report order; the clock is read last so the timestamp is
/// as close as possible to the moment the report is printed.
pub fn capture(probe: &dyn EnvironmentProbe) -> ProbeResult<EnvironmentSnapshot> {
    let runtime_version = probe.runtime_version()?;
    if first_token(&runtime_version).is_none() {
        return Err(ProbeError::RuntimeVersionUnavailable);
    }

    let platform = probe.platform()?;
    if platform.name.trim().is_empty() {
        return Err(ProbeError::PlatformUnavailable(
            "empty operating system name".to_string(),
        ));
    }
    if platform.release.trim().is_empty() {
        return Err(ProbeError::PlatformUnavailable(
            "empty operating system release".to_string(),
        ));
    }

    Ok(EnvironmentSnapshot {
        runtime_version,
        platform,
        timestamp: probe.now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct StubProbe {
        version: ProbeResult<String>,
        platform: ProbeResult<PlatformDescriptor>,
    }

    impl EnvironmentProbe for StubProbe {
        fn runtime_version(&self) -> ProbeResult<String> {
            self.version.clone()
        }

        fn platform(&self) -> ProbeResult<PlatformDescriptor> {
            self.platform.clone()
        }

        fn now(&self) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_micro_opt(14, 7, 12, 482_913)
                .unwrap()
        }
    }

    fn stub(version: &str, name: &str, release: &str) -> StubProbe {
        StubProbe {
            version: Ok(version.to_string()),
            platform: Ok(PlatformDescriptor::new(name, release)),
        }
    }

    #[test]
    fn test_capture_reads_all_values() {
        let probe = stub("1.85.0 (4d91de4e4 2025-02-17)", "Linux", "6.8.0");
        let snapshot = capture(&probe).unwrap();

        assert_eq!(snapshot.runtime_version, "1.85.0 (4d91de4e4 2025-02-17)");
        assert_eq!(snapshot.short_version(), "1.85.0");
        assert_eq!(snapshot.platform.to_string(), "Linux 6.8.0");
        assert_eq!(snapshot.timestamp, probe.now());
    }

    #[test]
    fn test_capture_rejects_blank_version() {
        let probe = stub("   ", "Linux", "6.8.0");
        assert_eq!(
            capture(&probe).unwrap_err(),
            ProbeError::RuntimeVersionUnavailable
        );
    }

    #[test]
    fn test_capture_rejects_blank_release() {
        let probe = stub("1.85.0", "Linux", "");
        assert!(matches!(
            capture(&probe),
            Err(ProbeError::PlatformUnavailable(_))
        ));
    }

    #[test]
    fn test_capture_propagates_probe_errors() {
        let probe = StubProbe {
            version: Ok("1.85.0".to_string()),
            platform: Err(ProbeError::PlatformUnavailable("no kernel".to_string())),
        };
        assert_eq!(
            capture(&probe).unwrap_err(),
            ProbeError::PlatformUnavailable("no kernel".to_string())
        );
    }
}
