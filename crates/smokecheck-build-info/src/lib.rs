//! Build/version metadata for smokecheck.
#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]

/// The `SemVer` version of this build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// The git SHA emitted by the build script.
///
/// This is expected to be a 7-character hex string when available; otherwise it
/// is set to `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// True if the git SHA looks like a short hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const LONG_VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// The version string used by `--version` output.
///
/// Examples:
/// - `0.1.0 (a1b2c3d)`
/// - `0.1.0` (when git data is unavailable)
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    LONG_VERSION_WITH_SHA
} else {
    SEMVER
};

/// Placeholder vergen writes when it could not determine a value.
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Sentinel for values the build script could not resolve.
pub const UNKNOWN: &str = "unknown";

/// Semver of the `rustc` that compiled this binary, e.g. `1.85.0`.
pub const RUSTC_SEMVER: &str = known_or_unknown(option_env!("VERGEN_RUSTC_SEMVER"));

/// Commit hash of the compiler (full length as reported by rustc).
pub const RUSTC_COMMIT_HASH: &str = known_or_unknown(option_env!("VERGEN_RUSTC_COMMIT_HASH"));

/// Commit date of the compiler, e.g. `2025-02-17`.
pub const RUSTC_COMMIT_DATE: &str = known_or_unknown(option_env!("VERGEN_RUSTC_COMMIT_DATE"));

/// Target triple this binary was built for.
pub const TARGET_TRIPLE: &str = env!("SMOKECHECK_TARGET");

/// Returns true if a build-time value carries real data.
pub const fn is_known(value: &str) -> bool {
    !value.is_empty() && !str_eq(value, UNKNOWN) && !str_eq(value, VERGEN_PLACEHOLDER)
}

/// Full toolchain version string in `rustc --version` order.
///
/// `1.85.0 (4d91de4e4 2025-02-17)` when commit data is present, otherwise just
/// the semver. The semver itself may be `unknown`.
pub fn rustc_version_string() -> String {
    compose_rustc_version(RUSTC_SEMVER, RUSTC_COMMIT_HASH, RUSTC_COMMIT_DATE)
}

fn compose_rustc_version(semver: &str, hash: &str, date: &str) -> String {
    let known_hash = is_known(hash);
    // `rustc --version` abbreviates the hash to nine characters.
    let hash = hash.get(..9).unwrap_or(hash);
    match (known_hash, is_known(date)) {
        (true, true) => format!("{semver} ({hash} {date})"),
        (true, false) => format!("{semver} ({hash})"),
        (false, true) => format!("{semver} ({date})"),
        (false, false) => semver.to_string(),
    }
}

const fn known_or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) if is_known(v) => v,
        _ => UNKNOWN,
    }
}

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < 7 {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.len() != b_bytes.len() {
        return false;
    }

    let mut i = 0;
    while i < a_bytes.len() {
        if a_bytes[i] != b_bytes[i] {
            return false;
        }
        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex_detection() {
        assert!(is_short_hex("a1b2c3d"));
        assert!(is_short_hex("ABCDEF0"));
        assert!(!is_short_hex("unknown"));
        assert!(!is_short_hex("a1b2c3"));
        assert!(!is_short_hex("a1b2c3g"));
    }

    #[test]
    fn test_placeholders_are_not_known() {
        assert!(!is_known(""));
        assert!(!is_known(UNKNOWN));
        assert!(!is_known(VERGEN_PLACEHOLDER));
        assert!(is_known("1.85.0"));
    }

    #[test]
    fn test_compose_rustc_version_full() {
        assert_eq!(
            compose_rustc_version("1.85.0", "4d91de4e4", "2025-02-17"),
            "1.85.0 (4d91de4e4 2025-02-17)"
        );
    }

    #[test]
    fn test_compose_rustc_version_abbreviates_full_hash() {
        assert_eq!(
            compose_rustc_version(
                "1.85.0",
                "4d91de4e48198da2e33413efdcd9cd2cc0c46688",
                "2025-02-17"
            ),
            "1.85.0 (4d91de4e4 2025-02-17)"
        );
    }

    #[test]
    fn test_compose_rustc_version_without_commit_data() {
        assert_eq!(compose_rustc_version("1.85.0", UNKNOWN, UNKNOWN), "1.85.0");
        assert_eq!(
            compose_rustc_version("1.85.0", VERGEN_PLACEHOLDER, "2025-02-17"),
            "1.85.0 (2025-02-17)"
        );
    }

    #[test]
    fn test_long_version_starts_with_semver() {
        assert!(LONG_VERSION.starts_with(SEMVER));
    }

    #[test]
    fn test_rustc_version_string_leads_with_semver() {
        assert!(rustc_version_string().starts_with(RUSTC_SEMVER));
    }

    #[test]
    fn test_target_triple_is_set() {
        assert!(!TARGET_TRIPLE.is_empty());
    }
}
