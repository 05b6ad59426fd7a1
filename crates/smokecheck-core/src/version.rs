//! Version string helpers.

/// First whitespace-delimited token of `full`.
///
/// ```rust
/// use smokecheck_core::first_token;
///
/// assert_eq!(first_token("1.85.0 (4d91de4e4 2025-02-17)"), Some("1.85.0"));
/// assert_eq!(first_token("  "), None);
/// ```
pub fn first_token(full: &str) -> Option<&str> {
    full.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_plain_semver() {
        assert_eq!(first_token("1.85.0"), Some("1.85.0"));
    }

    #[test]
    fn test_first_token_skips_leading_whitespace() {
        assert_eq!(first_token("\t 1.85.0-nightly (abc 2025-01-01)"), Some("1.85.0-nightly"));
    }

    #[test]
    fn test_first_token_empty() {
        assert_eq!(first_token(""), None);
    }
}
