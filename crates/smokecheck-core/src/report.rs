//! Banner report rendering.
//!
//! A [`Report`] is the fixed sequence of lines printed for one execution:
//! a title block between separators, three labelled environment values, the
//! confirmation block, and a closing separator.

use std::fmt;
use std::io::{self, Write};

use crate::snapshot::EnvironmentSnapshot;
use crate::timestamp::format_iso8601;

/// Width of every separator line.
pub const SEPARATOR_WIDTH: usize = 50;

/// Character separator lines are made of.
pub const SEPARATOR_CHAR: char = '=';

/// Title shown between the two opening separators.
pub const TITLE: &str = "AutoAccept-Antigravity Test Script";

/// Confirmation block printed after the environment values.
pub const CONFIRMATION_LINES: [&str; 3] = [
    "[OK] Script executed successfully!",
    "[OK] If you saw Antigravity auto-click 'Run',",
    "     the extension is working correctly.",
];

const INDENT: &str = "  ";
const LABEL_WIDTH: usize = 14;

const LABEL_VERSION: &str = "Rust Version";
const LABEL_PLATFORM: &str = "Platform";
const LABEL_TIMESTAMP: &str = "Timestamp";

/// A separator line of [`SEPARATOR_WIDTH`] `=` characters.
pub fn separator() -> String {
    SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH)
}

fn field(label: &str, value: &str) -> String {
    format!("{INDENT}{label:<LABEL_WIDTH$} : {value}")
}

/// Rendered diagnostic report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    version: String,
    platform: String,
    timestamp: String,
}

impl Report {
    /// Build the report for a captured snapshot.
    ///
    /// Only the first token of the runtime version string is shown.
    pub fn from_snapshot(snapshot: &EnvironmentSnapshot) -> Self {
        Self {
            version: snapshot.short_version().to_string(),
            platform: snapshot.platform.to_string(),
            timestamp: format_iso8601(&snapshot.timestamp),
        }
    }

    /// Value shown on the version line.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Value shown on the platform line.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Value shown on the timestamp line.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// All report lines in print order, without line terminators.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            separator(),
            format!("{INDENT}{TITLE}"),
            separator(),
            String::new(),
            field(LABEL_VERSION, &self.version),
            field(LABEL_PLATFORM, &self.platform),
            field(LABEL_TIMESTAMP, &self.timestamp),
            String::new(),
        ];
        lines.extend(
            CONFIRMATION_LINES
                .iter()
                .map(|line| format!("{INDENT}{line}")),
        );
        lines.push(String::new());
        lines.push(separator());
        lines
    }

    /// Write the report to `out`, one line at a time.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::PlatformDescriptor;
    use chrono::NaiveDate;

    fn sample() -> Report {
        let snapshot = EnvironmentSnapshot {
            runtime_version: "1.85.0 (4d91de4e4 2025-02-17)".to_string(),
            platform: PlatformDescriptor::new("Linux", "6.8.0-45-generic"),
            timestamp: NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_micro_opt(14, 7, 12, 482_913)
                .unwrap(),
        };
        Report::from_snapshot(&snapshot)
    }

    #[test]
    fn test_separator_is_fifty_equals() {
        let sep = separator();
        assert_eq!(sep.len(), 50);
        assert!(sep.chars().all(|c| c == '='));
    }

    #[test]
    fn test_report_matches_expected_layout() {
        let expected = "\
==================================================
  AutoAccept-Antigravity Test Script
==================================================

  Rust Version   : 1.85.0
  Platform       : Linux 6.8.0-45-generic
  Timestamp      : 2025-03-01T14:07:12.482913

  [OK] Script executed successfully!
  [OK] If you saw Antigravity auto-click 'Run',
       the extension is working correctly.

==================================================
";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_write_to_matches_display() {
        let report = sample();
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), report.to_string());
    }

    #[test]
    fn test_accessors_expose_rendered_values() {
        let report = sample();
        assert_eq!(report.version(), "1.85.0");
        assert_eq!(report.platform(), "Linux 6.8.0-45-generic");
        assert_eq!(report.timestamp(), "2025-03-01T14:07:12.482913");
    }
}
