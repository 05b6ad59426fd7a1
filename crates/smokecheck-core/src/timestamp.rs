//! ISO 8601 formatting for naive local datetimes.
//!
//! Output follows the extended format `YYYY-MM-DDTHH:MM:SS[.ffffff]` with
//! microsecond precision. The fractional part is dropped entirely when the
//! microsecond field is zero, so `12:00:00` never renders as `12:00:00.000000`.

use chrono::{NaiveDateTime, Timelike};

use crate::error::CoreError;

const WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const WITH_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format `ts` as ISO 8601 with microsecond precision.
pub fn format_iso8601(ts: &NaiveDateTime) -> String {
    // Leap-second nanos (>= 1e9) still count as a non-zero fraction.
    let micros = ts.nanosecond() / 1_000;
    if micros == 0 {
        ts.format(WHOLE_SECONDS).to_string()
    } else {
        ts.format(WITH_MICROS).to_string()
    }
}

/// Parse an ISO 8601 datetime without offset, with or without a fraction.
pub fn parse_iso8601(input: &str) -> Result<NaiveDateTime, CoreError> {
    input
        .trim()
        .parse::<NaiveDateTime>()
        .map_err(|source| CoreError::Timestamp {
            input: input.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[test]
    fn test_format_with_microseconds() {
        assert_eq!(
            format_iso8601(&at(14, 7, 12, 482_913)),
            "2025-03-01T14:07:12.482913"
        );
    }

    #[test]
    fn test_format_pads_small_fractions() {
        assert_eq!(format_iso8601(&at(0, 0, 1, 7)), "2025-03-01T00:00:01.000007");
    }

    #[test]
    fn test_format_whole_seconds_omits_fraction() {
        assert_eq!(format_iso8601(&at(12, 0, 0, 0)), "2025-03-01T12:00:00");
    }

    #[test]
    fn test_format_truncates_sub_microsecond_precision() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_nano_opt(9, 30, 0, 123_456_789)
            .unwrap();
        assert_eq!(format_iso8601(&ts), "2025-03-01T09:30:00.123456");
    }

    #[test]
    fn test_parse_accepts_both_shapes() {
        assert_eq!(
            parse_iso8601("2025-03-01T14:07:12.482913").unwrap(),
            at(14, 7, 12, 482_913)
        );
        assert_eq!(parse_iso8601("2025-03-01T12:00:00").unwrap(), at(12, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_iso8601("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
