//! Capture timestamp helpers.
//!
//! HAR `startedDateTime` values are ISO 8601 / RFC 3339 strings. These
//! helpers back the capture-window line in the progress output; a timestamp
//! that fails to parse is simply skipped there, never fatal.

use chrono::{DateTime, Utc};

/// Parse a `startedDateTime` string.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp for display.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Human-readable span between two timestamps.
pub fn span_human(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    let seconds = end.signed_duration_since(*start).num_seconds();

    if seconds < 60 {
        format!("{} seconds", seconds)
    } else if seconds < 3600 {
        format!("{} minutes", seconds / 60)
    } else {
        format!("{:.1} hours", seconds as f64 / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_timestamp() {
        let dt = parse_timestamp("2026-03-14T09:26:53.589Z").unwrap();
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.second(), 53);
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let dt = parse_timestamp("2026-03-14T10:26:53+01:00").unwrap();
        assert_eq!(format_timestamp(&dt), "2026-03-14 09:26:53 UTC");
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        assert!(parse_timestamp("not-a-timestamp").is_none());
    }

    #[test]
    fn test_span_human() {
        let start = parse_timestamp("2026-03-14T09:00:00Z").unwrap();
        let end = parse_timestamp("2026-03-14T09:02:30Z").unwrap();
        assert_eq!(span_human(&start, &end), "2 minutes");
    }
}
