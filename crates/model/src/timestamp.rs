use chrono::{DateTime, NaiveDateTime, Utc};

/// Fallback format for timestamps that carry no explicit offset.
/// Fractional seconds are tolerated, a trailing `Z` is stripped first.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an ISO-8601 timestamp into UTC.
///
/// Accepts RFC 3339 (including the `Z` designator) and the naive
/// `YYYY-MM-DDTHH:MM:SS` shape some API variants emit. Anything else is
/// `None`; a malformed timestamp is treated as absent, never as an error.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), NAIVE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_zulu_designator() {
        let ts = parse_timestamp("2025-03-01T12:30:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2025-03-01T12:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn parses_naive_fallback() {
        let ts = parse_timestamp("2025-03-01T12:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_naive_with_fractional_seconds() {
        let ts = parse_timestamp("2025-03-01T12:30:00.500").unwrap();
        assert_eq!(ts.timestamp_millis() % 1000, 500);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2025-13-99").is_none());
    }
}
