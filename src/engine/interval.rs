//! Downtime interval parsing and classification against a clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::errors::AppError;

/// Literal delimiter between the two timestamps of a `date_range`.
pub const RANGE_DELIMITER: &str = " to ";

/// Position of a downtime window relative to a point in time.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DowntimeStatus {
    Upcoming,
    Ongoing,
    Completed,
}

/// Naive formats accepted besides RFC 3339; these are what the scheduling
/// form's date picker emits. Naive times are taken as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Parse a single timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(AppError::MalformedRange(format!(
        "unparsable timestamp {:?}",
        value
    )))
}

/// Split a `date_range` on the literal `" to "` delimiter and parse both
/// halves. Fails unless the split yields exactly two parsable timestamps.
pub fn parse_range(date_range: &str) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let mut parts = date_range.split(RANGE_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => Ok((parse_timestamp(start)?, parse_timestamp(end)?)),
        _ => Err(AppError::MalformedRange(format!(
            "expected \"<start>{}<end>\", got {:?}",
            RANGE_DELIMITER, date_range
        ))),
    }
}

/// Classify a window against an injected `now`.
///
/// Both boundaries count as ongoing. An inverted range (end < start) is
/// classified by the same comparisons; callers must not read meaning into
/// the result.
pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> DowntimeStatus {
    if now < start {
        DowntimeStatus::Upcoming
    } else if now <= end {
        DowntimeStatus::Ongoing
    } else {
        DowntimeStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> DateTime<Utc> {
        parse_timestamp(value).expect("test timestamp should parse")
    }

    #[test]
    fn test_parse_range_rfc3339() {
        let (start, end) =
            parse_range("2024-01-01T00:00:00Z to 2024-01-02T00:00:00Z").unwrap();
        assert_eq!(start, ts("2024-01-01T00:00:00Z"));
        assert_eq!(end, ts("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn test_parse_range_rejoins_equivalently() {
        let raw = "2024-01-01T00:00:00Z to 2024-01-02T00:00:00Z";
        let (start, end) = parse_range(raw).unwrap();
        let rejoined = format!(
            "{}{}{}",
            start.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            RANGE_DELIMITER,
            end.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        );
        assert_eq!(rejoined, raw);
    }

    #[test]
    fn test_parse_range_naive_formats() {
        let (start, end) = parse_range("2024-06-01 08:00 to 2024-06-01 17:30").unwrap();
        assert_eq!(start, ts("2024-06-01T08:00:00Z"));
        assert_eq!(end, ts("2024-06-01T17:30:00Z"));

        // Date-only halves parse as midnight UTC.
        let (start, _) = parse_range("2024-06-01 to 2024-06-02").unwrap();
        assert_eq!(start, ts("2024-06-01T00:00:00Z"));
    }

    #[test]
    fn test_parse_range_trims_parts() {
        let (start, end) = parse_range("  2024-01-01T00:00:00Z to 2024-01-02T00:00:00Z ").unwrap();
        assert!(start < end);
    }

    #[test]
    fn test_parse_range_rejects_missing_delimiter() {
        let err = parse_range("2024-01-01T00:00:00Z").unwrap_err();
        assert_eq!(err.error_code(), crate::errors::codes::MALFORMED_RANGE);
    }

    #[test]
    fn test_parse_range_rejects_three_parts() {
        assert!(parse_range("2024-01-01 to 2024-01-02 to 2024-01-03").is_err());
    }

    #[test]
    fn test_parse_range_rejects_garbage_timestamp() {
        assert!(parse_range("soon to later").is_err());
    }

    #[test]
    fn test_classify_ordering() {
        let start = ts("2024-01-10T00:00:00Z");
        let end = ts("2024-01-20T00:00:00Z");

        assert_eq!(
            classify(start, end, ts("2024-01-05T00:00:00Z")),
            DowntimeStatus::Upcoming
        );
        assert_eq!(
            classify(start, end, ts("2024-01-15T00:00:00Z")),
            DowntimeStatus::Ongoing
        );
        assert_eq!(
            classify(start, end, ts("2024-01-25T00:00:00Z")),
            DowntimeStatus::Completed
        );
    }

    #[test]
    fn test_classify_boundaries_are_ongoing() {
        let start = ts("2024-01-10T00:00:00Z");
        let end = ts("2024-01-20T00:00:00Z");
        assert_eq!(classify(start, end, start), DowntimeStatus::Ongoing);
        assert_eq!(classify(start, end, end), DowntimeStatus::Ongoing);
    }

    #[test]
    fn test_classify_inverted_range_is_mechanical() {
        let start = ts("2024-01-20T00:00:00Z");
        let end = ts("2024-01-10T00:00:00Z");
        // still before start: upcoming, even though end already passed.
        assert_eq!(
            classify(start, end, ts("2024-01-15T00:00:00Z")),
            DowntimeStatus::Upcoming
        );
        // past start and past end: completed; the window is never ongoing.
        assert_eq!(
            classify(start, end, ts("2024-01-25T00:00:00Z")),
            DowntimeStatus::Completed
        );
    }
}
