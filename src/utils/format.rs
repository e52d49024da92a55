use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use std::fmt;

/// Parse the timestamps the backend emits. Spring serializes
/// `LocalDateTime` without an offset, so try RFC 3339 first and fall back
/// to the naive forms.
pub fn parse_backend_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Live-timer components for an active booking.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

pub fn elapsed_between(entry: DateTime<Utc>, now: DateTime<Utc>) -> Elapsed {
    let diff = (now - entry).max(Duration::zero());
    Elapsed {
        hours: diff.num_hours(),
        minutes: diff.num_minutes() % 60,
        seconds: diff.num_seconds() % 60,
    }
}

/// Fee for an active booking: every started hour is billed in full.
pub fn amount_due(entry: DateTime<Utc>, now: DateTime<Utc>, hourly_rate: u32) -> u32 {
    let seconds = (now - entry).num_seconds().max(0);
    let hours = (seconds as f64 / 3600.0).ceil() as u32;
    hours * hourly_rate
}

/// Human-readable form of a backend timestamp, e.g. "02 Aug 2026 14:05".
/// Unparseable input is shown as-is rather than hidden.
pub fn format_datetime(raw: &str) -> String {
    match parse_backend_datetime(raw) {
        Some(dt) => dt.format("%d %b %Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> DateTime<Utc> {
        parse_backend_datetime(raw).expect("test timestamp")
    }

    #[test]
    fn parses_rfc3339_and_naive_forms() {
        assert!(parse_backend_datetime("2026-08-02T10:00:00Z").is_some());
        assert!(parse_backend_datetime("2026-08-02T10:00:00").is_some());
        assert!(parse_backend_datetime("2026-08-02T10:00:00.123456").is_some());
        assert!(parse_backend_datetime("2026-08-02 10:00:00").is_some());
        assert!(parse_backend_datetime("yesterday").is_none());
    }

    #[test]
    fn elapsed_splits_into_components() {
        let e = elapsed_between(at("2026-08-02T10:00:00"), at("2026-08-02T13:24:09"));
        assert_eq!(
            e,
            Elapsed {
                hours: 3,
                minutes: 24,
                seconds: 9
            }
        );
        assert_eq!(e.to_string(), "3h 24m 9s");
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let e = elapsed_between(at("2026-08-02T13:00:00"), at("2026-08-02T10:00:00"));
        assert_eq!(e.hours, 0);
        assert_eq!(e.seconds, 0);
    }

    #[test]
    fn started_hours_are_billed_in_full() {
        let entry = at("2026-08-02T10:00:00");
        assert_eq!(amount_due(entry, at("2026-08-02T10:00:00"), 50), 0);
        assert_eq!(amount_due(entry, at("2026-08-02T10:00:01"), 50), 50);
        assert_eq!(amount_due(entry, at("2026-08-02T11:00:00"), 50), 50);
        assert_eq!(amount_due(entry, at("2026-08-02T11:00:01"), 50), 100);
    }

    #[test]
    fn formatting_falls_back_to_raw() {
        assert_eq!(format_datetime("not-a-date"), "not-a-date");
        assert_eq!(format_datetime("2026-08-02T14:05:00"), "02 Aug 2026 14:05");
    }
}
