//! Market-timezone timestamp composition
//!
//! This module anchors calendar dates and wall-clock times to the
//! marketplace's fixed UTC+07:00 offset (Indochina Time). The offset is
//! constant year-round: there is no daylight-saving adjustment, and the
//! process-local timezone is never consulted.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use thiserror::Error;

/// The market offset in seconds east of UTC (+07:00)
const MARKET_OFFSET_SECONDS: i32 = 7 * 3600;

static MARKET_OFFSET: Lazy<FixedOffset> = Lazy::new(|| {
    FixedOffset::east_opt(MARKET_OFFSET_SECONDS).expect("offset is within +/-24h")
});

/// Clearance period between check-out and payout eligibility, in
/// milliseconds: exactly 24 hours.
///
/// The payable-after instant is always derived by adding this constant to
/// the check-out instant as a fixed millisecond duration, never by adding a
/// calendar day, so the offset is exact across month and year boundaries.
pub const PAYOUT_CLEARANCE_MS: i64 = 86_400_000;

/// Returns the payout clearance as a [`Duration`]
pub fn payout_clearance() -> Duration {
    Duration::milliseconds(PAYOUT_CLEARANCE_MS)
}

/// Returns the fixed market offset (+07:00)
pub fn market_offset() -> FixedOffset {
    *MARKET_OFFSET
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid clock time: {text}")]
    InvalidClock { text: String },

    #[error("Invalid timestamp: {date} {time}")]
    InvalidTimestamp { date: String, time: String },
}

/// Parses a wall-clock time string
///
/// Accepts `HH`, `HH:MM`, or `HH:MM:SS`; a missing minute or second
/// component defaults to `00`.
pub fn parse_clock(text: &str) -> Result<NaiveTime, TemporalError> {
    const FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

    if let Some(clock) = FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
    {
        return Ok(clock);
    }

    // chrono cannot parse a bare hour: a lone %H leaves the minute field
    // unfilled and the conversion to NaiveTime fails. Handle the hour-only
    // form directly, defaulting minute and second to 00.
    let hour_only = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    hour_only
        .then(|| text.parse::<u32>().ok())
        .flatten()
        .and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .ok_or_else(|| TemporalError::InvalidClock {
            text: text.to_string(),
        })
}

/// Composes a calendar date and a clock time string into an absolute
/// instant anchored to the market offset
///
/// # Errors
///
/// Returns [`TemporalError::InvalidClock`] when the time text does not
/// parse, or [`TemporalError::InvalidTimestamp`] when the composed local
/// datetime cannot be mapped to an instant. Composition failures are
/// surfaced to the caller; they are never silently replaced by a sentinel
/// instant.
pub fn compose(date: NaiveDate, time: &str) -> Result<DateTime<Utc>, TemporalError> {
    let clock = parse_clock(time)?;

    date.and_time(clock)
        .and_local_timezone(market_offset())
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| TemporalError::InvalidTimestamp {
            date: date.to_string(),
            time: time.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_compose_anchors_to_market_offset() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let instant = compose(date, "14:00").unwrap();

        // 14:00 +07:00 is 07:00 UTC
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 1, 10, 7, 0, 0).unwrap());
    }

    #[test]
    fn test_compose_hour_only_defaults_minutes_and_seconds() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let instant = compose(date, "9").unwrap();

        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 3, 5, 2, 0, 0).unwrap());
    }

    #[test]
    fn test_compose_full_clock() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let instant = compose(date, "23:45:30").unwrap();

        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 6, 30, 16, 45, 30).unwrap());
    }

    #[test]
    fn test_compose_rejects_garbage_clock() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();

        assert!(matches!(
            compose(date, "not-a-time"),
            Err(TemporalError::InvalidClock { .. })
        ));
        assert!(matches!(
            compose(date, "25:00"),
            Err(TemporalError::InvalidClock { .. })
        ));
    }

    #[test]
    fn test_parse_clock_components() {
        assert_eq!(parse_clock("14").unwrap().hour(), 14);
        assert_eq!(parse_clock("14:30").unwrap().minute(), 30);
        assert_eq!(parse_clock("14:30:15").unwrap().second(), 15);
    }

    #[test]
    fn test_parse_clock_hour_only_defaults_to_top_of_hour() {
        assert_eq!(
            parse_clock("14").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert_eq!(
            parse_clock("0").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_clock_rejects_invalid_hour_only_forms() {
        assert!(matches!(
            parse_clock("24"),
            Err(TemporalError::InvalidClock { .. })
        ));
        assert!(matches!(
            parse_clock("+7"),
            Err(TemporalError::InvalidClock { .. })
        ));
    }

    #[test]
    fn test_payout_clearance_is_exact() {
        assert_eq!(payout_clearance().num_milliseconds(), 86_400_000);
    }

    #[test]
    fn test_clearance_exact_across_month_boundary() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let check_out = compose(date, "12:00").unwrap();
        let payable_after = check_out + payout_clearance();

        assert_eq!((payable_after - check_out).num_milliseconds(), 86_400_000);
        assert_eq!(
            payable_after,
            Utc.with_ymd_and_hms(2026, 2, 1, 5, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_clearance_exact_across_year_boundary() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let check_out = compose(date, "12:00").unwrap();
        let payable_after = check_out + payout_clearance();

        assert_eq!((payable_after - check_out).num_milliseconds(), 86_400_000);
        assert_eq!(
            payable_after,
            Utc.with_ymd_and_hms(2027, 1, 1, 5, 0, 0).unwrap()
        );
    }
}
