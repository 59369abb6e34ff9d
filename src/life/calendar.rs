//! Time-unit conversion between a birth instant and "now".
//!
//! All instants are milliseconds since the Unix epoch as `f64`, matching what
//! `js_sys::Date::now()` hands us every frame.

use chrono::{DateTime, NaiveDate, SecondsFormat};

pub const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
pub const MS_PER_WEEK: f64 = MS_PER_DAY * 7.0;
/// Julian year, so leap days average out over a lifetime.
pub const MS_PER_YEAR: f64 = MS_PER_DAY * 365.25;

/// Decimal places shown by the live age ticker.
pub const TICKER_DECIMALS: usize = 9;

/// Whole 7-day blocks between birth and now.
///
/// Uses the absolute difference: a birth date in the future counts weeks
/// *until* birth as if they were lived. See DESIGN.md.
pub fn elapsed_weeks(birth_ms: f64, now_ms: f64) -> i64 {
    ((now_ms - birth_ms).abs() / MS_PER_WEEK).floor() as i64
}

/// Fractional years since birth. Negative for a future birth date.
pub fn elapsed_years_fractional(birth_ms: f64, now_ms: f64) -> f64 {
    (now_ms - birth_ms) / MS_PER_YEAR
}

/// Parse a `YYYY-MM-DD` date as typed into the birth-date field.
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Midnight UTC of the given date, in epoch milliseconds.
pub fn birth_instant_ms(date: NaiveDate) -> f64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
        .unwrap_or(0.0)
}

/// Age in years with the ticker's fixed precision.
pub fn format_age_ticker(years: f64) -> String {
    format!("{:.*}", TICKER_DECIMALS, years)
}

/// ISO-8601 UTC timestamp (`2024-01-31T12:00:00.000Z`) for an epoch instant.
pub fn iso_timestamp(now_ms: f64) -> String {
    DateTime::from_timestamp_millis(now_ms as i64)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_birth_date(s).unwrap()
    }

    #[test]
    fn thirty_years_of_weeks() {
        let now = 2_000_000_000_000.0;
        let birth = now - 52.0 * 30.0 * MS_PER_WEEK;
        assert_eq!(elapsed_weeks(birth, now), 1560);
    }

    #[test]
    fn partial_week_is_floored() {
        let birth = 0.0;
        assert_eq!(elapsed_weeks(birth, MS_PER_WEEK * 3.0 - 1.0), 2);
        assert_eq!(elapsed_weeks(birth, MS_PER_WEEK * 3.0), 3);
    }

    #[test]
    fn future_birth_date_counts_positive_weeks() {
        let now = 1_000_000_000_000.0;
        let birth = now + 10.0 * MS_PER_WEEK;
        assert_eq!(elapsed_weeks(birth, now), 10);
    }

    #[test]
    fn fractional_years_are_signed() {
        let now = 1_000_000_000_000.0;
        assert!((elapsed_years_fractional(now - MS_PER_YEAR * 2.5, now) - 2.5).abs() < 1e-12);
        assert!(elapsed_years_fractional(now + MS_PER_YEAR, now) < 0.0);
    }

    #[test]
    fn parses_iso_dates() {
        assert!(parse_birth_date("1990-05-17").is_some());
        assert!(parse_birth_date(" 1990-05-17 ").is_some());
        assert!(parse_birth_date("1990-13-01").is_none());
        assert!(parse_birth_date("1990-02-30").is_none());
        assert!(parse_birth_date("1990-05").is_none());
        assert!(parse_birth_date("").is_none());
    }

    #[test]
    fn birth_instant_is_utc_midnight() {
        assert_eq!(birth_instant_ms(date("1970-01-01")), 0.0);
        assert_eq!(birth_instant_ms(date("1970-01-08")), MS_PER_WEEK);
    }

    #[test]
    fn ticker_has_nine_decimals() {
        assert_eq!(format_age_ticker(31.5), "31.500000000");
        let s = format_age_ticker(1.0 / 3.0);
        assert_eq!(s.split('.').nth(1).map(str::len), Some(TICKER_DECIMALS));
    }

    #[test]
    fn iso_timestamp_format() {
        assert_eq!(iso_timestamp(0.0), "1970-01-01T00:00:00.000Z");
        assert_eq!(iso_timestamp(MS_PER_DAY + 1500.0), "1970-01-02T00:00:01.500Z");
    }
}
