//! Parsing of configuration dates.
//!
//! Accepts `yyyy-MM-dd`, an ISO date-time (`2024-03-05T10:00:00`, optionally
//! with an offset) or a millisecond Unix timestamp. Only the calendar day is
//! kept.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::DateError;

pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date_time) = input.parse::<NaiveDateTime>() {
        return Ok(date_time.date());
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Ok(date_time.date_naive());
    }
    if let Ok(millis) = input.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis)
            .map(|date_time| date_time.date_naive())
            .ok_or(DateError::TimestampOutOfRange { millis });
    }

    log::debug!("Rejected date input `{input}`");
    Err(DateError::Malformed {
        input: input.to_string(),
    })
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_dates() {
        assert_eq!(parse_date("2024-03-05"), Ok(ymd(2024, 3, 5)));
        assert_eq!(parse_date("  2024-03-05 "), Ok(ymd(2024, 3, 5)));
    }

    #[test]
    fn parses_date_times_to_their_day() {
        assert_eq!(parse_date("2024-03-05T23:59:00"), Ok(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05T08:00:00+02:00"), Ok(ymd(2024, 3, 5)));
    }

    #[test]
    fn parses_millisecond_timestamps() {
        assert_eq!(parse_date("1709596800000"), Ok(ymd(2024, 3, 5)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), Err(DateError::Empty));
        assert!(matches!(
            parse_date("next tuesday"),
            Err(DateError::Malformed { .. })
        ));
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(DateError::Malformed { .. })
        ));
    }
}
