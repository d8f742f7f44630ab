use calendar_dates::{CalendarMonth, NaiveDate};

/// Shorthand for a valid date; panics on invalid input.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// The first of a month.
pub fn month(year: i32, month: u32) -> CalendarMonth {
    CalendarMonth::new(ymd(year, month, 1))
}
