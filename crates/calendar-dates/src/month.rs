//! Month arithmetic.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::data::DateData;

/// Format used for placeholder rows, e.g. `Mar 2024`.
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// A date standing for the month it falls in.
///
/// The day of month is kept because a calendar month view is anchored on a
/// concrete date (the list's opening date moved by whole months), but two
/// values compare as the same month through [`CalendarMonth::same_month`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    date: NaiveDate,
}

impl CalendarMonth {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Creates a month from a year, a month (1-12) and a day, if valid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month number, 1-12.
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// The first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        truncate_to_month(self.date)
    }

    /// Moves by `delta` whole months.
    ///
    /// The day of month is clamped to the length of the target month, so
    /// `Jan 31 + 1` is `Feb 29` in a leap year. Results beyond the range chrono
    /// can represent saturate at [`NaiveDate::MIN`] / [`NaiveDate::MAX`].
    pub fn add_months(&self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.date
                .checked_add_months(months)
                .unwrap_or(NaiveDate::MAX)
        } else {
            self.date
                .checked_sub_months(months)
                .unwrap_or(NaiveDate::MIN)
        };
        Self::new(moved)
    }

    /// Whole months from `self` to `other`; positive when `other` is later.
    pub fn diff_months(&self, other: &CalendarMonth) -> i32 {
        diff_months(self.date, other.date)
    }

    pub fn same_month(&self, other: &CalendarMonth) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Short label such as `Mar 2024`.
    pub fn label(&self) -> String {
        self.date.format(MONTH_LABEL_FORMAT).to_string()
    }

    pub fn to_data(&self) -> DateData {
        DateData::from(self.date)
    }
}

impl From<NaiveDate> for CalendarMonth {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m"))
    }
}

/// Truncates a date to the first of its month.
pub fn truncate_to_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Whole calendar months between two dates, ignoring the day of month.
pub fn diff_months(from: NaiveDate, to: NaiveDate) -> i32 {
    let from_total = from.year() * 12 + from.month0() as i32;
    let to_total = to.year() * 12 + to.month0() as i32;
    to_total - from_total
}

pub fn same_date(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = truncate_to_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // Only December of the last representable year gets here.
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_months_crosses_year_boundaries() {
        let march = CalendarMonth::new(ymd(2024, 3, 15));
        assert_eq!(march.add_months(-3).date(), ymd(2023, 12, 15));
        assert_eq!(march.add_months(10).date(), ymd(2025, 1, 15));
        assert_eq!(march.add_months(0), march);
    }

    #[test]
    fn add_months_clamps_day_to_month_end() {
        let jan = CalendarMonth::new(ymd(2024, 1, 31));
        assert_eq!(jan.add_months(1).date(), ymd(2024, 2, 29));
        assert_eq!(jan.add_months(3).date(), ymd(2024, 4, 30));
        assert_eq!(jan.add_months(-2).date(), ymd(2023, 11, 30));
    }

    #[test]
    fn diff_months_ignores_day_of_month() {
        assert_eq!(diff_months(ymd(2024, 3, 31), ymd(2024, 4, 1)), 1);
        assert_eq!(diff_months(ymd(2024, 3, 1), ymd(2023, 12, 31)), -3);
        assert_eq!(diff_months(ymd(2024, 3, 10), ymd(2024, 3, 20)), 0);
    }

    #[test]
    fn label_uses_short_month_name() {
        assert_eq!(CalendarMonth::new(ymd(2024, 3, 9)).label(), "Mar 2024");
        assert_eq!(CalendarMonth::new(ymd(1999, 12, 1)).label(), "Dec 1999");
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(ymd(2024, 2, 10)), 29);
        assert_eq!(days_in_month(ymd(2023, 2, 10)), 28);
        assert_eq!(days_in_month(ymd(2024, 12, 1)), 31);
    }

    #[test]
    fn same_month_compares_year_and_month_only() {
        let a = CalendarMonth::new(ymd(2024, 5, 1));
        let b = CalendarMonth::new(ymd(2024, 5, 31));
        let c = CalendarMonth::new(ymd(2025, 5, 1));
        assert!(a.same_month(&b));
        assert!(!a.same_month(&c));
    }
}
