//! Week paging: the grid of days a month view lays out.

use chrono::{Datelike, Days, NaiveDate};

use crate::month::{days_in_month, truncate_to_month};

pub const DAYS_PER_WEEK: usize = 7;

/// Returns every day shown by the month view containing `day`.
///
/// The page starts on the `first_day` weekday (0 = Sunday .. 6 = Saturday)
/// on or before the first of the month and ends on the last weekday of that
/// week on or after the last of the month, so its length is always a whole
/// number of weeks.
pub fn page(day: NaiveDate, first_day: u32) -> Vec<NaiveDate> {
    let first_day = first_day % 7;
    let first = truncate_to_month(day);
    let leading = leading_days(first, first_day);
    let last = first
        .checked_add_days(Days::new(u64::from(days_in_month(first)) - 1))
        .unwrap_or(first);
    let last_weekday = (first_day + 6) % 7;
    let trailing = (last_weekday + 7 - last.weekday().num_days_from_sunday()) % 7;

    let start = first
        .checked_sub_days(Days::new(u64::from(leading)))
        .unwrap_or(first);
    let total = (leading + days_in_month(first) + trailing) as usize;
    start.iter_days().take(total).collect()
}

/// Zero-based week row of `day` inside its month page.
pub fn week_index(day: NaiveDate, first_day: u32) -> usize {
    let first = truncate_to_month(day);
    let position = leading_days(first, first_day % 7) + day.day0();
    position as usize / DAYS_PER_WEEK
}

fn leading_days(first_of_month: NaiveDate, first_day: u32) -> u32 {
    (first_of_month.weekday().num_days_from_sunday() + 7 - first_day) % 7
}
