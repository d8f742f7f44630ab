//! Date math for the calendar list.
//!
//! Everything here works on [`chrono::NaiveDate`]: the calendar list never
//! cares about time of day or time zones, only about which day and which month
//! a value falls on.

mod data;
mod error;
mod month;
mod page;
mod parse;

pub use chrono::NaiveDate;
pub use data::DateData;
pub use error::DateError;
pub use month::*;
pub use page::{page, week_index, DAYS_PER_WEEK};
pub use parse::{parse_date, today};

pub mod prelude {
    pub use crate::data::DateData;
    pub use crate::month::{diff_months, same_date, truncate_to_month, CalendarMonth};
    pub use crate::page::{page, week_index};
    pub use crate::parse::parse_date;
}
