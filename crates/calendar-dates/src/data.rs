use chrono::{Datelike, NaiveDate, NaiveTime};

/// Plain date record handed to listeners.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateData {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub day: u32,
    /// Milliseconds since the Unix epoch at UTC midnight of the date.
    pub timestamp: i64,
    /// `yyyy-MM-dd`.
    pub date_string: String,
}

impl From<NaiveDate> for DateData {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            timestamp: date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
            date_string: date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl DateData {
    /// The date this record describes, if its fields are consistent.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}
