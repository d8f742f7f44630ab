use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Empty,
    Malformed { input: String },
    TimestampOutOfRange { millis: i64 },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Empty => write!(f, "empty date string"),
            DateError::Malformed { input } => write!(f, "unrecognized date `{input}`"),
            DateError::TimestampOutOfRange { millis } => {
                write!(f, "timestamp {millis}ms is outside the supported date range")
            }
        }
    }
}

impl std::error::Error for DateError {}
