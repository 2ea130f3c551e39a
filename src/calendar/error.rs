//! Date error types.

use thiserror::Error;

/// Why a date string was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    /// Not three `-`-separated decimal segments.
    #[error("malformed date {0:?}, expected YYYY-MM-DD")]
    Malformed(String),

    #[error("month {0} is outside 1-12")]
    MonthOutOfRange(u32),

    #[error("day {0} is outside 1-32")]
    DayOutOfRange(u32),

    /// The year is below 1, or shifting it to the other calendar would be.
    #[error("year {0} is out of range")]
    YearOutOfRange(i64),

    #[error("unknown calendar {0:?}, expected BS or AD")]
    UnknownCalendar(String),

    #[error("date {0} is not a Gregorian calendar date")]
    NotGregorian(String),

    #[error("date {0} lies in the future")]
    InFuture(String),

    #[error("date {0} is more than {1} years ago")]
    TooOld(String, i32),
}
