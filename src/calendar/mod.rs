//! Bikram Sambat / Gregorian date handling.
//!
//! Conversion between the two calendars is a fixed 57-year shift with month
//! and day copied unchanged. It is an approximation of the real calendar and
//! is kept that way because age display depends on it.

mod age;
mod convert;
mod error;
mod field;
mod format;
mod validate;

pub use age::{calculate_age, calculate_age_on};
pub use convert::{convert, convert_ad_to_bs, convert_bs_to_ad, BS_AD_YEAR_OFFSET};
pub use error::DateError;
pub use field::{DateField, DateView};
pub use format::{format_date_display, BS_MONTHS};
pub use validate::{
    is_valid_ad_date, is_valid_bs_date, validate_birth_date, BS_MAX_YEAR, BS_MIN_YEAR, MAX_AGE_YEARS,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which calendar a date string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarSystem {
    #[serde(rename = "BS")]
    Bs,
    #[serde(rename = "AD")]
    Ad,
}

impl CalendarSystem {
    pub fn toggled(self) -> Self {
        match self {
            CalendarSystem::Bs => CalendarSystem::Ad,
            CalendarSystem::Ad => CalendarSystem::Bs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CalendarSystem::Bs => "BS",
            CalendarSystem::Ad => "AD",
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarSystem {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("BS") {
            Ok(CalendarSystem::Bs)
        } else if s.eq_ignore_ascii_case("AD") {
            Ok(CalendarSystem::Ad)
        } else {
            Err(DateError::UnknownCalendar(s.to_string()))
        }
    }
}

/// A year-month-day triple tagged with its calendar.
///
/// Month is always 1-12 and day 1-32; the day is never checked against the
/// real length of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub system: CalendarSystem,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(system: CalendarSystem, year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if year < 1 {
            return Err(DateError::YearOutOfRange(year.into()));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        if !(1..=32).contains(&day) {
            return Err(DateError::DayOutOfRange(day));
        }
        Ok(Self { system, year, month, day })
    }

    /// Parses `YYYY-MM-DD`. Month and day may be written with one digit.
    pub fn parse(s: &str, system: CalendarSystem) -> Result<Self, DateError> {
        let caps = regex!(r"^([0-9]+)-([0-9]+)-([0-9]+)$")
            .captures(s)
            .ok_or_else(|| DateError::Malformed(s.to_string()))?;
        let malformed = |_| DateError::Malformed(s.to_string());
        let year: i32 = caps[1].parse().map_err(malformed)?;
        let month: u32 = caps[2].parse().map_err(malformed)?;
        let day: u32 = caps[3].parse().map_err(malformed)?;
        Self::new(system, year, month, day)
    }

    /// Re-expresses the date in `target` by shifting the year.
    pub fn to_system(self, target: CalendarSystem) -> Result<Self, DateError> {
        let shift = match (self.system, target) {
            (a, b) if a == b => return Ok(self),
            (CalendarSystem::Bs, CalendarSystem::Ad) => -BS_AD_YEAR_OFFSET,
            _ => BS_AD_YEAR_OFFSET,
        };
        let year = i64::from(self.year) + i64::from(shift);
        let year = i32::try_from(year).map_err(|_| DateError::YearOutOfRange(year))?;
        if year < 1 {
            return Err(DateError::YearOutOfRange(year.into()));
        }
        Ok(Self { system: target, year, ..self })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
