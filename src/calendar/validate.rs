//! Input checks the date-of-birth field applies before accepting a value.

use super::{CalendarDate, CalendarSystem, DateError};
use chrono::{Datelike, NaiveDate};

pub const BS_MIN_YEAR: i32 = 2000;
pub const BS_MAX_YEAR: i32 = 2100;

/// Oldest accepted birth date, in years before today.
pub const MAX_AGE_YEARS: i32 = 100;

/// Three segments, year 2000-2100, month 1-12, day 1-32.
pub fn is_valid_bs_date(date: &str) -> bool {
    CalendarDate::parse(date, CalendarSystem::Bs)
        .is_ok_and(|d| (BS_MIN_YEAR..=BS_MAX_YEAR).contains(&d.year))
}

/// A real Gregorian date written exactly as `YYYY-MM-DD`.
pub fn is_valid_ad_date(date: &str) -> bool {
    regex!(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").is_match(date)
        && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Checks a birth date written in `system`: it must parse, must not lie after
/// `today` and must not be more than [`MAX_AGE_YEARS`] before it. Returns the
/// date expressed in AD.
pub fn validate_birth_date(
    date: &str,
    system: CalendarSystem,
    today: NaiveDate,
) -> Result<CalendarDate, DateError> {
    let parsed = CalendarDate::parse(date, system)?;
    match system {
        CalendarSystem::Bs if !(BS_MIN_YEAR..=BS_MAX_YEAR).contains(&parsed.year) => {
            return Err(DateError::YearOutOfRange(parsed.year.into()));
        }
        CalendarSystem::Ad if !is_valid_ad_date(date) => {
            return Err(DateError::NotGregorian(date.to_string()));
        }
        _ => {}
    }

    let ad = parsed.to_system(CalendarSystem::Ad)?;
    let born = (ad.year, ad.month, ad.day);
    let now = (today.year(), today.month(), today.day());
    if born > now {
        return Err(DateError::InFuture(date.to_string()));
    }
    if born < (now.0 - MAX_AGE_YEARS, now.1, now.2) {
        return Err(DateError::TooOld(date.to_string(), MAX_AGE_YEARS));
    }
    Ok(ad)
}
