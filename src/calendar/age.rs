use super::{CalendarDate, CalendarSystem, DateError};
use chrono::{Datelike, Local, NaiveDate};

/// Completed years since `birth`, measured against today's local date.
///
/// BS birth dates are shifted to AD first. Unparseable input and birth dates
/// in the future both give 0.
pub fn calculate_age(birth: &str, is_bs: bool) -> u32 {
    calculate_age_on(birth, is_bs, Local::now().date_naive())
}

/// [`calculate_age`] against an explicit reference day.
pub fn calculate_age_on(birth: &str, is_bs: bool, today: NaiveDate) -> u32 {
    match completed_years(birth, is_bs, today) {
        Ok(age) => age,
        Err(err) => {
            tracing::debug!(%birth, is_bs, %err, "age calculation fell back to 0");
            0
        }
    }
}

fn completed_years(birth: &str, is_bs: bool, today: NaiveDate) -> Result<u32, DateError> {
    let system = if is_bs { CalendarSystem::Bs } else { CalendarSystem::Ad };
    let birth = CalendarDate::parse(birth, system)?.to_system(CalendarSystem::Ad)?;

    let mut age = today.year() - birth.year;
    if (today.month(), today.day()) < (birth.month, birth.day) {
        age -= 1;
    }
    Ok(u32::try_from(age).unwrap_or(0))
}
