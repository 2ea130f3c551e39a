use super::{CalendarDate, CalendarSystem};

/// Years added going AD -> BS and subtracted going BS -> AD.
pub const BS_AD_YEAR_OFFSET: i32 = 57;

pub fn convert_bs_to_ad(date: &str) -> String {
    convert(date, CalendarSystem::Bs)
}

pub fn convert_ad_to_bs(date: &str) -> String {
    convert(date, CalendarSystem::Ad)
}

/// Converts a `YYYY-MM-DD` string written in `from` into the other calendar.
/// Anything that does not parse is handed back unchanged.
pub fn convert(date: &str, from: CalendarSystem) -> String {
    match CalendarDate::parse(date, from).and_then(|d| d.to_system(from.toggled())) {
        Ok(converted) => converted.to_string(),
        Err(err) => {
            tracing::debug!(%date, %from, %err, "date conversion fell back to the input");
            date.to_string()
        }
    }
}
