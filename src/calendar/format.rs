use super::{CalendarDate, CalendarSystem, DateError};
use chrono::{Datelike, Days, NaiveDate};

/// Bikram Sambat month names, Baishakh first.
pub const BS_MONTHS: [&str; 12] = [
    "बैशाख", "जेठ", "आषाढ", "श्रावण", "भाद्र", "आश्विन",
    "कार्तिक", "मंसिर", "पौष", "माघ", "फाल्गुन", "चैत्र",
];

/// Renders a `YYYY-MM-DD` string for display: "भाद्र 15, 2080" for BS,
/// "May 15, 2023" for AD.
///
/// Empty input renders as an empty string and unparseable input is returned
/// as is.
pub fn format_date_display(date: &str, format: CalendarSystem) -> String {
    if date.is_empty() {
        return String::new();
    }
    match CalendarDate::parse(date, format).and_then(|d| render(&d)) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(%date, %format, %err, "date display fell back to the input");
            date.to_string()
        }
    }
}

fn render(date: &CalendarDate) -> Result<String, DateError> {
    match date.system {
        CalendarSystem::Bs => {
            let name = BS_MONTHS[(date.month - 1) as usize];
            Ok(format!("{} {}, {}", name, date.day, date.year))
        }
        CalendarSystem::Ad => {
            let d = gregorian(date)?;
            Ok(format!("{} {}, {}", d.format("%B"), d.day(), d.year()))
        }
    }
}

/// Day overflow rolls into the next month, so "2023-02-30" is March 2nd.
fn gregorian(date: &CalendarDate) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(date.year, date.month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day - 1))))
        .ok_or_else(|| DateError::YearOutOfRange(date.year.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bs_display() {
        assert_eq!(format_date_display("2080-05-15", CalendarSystem::Bs), "भाद्र 15, 2080");
        assert_eq!(format_date_display("2080-01-01", CalendarSystem::Bs), "बैशाख 1, 2080");
        assert_eq!(format_date_display("2080-04-15", CalendarSystem::Bs), "श्रावण 15, 2080");
        assert_eq!(format_date_display("2080-12-30", CalendarSystem::Bs), "चैत्र 30, 2080");
    }

    #[test]
    fn test_ad_display() {
        assert_eq!(format_date_display("2023-05-15", CalendarSystem::Ad), "May 15, 2023");
        assert_eq!(format_date_display("2023-12-01", CalendarSystem::Ad), "December 1, 2023");
    }

    #[test]
    fn test_ad_day_overflow_rolls_over() {
        assert_eq!(format_date_display("2023-02-30", CalendarSystem::Ad), "March 2, 2023");
        assert_eq!(format_date_display("2024-02-30", CalendarSystem::Ad), "March 1, 2024");
    }

    #[test]
    fn test_empty_and_malformed() {
        assert_eq!(format_date_display("", CalendarSystem::Bs), "");
        assert_eq!(format_date_display("garbage", CalendarSystem::Ad), "garbage");
        assert_eq!(format_date_display("2080-13-01", CalendarSystem::Bs), "2080-13-01");
    }
}
