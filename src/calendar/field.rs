use super::{calculate_age_on, convert, format_date_display, CalendarDate, CalendarSystem};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const INVALID_DATE: &str = "Invalid date format";

/// A date value together with the calendar it is currently written in.
///
/// The value is always expressed in the selected calendar; toggling converts
/// it rather than keeping both forms around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateField {
    value: String,
    format: CalendarSystem,
}

/// What the host shows under a date field: the value in the other calendar,
/// its display form, and optionally the age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateView {
    pub value: String,
    pub format: CalendarSystem,
    pub converted_format: CalendarSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DateField {
    pub fn new(format: CalendarSystem) -> Self {
        Self { value: String::new(), format }
    }

    pub fn with_value(value: impl Into<String>, format: CalendarSystem) -> Self {
        Self { value: value.into(), format }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn format(&self) -> CalendarSystem {
        self.format
    }

    /// Replaces the value; it is taken to be written in the current calendar.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Switches to the other calendar, converting the stored value.
    pub fn toggle(&mut self) {
        if !self.value.is_empty() {
            self.value = convert(&self.value, self.format);
        }
        self.format = self.format.toggled();
    }

    /// Toggles only if `target` differs from the current calendar.
    pub fn switch_to(&mut self, target: CalendarSystem) {
        if self.format != target {
            self.toggle();
        }
    }

    pub fn view(&self, show_age: bool) -> DateView {
        self.view_on(show_age, Local::now().date_naive())
    }

    pub fn view_on(&self, show_age: bool, today: NaiveDate) -> DateView {
        let mut view = DateView {
            value: self.value.clone(),
            format: self.format,
            converted_format: self.format.toggled(),
            converted: None,
            display: None,
            age: None,
            error: None,
        };
        if self.value.is_empty() {
            return view;
        }
        let converted = match CalendarDate::parse(&self.value, self.format)
            .and_then(|d| d.to_system(view.converted_format))
        {
            Ok(d) => d.to_string(),
            Err(err) => {
                tracing::debug!(value = %self.value, %err, "date field holds an invalid value");
                view.error = Some(INVALID_DATE.to_string());
                return view;
            }
        };
        view.display = Some(format_date_display(&converted, view.converted_format));
        view.converted = Some(converted);
        if show_age {
            view.age = Some(calculate_age_on(&self.value, self.format == CalendarSystem::Bs, today));
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn test_toggle_converts_and_adopts_format() {
        let mut field = DateField::with_value("2080-05-15", CalendarSystem::Bs);
        field.toggle();
        assert_eq!(field.value(), "2023-05-15");
        assert_eq!(field.format(), CalendarSystem::Ad);
        field.toggle();
        assert_eq!(field.value(), "2080-05-15");
        assert_eq!(field.format(), CalendarSystem::Bs);
    }

    #[test]
    fn test_toggle_twice_is_identity_even_for_bad_input() {
        for value in ["2080-5-1", "not-a-date", ""] {
            let original = DateField::with_value(value, CalendarSystem::Ad);
            let mut field = original.clone();
            field.toggle();
            field.toggle();
            if value == "2080-5-1" {
                // Normalised by the first conversion.
                assert_eq!(field.value(), "2080-05-01");
            } else {
                assert_eq!(field, original);
            }
        }
    }

    #[test]
    fn test_switch_to() {
        let mut field = DateField::with_value("2023-05-15", CalendarSystem::Ad);
        field.switch_to(CalendarSystem::Ad);
        assert_eq!(field.value(), "2023-05-15");
        field.switch_to(CalendarSystem::Bs);
        assert_eq!(field.value(), "2080-05-15");
    }

    #[test]
    fn test_view_with_age() {
        let field = DateField::with_value("2057-05-15", CalendarSystem::Bs);
        let view = field.view_on(true, today());
        assert_eq!(view.converted.as_deref(), Some("2000-05-15"));
        assert_eq!(view.display.as_deref(), Some("May 15, 2000"));
        assert_eq!(view.age, Some(24));
        assert_eq!(view.error, None);

        let view = field.view_on(false, today());
        assert_eq!(view.age, None);
    }

    #[test]
    fn test_view_of_ad_value_shows_bs() {
        let view = DateField::with_value("2023-05-15", CalendarSystem::Ad).view_on(false, today());
        assert_eq!(view.converted_format, CalendarSystem::Bs);
        assert_eq!(view.display.as_deref(), Some("भाद्र 15, 2080"));
    }

    #[test]
    fn test_view_of_invalid_and_empty_values() {
        let view = DateField::with_value("2080-99-01", CalendarSystem::Bs).view_on(true, today());
        assert_eq!(view.error.as_deref(), Some(INVALID_DATE));
        assert_eq!((view.converted, view.age), (None, None));

        let view = DateField::new(CalendarSystem::Bs).view_on(true, today());
        assert_eq!(view.error, None);
        assert_eq!(view.display, None);
    }

    #[test]
    fn test_view_serializes_without_empty_fields() {
        let view = DateField::with_value("2080-05-15", CalendarSystem::Bs).view_on(false, today());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["format"], "BS");
        assert_eq!(json["converted"], "2023-05-15");
        assert!(json.get("age").is_none());
        assert!(json.get("error").is_none());
    }
}
