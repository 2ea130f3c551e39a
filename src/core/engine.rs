use crate::calendar::{CalendarSystem, DateField, DateView};
use crate::config::HostConfig;
use crate::core::converter::Transliterator;

/// The host-facing engine: one transliterator plus the state of a single
/// date field.
#[derive(Debug, Clone)]
pub struct LocalizationEngine {
    pub transliterator: Transliterator,
    date_field: DateField,
    show_age: bool,
}

impl Default for LocalizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizationEngine {
    pub fn new() -> Self {
        Self::from_config(&HostConfig::default())
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            transliterator: Transliterator::new(),
            date_field: DateField::new(config.default_format),
            show_age: config.show_age,
        }
    }

    pub fn transliterate(&self, text: &str) -> String {
        self.transliterator.transliterate(text)
    }

    /// Space pressed outside an input-method composition.
    pub fn commit_word(&self, buffer: &str) -> String {
        self.transliterator.commit_word(buffer)
    }

    pub fn date_field(&self) -> &DateField {
        &self.date_field
    }

    pub fn set_date(&mut self, value: &str) {
        self.date_field.set_value(value.trim());
    }

    /// Flips the field to the other calendar and returns the new one.
    pub fn toggle_format(&mut self) -> CalendarSystem {
        self.date_field.toggle();
        tracing::debug!(format = %self.date_field.format(), value = self.date_field.value(), "date format toggled");
        self.date_field.format()
    }

    pub fn switch_format(&mut self, target: CalendarSystem) -> CalendarSystem {
        self.date_field.switch_to(target);
        self.date_field.format()
    }

    pub fn show_age(&self) -> bool {
        self.show_age
    }

    pub fn date_view(&self) -> DateView {
        self.date_field.view(self.show_age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults_follow_config() {
        let config = HostConfig { default_format: CalendarSystem::Ad, show_age: false, ..HostConfig::default() };
        let engine = LocalizationEngine::from_config(&config);
        assert_eq!(engine.date_field().format(), CalendarSystem::Ad);
        assert!(!engine.show_age());
        assert_eq!(engine.date_view().age, None);
    }

    #[test]
    fn test_commit_word() {
        let engine = LocalizationEngine::new();
        assert_eq!(engine.commit_word("mero naam "), "मेरो नाम ");
    }

    #[test]
    fn test_date_round_trip_through_toggles() {
        let mut engine = LocalizationEngine::new();
        engine.set_date(" 2080-05-15 ");
        assert_eq!(engine.toggle_format(), CalendarSystem::Ad);
        assert_eq!(engine.date_field().value(), "2023-05-15");
        assert_eq!(engine.switch_format(CalendarSystem::Bs), CalendarSystem::Bs);
        assert_eq!(engine.date_field().value(), "2080-05-15");
        let view = engine.date_view();
        assert_eq!(view.converted.as_deref(), Some("2023-05-15"));
        assert!(view.age.is_some());
    }
}
