//! Numeric value detection.

use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Signal;

/// A number immediately followed by a unit from the fixed vocabulary:
/// temperature (°C, K), pressure (GPa, MPa), molar mass (kDa, Da, kg/mol,
/// g/mol), viscosity (Pa·s), or percentage (wt%, mol%).
static NUM_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*(?:°c|k|gpa|mpa|kda|da|kg/mol|g/mol|pa·s|pa\s*s|wt%|mol%)\b")
        .expect("number-with-unit pattern should be valid")
});

/// Any bare decimal or integer number. Looser fallback so phrasings like
/// "Tg of 105" are not missed.
static NUM_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("bare number pattern should be valid"));

/// Signal extractor for numeric value mentions.
///
/// Prefers numbers with a recognized unit; when none is present, any bare
/// number in the sentence counts.
#[derive(Debug, Clone, Default)]
pub struct ValueSignal;

impl ValueSignal {
    /// Create a new value signal extractor.
    pub fn new() -> Self {
        ValueSignal
    }
}

impl Signal for ValueSignal {
    fn matches(&self, sentence: &str) -> Vec<String> {
        let with_units: Vec<String> = NUM_UNIT
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect();
        if !with_units.is_empty() {
            return with_units;
        }

        NUM_ONLY
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn name(&self) -> &'static str {
        "value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_temperature_unit() {
        let signal = ValueSignal::new();

        assert_eq!(signal.matches("a Tg of 105 °C was found"), vec!["105 °C"]);
        assert_eq!(signal.matches("heated to 378 K before casting"), vec!["378 K"]);
    }

    #[test]
    fn test_number_with_mass_and_pressure_units() {
        let signal = ValueSignal::new();

        assert_eq!(signal.matches("Mw of 50 kDa was measured"), vec!["50 kDa"]);
        assert_eq!(signal.matches("a modulus of 2.1 GPa here"), vec!["2.1 GPa"]);
        assert_eq!(signal.matches("12 kg/mol on average"), vec!["12 kg/mol"]);
    }

    #[test]
    fn test_decimal_values() {
        let signal = ValueSignal::new();
        assert_eq!(signal.matches("a density of 1.18 was reported"), vec!["1.18"]);
    }

    #[test]
    fn test_bare_number_fallback() {
        let signal = ValueSignal::new();
        assert_eq!(signal.matches("a Tg of 105 was reported"), vec!["105"]);
    }

    #[test]
    fn test_no_number() {
        let signal = ValueSignal::new();
        assert!(signal.matches("no numeric content here at all").is_empty());
    }

    #[test]
    fn test_unit_requires_adjacent_number() {
        let signal = ValueSignal::new();
        // A unit with no number nearby falls back to bare-number matching,
        // which also finds nothing here.
        assert!(signal.matches("values are reported in GPa throughout").is_empty());
    }

    #[test]
    fn test_signal_name() {
        assert_eq!(ValueSignal::new().name(), "value");
    }
}
