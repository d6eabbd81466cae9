use serde::Serialize;

use crate::model::ForecastInput;

/// One violated input constraint, rendered verbatim in 400 responses.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

/// Check an incoming payload against the input-boundary rules. Returns every
/// violation found; an empty vec means the payload may be passed to the
/// service layer. The service itself never validates.
pub fn validate_input(input: &ForecastInput) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if input.city.trim().is_empty() {
        violations.push(FieldViolation::new("city", "not_blank", "City is required"));
    }
    if input.country.trim().is_empty() {
        violations.push(FieldViolation::new(
            "country",
            "not_blank",
            "Country is required",
        ));
    }
    if input.condition.trim().is_empty() {
        violations.push(FieldViolation::new(
            "condition",
            "not_blank",
            "Condition is required",
        ));
    }
    if input.temperature_celsius < -100.0 {
        violations.push(FieldViolation::new(
            "temperatureCelsius",
            "min",
            "Temperature must be at least -100",
        ));
    }
    if input.temperature_celsius > 60.0 {
        violations.push(FieldViolation::new(
            "temperatureCelsius",
            "max",
            "Temperature must be at most 60",
        ));
    }
    if input.humidity_percent < 0 {
        violations.push(FieldViolation::new(
            "humidityPercent",
            "min",
            "Humidity must be at least 0",
        ));
    }
    if input.humidity_percent > 100 {
        violations.push(FieldViolation::new(
            "humidityPercent",
            "max",
            "Humidity must be at most 100",
        ));
    }
    if input.wind_speed_kmh < 0.0 {
        violations.push(FieldViolation::new(
            "windSpeedKmh",
            "min",
            "Wind speed must be at least 0",
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_input() -> ForecastInput {
        ForecastInput {
            city: "London".to_string(),
            country: "UK".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
            temperature_celsius: 12.0,
            condition: "Cloudy".to_string(),
            humidity_percent: 75,
            wind_speed_kmh: 18.0,
            wind_direction: "SW".to_string(),
            description: "Overcast with occasional drizzle".to_string(),
        }
    }

    #[test]
    fn test_valid_input_has_no_violations() {
        assert!(validate_input(&valid_input()).is_empty());
    }

    #[test]
    fn test_blank_strings_are_rejected() {
        let mut input = valid_input();
        input.city = "   ".to_string();
        input.country = String::new();
        input.condition = "\t".to_string();
        let violations = validate_input(&input);
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().any(|v| v.field == "city"));
        assert!(violations.iter().any(|v| v.field == "country"));
        assert!(violations.iter().any(|v| v.field == "condition"));
    }

    #[test]
    fn test_temperature_bounds() {
        let mut input = valid_input();
        input.temperature_celsius = -100.0;
        assert!(validate_input(&input).is_empty());
        input.temperature_celsius = -100.5;
        assert_eq!(validate_input(&input)[0].rule, "min");
        input.temperature_celsius = 60.0;
        assert!(validate_input(&input).is_empty());
        input.temperature_celsius = 60.5;
        assert_eq!(validate_input(&input)[0].rule, "max");
    }

    #[test]
    fn test_humidity_bounds() {
        let mut input = valid_input();
        input.humidity_percent = 0;
        assert!(validate_input(&input).is_empty());
        input.humidity_percent = 100;
        assert!(validate_input(&input).is_empty());
        input.humidity_percent = 101;
        assert_eq!(validate_input(&input)[0].field, "humidityPercent");
        input.humidity_percent = -1;
        assert_eq!(validate_input(&input)[0].rule, "min");
    }

    #[test]
    fn test_negative_wind_speed_rejected() {
        let mut input = valid_input();
        input.wind_speed_kmh = -0.1;
        let violations = validate_input(&input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "windSpeedKmh");
    }

    #[test]
    fn test_violations_accumulate() {
        let mut input = valid_input();
        input.city = String::new();
        input.temperature_celsius = 200.0;
        input.humidity_percent = 150;
        input.wind_speed_kmh = -5.0;
        assert_eq!(validate_input(&input).len(), 4);
    }
}
