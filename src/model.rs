use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One weather forecast for a city on a calendar date.
///
/// `temperature_fahrenheit` is derived from `temperature_celsius` at
/// construction and whenever Celsius is written through
/// [`Forecast::set_temperature_celsius`]. Writing the Fahrenheit field
/// directly (or via [`Forecast::set_temperature_fahrenheit`]) bypasses the
/// derivation until Celsius is next set; deserialization relies on this raw
/// write, so it is kept as-is rather than re-deriving on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub id: String,
    pub city: String,
    pub country: String,
    pub date: NaiveDate,
    pub temperature_celsius: f64,
    pub temperature_fahrenheit: f64,
    pub condition: String,
    pub humidity_percent: i32,
    pub wind_speed_kmh: f64,
    pub wind_direction: String,
    pub description: String,
}

/// Incoming payload for create and full-replace update. Carries every
/// `Forecast` field except `id` (generated) and `temperature_fahrenheit`
/// (always recomputed). Not validated at this layer; see `validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    pub city: String,
    pub country: String,
    pub date: NaiveDate,
    pub temperature_celsius: f64,
    pub condition: String,
    pub humidity_percent: i32,
    pub wind_speed_kmh: f64,
    pub wind_direction: String,
    pub description: String,
}

/// Convert Celsius to Fahrenheit, rounded half-up to 2 decimal places.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    ((celsius * 9.0 / 5.0 + 32.0) * 100.0 + 0.5).floor() / 100.0
}

impl Forecast {
    /// Build a forecast from an input payload, generating a fresh random id
    /// and deriving the Fahrenheit temperature.
    pub fn from_input(input: ForecastInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            city: input.city,
            country: input.country,
            date: input.date,
            temperature_fahrenheit: celsius_to_fahrenheit(input.temperature_celsius),
            temperature_celsius: input.temperature_celsius,
            condition: input.condition,
            humidity_percent: input.humidity_percent,
            wind_speed_kmh: input.wind_speed_kmh,
            wind_direction: input.wind_direction,
            description: input.description,
        }
    }

    /// Write Celsius and re-derive Fahrenheit, re-establishing the invariant
    /// after any earlier raw Fahrenheit override.
    pub fn set_temperature_celsius(&mut self, celsius: f64) {
        self.temperature_celsius = celsius;
        self.temperature_fahrenheit = celsius_to_fahrenheit(celsius);
    }

    /// Raw Fahrenheit write. Leaves Celsius untouched, so the record is
    /// inconsistent until Celsius is next set. Kept for payloads that carry
    /// a Fahrenheit reading directly.
    pub fn set_temperature_fahrenheit(&mut self, fahrenheit: f64) {
        self.temperature_fahrenheit = fahrenheit;
    }

    /// Administrative id override. Normal callers never reassign ids.
    pub fn set_id(&mut self, id: String) {
        self.id = id;
    }

    /// Overwrite every field except `id` from an input payload, re-deriving
    /// Fahrenheit from the new Celsius value.
    pub fn apply_input(&mut self, input: ForecastInput) {
        self.city = input.city;
        self.country = input.country;
        self.date = input.date;
        self.set_temperature_celsius(input.temperature_celsius);
        self.condition = input.condition;
        self.humidity_percent = input.humidity_percent;
        self.wind_speed_kmh = input.wind_speed_kmh;
        self.wind_direction = input.wind_direction;
        self.description = input.description;
    }
}
