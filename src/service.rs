use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;

use crate::model::{Forecast, ForecastInput};
use crate::store::ForecastStore;

/// Service layer translating forecast CRUD intents into store operations.
/// Owns id generation (via [`Forecast::from_input`]) and the update
/// semantics; performs no input validation — payloads are checked at the
/// transport boundary before they reach this layer.
pub struct WeatherService {
    store: Arc<ForecastStore>,
}

impl WeatherService {
    pub fn new(store: Arc<ForecastStore>) -> Self {
        Self { store }
    }

    pub async fn create_forecast(&self, input: ForecastInput) -> Forecast {
        self.store.save(Forecast::from_input(input)).await
    }

    pub async fn get_forecast_by_id(&self, id: &str) -> Option<Forecast> {
        self.store.find_by_id(id).await
    }

    pub async fn get_all_forecasts(&self) -> Vec<Forecast> {
        self.store.find_all().await
    }

    pub async fn get_forecasts_by_city(&self, city: &str) -> Vec<Forecast> {
        self.store.find_by_city(city).await
    }

    pub async fn get_forecasts_by_city_and_country(
        &self,
        city: &str,
        country: &str,
    ) -> Vec<Forecast> {
        self.store.find_by_city_and_country(city, country).await
    }

    pub async fn get_forecasts_by_city_and_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> Vec<Forecast> {
        self.store.find_by_city_and_date(city, date).await
    }

    /// Range ordering is a transport precondition; an inverted range simply
    /// returns an empty result here.
    pub async fn get_forecasts_by_city_and_date_range(
        &self,
        city: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Forecast> {
        self.store
            .find_by_city_and_date_range(city, start, end)
            .await
    }

    /// Full replace of every field except `id`. Returns `None` without
    /// mutating anything when the id is unknown.
    pub async fn update_forecast(&self, id: &str, input: ForecastInput) -> Option<Forecast> {
        let mut existing = self.store.find_by_id(id).await?;
        existing.apply_input(input);
        Some(self.store.save(existing).await)
    }

    /// Returns true exactly when a record existed and was removed. Backed by
    /// a single atomic removal, so two concurrent deletes of the same id
    /// cannot both observe true.
    pub async fn delete_forecast(&self, id: &str) -> bool {
        self.store.remove_by_id(id).await.is_some()
    }

    pub async fn forecast_count(&self) -> usize {
        self.store.count().await
    }

    /// Seed a fixed set of illustrative forecasts: five cities, three
    /// consecutive dates starting today. Demo data only, not part of the
    /// durable contract.
    pub async fn seed_sample_data(&self) {
        let today = Utc::now().date_naive();
        let tomorrow = today + Duration::days(1);
        let day_after = today + Duration::days(2);

        let samples = [
            ("New York", "USA", today, 18.5, "Partly Cloudy", 65, 15.0, "NW", "Partly cloudy with mild temperatures"),
            ("New York", "USA", tomorrow, 20.0, "Sunny", 55, 10.0, "W", "Clear skies expected"),
            ("New York", "USA", day_after, 16.0, "Rainy", 80, 20.0, "NE", "Rain expected throughout the day"),
            ("London", "UK", today, 12.0, "Cloudy", 75, 18.0, "SW", "Overcast with occasional drizzle"),
            ("London", "UK", tomorrow, 14.0, "Partly Cloudy", 70, 12.0, "W", "Clouds clearing in the afternoon"),
            ("London", "UK", day_after, 11.0, "Rainy", 85, 25.0, "S", "Heavy rain expected"),
            ("Tokyo", "Japan", today, 22.0, "Sunny", 50, 8.0, "E", "Beautiful sunny day"),
            ("Tokyo", "Japan", tomorrow, 24.0, "Sunny", 45, 5.0, "SE", "Hot and sunny"),
            ("Tokyo", "Japan", day_after, 21.0, "Partly Cloudy", 60, 10.0, "N", "Some clouds moving in"),
            ("Sydney", "Australia", today, 28.0, "Sunny", 40, 12.0, "NE", "Hot summer day"),
            ("Sydney", "Australia", tomorrow, 30.0, "Sunny", 35, 15.0, "N", "Very hot, stay hydrated"),
            ("Sydney", "Australia", day_after, 26.0, "Thunderstorm", 70, 30.0, "W", "Afternoon thunderstorms likely"),
            ("Paris", "France", today, 15.0, "Cloudy", 68, 14.0, "W", "Mild with cloud cover"),
            ("Paris", "France", tomorrow, 17.0, "Partly Cloudy", 60, 10.0, "SW", "Pleasant day expected"),
            ("Paris", "France", day_after, 14.0, "Rainy", 78, 18.0, "NW", "Rain moving in from the west"),
        ];

        for (city, country, date, temp, condition, humidity, wind, direction, description) in
            samples
        {
            self.create_forecast(ForecastInput {
                city: city.to_string(),
                country: country.to_string(),
                date,
                temperature_celsius: temp,
                condition: condition.to_string(),
                humidity_percent: humidity,
                wind_speed_kmh: wind,
                wind_direction: direction.to_string(),
                description: description.to_string(),
            })
            .await;
        }

        tracing::info!(count = samples.len(), "seeded sample forecasts");
    }
}
