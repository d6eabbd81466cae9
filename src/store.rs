use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::model::Forecast;

/// In-memory keyed store for forecasts.
///
/// Writes take the write lock and are atomic with respect to each other;
/// scans take the read lock and see a consistent key set at acquisition.
/// Records are cloned on the way out, so callers can never mutate stored
/// state except through `save`.
#[derive(Debug, Default)]
pub struct ForecastStore {
    forecasts: RwLock<HashMap<String, Forecast>>,
}

impl ForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by id. Always succeeds.
    pub async fn save(&self, forecast: Forecast) -> Forecast {
        self.forecasts
            .write()
            .await
            .insert(forecast.id.clone(), forecast.clone());
        forecast
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Forecast> {
        self.forecasts.read().await.get(id).cloned()
    }

    /// Unordered snapshot of all records.
    pub async fn find_all(&self) -> Vec<Forecast> {
        self.forecasts.read().await.values().cloned().collect()
    }

    /// Case-insensitive exact city match (Unicode-aware, not substring).
    pub async fn find_by_city(&self, city: &str) -> Vec<Forecast> {
        let city = city.to_lowercase();
        self.forecasts
            .read()
            .await
            .values()
            .filter(|f| f.city.to_lowercase() == city)
            .cloned()
            .collect()
    }

    pub async fn find_by_city_and_country(&self, city: &str, country: &str) -> Vec<Forecast> {
        let city = city.to_lowercase();
        let country = country.to_lowercase();
        self.forecasts
            .read()
            .await
            .values()
            .filter(|f| f.city.to_lowercase() == city && f.country.to_lowercase() == country)
            .cloned()
            .collect()
    }

    pub async fn find_by_city_and_date(&self, city: &str, date: NaiveDate) -> Vec<Forecast> {
        let city = city.to_lowercase();
        self.forecasts
            .read()
            .await
            .values()
            .filter(|f| f.city.to_lowercase() == city && f.date == date)
            .cloned()
            .collect()
    }

    /// Both bounds inclusive. An inverted range matches nothing; ordering is
    /// the caller's precondition and is not checked here.
    pub async fn find_by_city_and_date_range(
        &self,
        city: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Forecast> {
        let city = city.to_lowercase();
        self.forecasts
            .read()
            .await
            .values()
            .filter(|f| f.city.to_lowercase() == city && f.date >= start && f.date <= end)
            .cloned()
            .collect()
    }

    /// Remove by id; absent ids are a no-op.
    pub async fn delete_by_id(&self, id: &str) {
        self.forecasts.write().await.remove(id);
    }

    /// Remove by id, returning the removed record. A single write-lock
    /// acquisition, so concurrent removals of the same id yield `Some` to
    /// exactly one caller.
    pub async fn remove_by_id(&self, id: &str) -> Option<Forecast> {
        self.forecasts.write().await.remove(id)
    }

    pub async fn delete_all(&self) {
        self.forecasts.write().await.clear();
    }

    pub async fn exists_by_id(&self, id: &str) -> bool {
        self.forecasts.read().await.contains_key(id)
    }

    pub async fn count(&self) -> usize {
        self.forecasts.read().await.len()
    }
}
