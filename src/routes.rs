use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::{
    config::Config,
    model::{Forecast, ForecastInput},
    service::WeatherService,
    validate::{validate_input, FieldViolation},
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<WeatherService>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("startDate must not be after endDate")]
    InvalidDateRange,
    #[error("invalid request payload")]
    Validation(Vec<FieldViolation>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidDateRange => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": violations })),
            )
                .into_response(),
        }
    }
}

// Request/Response types
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_forecasts: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: "Weather Forecast API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_forecasts: state.service.forecast_count().await,
        timestamp: chrono::Utc::now(),
    })
}

// The unscoped list returns an empty array as success; the scoped queries
// below surface an empty result as 404 instead.
pub async fn get_all_forecasts(State(state): State<AppState>) -> Json<Vec<Forecast>> {
    Json(state.service.get_all_forecasts().await)
}

pub async fn get_forecast_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Forecast>, ApiError> {
    state
        .service
        .get_forecast_by_id(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

fn non_empty(forecasts: Vec<Forecast>) -> Result<Json<Vec<Forecast>>, ApiError> {
    if forecasts.is_empty() {
        Err(ApiError::NotFound)
    } else {
        Ok(Json(forecasts))
    }
}

pub async fn get_forecasts_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Vec<Forecast>>, ApiError> {
    non_empty(state.service.get_forecasts_by_city(&city).await)
}

pub async fn get_forecasts_by_city_and_country(
    State(state): State<AppState>,
    Path((city, country)): Path<(String, String)>,
) -> Result<Json<Vec<Forecast>>, ApiError> {
    non_empty(
        state
            .service
            .get_forecasts_by_city_and_country(&city, &country)
            .await,
    )
}

pub async fn get_forecasts_by_city_and_date(
    State(state): State<AppState>,
    Path((city, date)): Path<(String, NaiveDate)>,
) -> Result<Json<Vec<Forecast>>, ApiError> {
    non_empty(
        state
            .service
            .get_forecasts_by_city_and_date(&city, date)
            .await,
    )
}

pub async fn get_forecasts_by_city_and_date_range(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<Forecast>>, ApiError> {
    // The service evaluates inverted ranges as empty; reject them here so the
    // client sees a 400 instead of a 404.
    if range.start_date > range.end_date {
        return Err(ApiError::InvalidDateRange);
    }
    non_empty(
        state
            .service
            .get_forecasts_by_city_and_date_range(&city, range.start_date, range.end_date)
            .await,
    )
}

pub async fn create_forecast(
    State(state): State<AppState>,
    Json(input): Json<ForecastInput>,
) -> Result<(StatusCode, Json<Forecast>), ApiError> {
    let violations = validate_input(&input);
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "rejected invalid create payload");
        return Err(ApiError::Validation(violations));
    }
    let created = state.service.create_forecast(input).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ForecastInput>,
) -> Result<Json<Forecast>, ApiError> {
    let violations = validate_input(&input);
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "rejected invalid update payload");
        return Err(ApiError::Validation(violations));
    }
    state
        .service
        .update_forecast(&id, input)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete_forecast(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather/health", get(health))
        .route("/api/weather/stats", get(get_stats))
        .route(
            "/api/weather",
            get(get_all_forecasts).post(create_forecast),
        )
        .route(
            "/api/weather/:id",
            get(get_forecast_by_id)
                .put(update_forecast)
                .delete(delete_forecast),
        )
        .route("/api/weather/city/:city", get(get_forecasts_by_city))
        .route(
            "/api/weather/city/:city/country/:country",
            get(get_forecasts_by_city_and_country),
        )
        .route(
            "/api/weather/city/:city/date/:date",
            get(get_forecasts_by_city_and_date),
        )
        .route(
            "/api/weather/city/:city/range",
            get(get_forecasts_by_city_and_date_range),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ForecastStore;

    fn test_state() -> AppState {
        AppState {
            config: Arc::new(Config {
                bind_addr: "127.0.0.1:0".to_string(),
                seed_sample_data: false,
            }),
            service: Arc::new(WeatherService::new(Arc::new(ForecastStore::new()))),
        }
    }

    fn input(city: &str) -> ForecastInput {
        ForecastInput {
            city: city.to_string(),
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

    #[tokio::test]
    async fn test_get_by_id_unknown_is_not_found() {
        let state = test_state();
        let result = get_forecast_by_id(State(state), Path("no-such-id".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_all_is_ok_even_when_empty() {
        let state = test_state();
        let Json(forecasts) = get_all_forecasts(State(state)).await;
        assert!(forecasts.is_empty());
    }

    #[tokio::test]
    async fn test_scoped_query_with_no_matches_is_not_found() {
        let state = test_state();
        let result = get_forecasts_by_city(State(state), Path("Atlantis".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected_before_the_service() {
        let state = test_state();
        let range = DateRangeQuery {
            start_date: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        };
        let result = get_forecasts_by_city_and_date_range(
            State(state),
            Path("London".to_string()),
            Query(range),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidDateRange)));
    }

    #[tokio::test]
    async fn test_create_then_fetch_roundtrip() {
        let state = test_state();
        let (status, Json(created)) =
            create_forecast(State(state.clone()), Json(input("London")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = get_forecast_by_id(State(state), Path(created.id.clone()))
            .await
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.temperature_fahrenheit, 53.6);
    }

    #[tokio::test]
    async fn test_create_with_invalid_payload_is_rejected() {
        let state = test_state();
        let mut bad = input("");
        bad.humidity_percent = 150;
        let result = create_forecast(State(state.clone()), Json(bad)).await;
        match result {
            Err(ApiError::Validation(violations)) => assert_eq!(violations.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(state.service.forecast_count().await, 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let state = test_state();
        let result = update_forecast(
            State(state),
            Path("no-such-id".to_string()),
            Json(input("London")),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_maps_to_no_content_then_not_found() {
        let state = test_state();
        let (_, Json(created)) = create_forecast(State(state.clone()), Json(input("London")))
            .await
            .unwrap();

        let first = delete_forecast(State(state.clone()), Path(created.id.clone())).await;
        assert!(matches!(first, Ok(StatusCode::NO_CONTENT)));

        let second = delete_forecast(State(state), Path(created.id)).await;
        assert!(matches!(second, Err(ApiError::NotFound)));
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidDateRange.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(Vec::new()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
