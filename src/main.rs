use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod model;
mod routes;
mod service;
mod store;
mod validate;

use config::Config;
use routes::{create_router, AppState};
use service::WeatherService;
use store::ForecastStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_forecast_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the in-memory store and the service layer above it
    let store = Arc::new(ForecastStore::new());
    let service = Arc::new(WeatherService::new(store));

    if config.seed_sample_data {
        service.seed_sample_data().await;
    }

    let bind_addr = config.bind_addr.clone();

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        service,
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server starting on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
