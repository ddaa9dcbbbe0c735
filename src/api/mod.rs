//! Climate REST API
//!
//! Read-only HTTP API over the climate database, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /` - Plain-text route listing
//! - `GET /api/v1.0/precipitation` - Date → precipitation, trailing year
//! - `GET /api/v1.0/stations` - Station identifiers
//! - `GET /api/v1.0/tobs` - Temperature observations, trailing year
//! - `GET /api/v1.0/:start` - `[min, avg, max]` from start
//! - `GET /api/v1.0/:start/:end` - `[min, avg, max]` between start and end
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use climate_api::api::{serve, AppState};
//! use climate_api::config::Config;
//! use climate_api::store::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let db = Database::from_config(&config.database)?;
//!
//!     let state = AppState::new(db, config.api.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use crate::config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/precipitation", get(routes::precipitation::precipitation))
        .route("/stations", get(routes::stations::stations))
        .route("/tobs", get(routes::tobs::tobs))
        .route("/:start", get(routes::summary::summary_from))
        .route("/:start/:end", get(routes::summary::summary_between));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let timeout = state.config.request_timeout();
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::index::index))
        .nest("/api/v1.0", api_routes)
        .nest("/health", health_routes)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Climate API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Climate API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::{date, hawaii_sample, seed_database};
    use crate::store::{Measurement, Station};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app(
        stations: &[Station],
        measurements: &[Measurement],
    ) -> (Router, tempfile::TempDir) {
        let (db, dir) = seed_database(stations, measurements);
        let state = AppState::new(db, ApiConfig::default());
        (build_router(state), dir)
    }

    fn sample_app() -> (Router, tempfile::TempDir) {
        let (stations, measurements) = hawaii_sample();
        create_test_app(&stations, &measurements)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_index_lists_routes() {
        let (app, _dir) = sample_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("/api/v1.0/precipitation"));
        assert!(text.contains("/api/v1.0/<start>/<end>"));
    }

    #[tokio::test]
    async fn test_precipitation_covers_trailing_year() {
        let (app, _dir) = sample_app();

        let (status, json) = get(app, "/api/v1.0/precipitation").await;
        assert_eq!(status, StatusCode::OK);

        let map = json.as_object().unwrap();
        assert!(!map.is_empty());
        for key in map.keys() {
            assert!(key.as_str() >= "2016-08-23" && key.as_str() <= "2017-08-23", "{}", key);
        }
        assert!(map["2017-01-01"].is_null());
        assert_eq!(map["2017-08-23"], 0.45);
    }

    #[tokio::test]
    async fn test_stations() {
        let (stations, measurements) = hawaii_sample();
        let (app, _dir) = create_test_app(&stations, &measurements);

        let (status, json) = get(app, "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::OK);

        let ids: Vec<String> = serde_json::from_value(json).unwrap();
        assert_eq!(ids.len(), stations.len());
        assert!(ids.iter().all(|id| stations.iter().any(|s| &s.station == id)));
    }

    #[tokio::test]
    async fn test_tobs_values_only() {
        let (app, _dir) = sample_app();

        let (status, json) = get(app, "/api/v1.0/tobs").await;
        assert_eq!(status, StatusCode::OK);

        let mut values: Vec<f64> = serde_json::from_value(json).unwrap();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, vec![62.0, 76.0, 77.0, 81.0, 82.0]);
    }

    #[tokio::test]
    async fn test_summary_from_start() {
        let measurements = vec![
            Measurement::new("USC00519397", date("2016-12-31"), None, 90.0),
            Measurement::new("USC00519397", date("2017-01-01"), None, 58.0),
            Measurement::new("USC00519397", date("2017-03-01"), None, 60.0),
            Measurement::new("USC00519397", date("2017-06-01"), None, 70.0),
        ];
        let (app, _dir) = create_test_app(&[], &measurements);

        let (status, json) = get(app, "/api/v1.0/2017-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([58.0, 62.67, 70.0]));
    }

    #[tokio::test]
    async fn test_summary_between() {
        let (app, _dir) = sample_app();

        let (status, json) = get(app, "/api/v1.0/2016-08-22/2016-08-23").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([76.0, 79.0, 81.0]));
    }

    #[tokio::test]
    async fn test_summary_beyond_records_is_error() {
        let (app, _dir) = sample_app();

        let (status, json) = get(app, "/api/v1.0/9999-01-01").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "NO_DATA");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_request() {
        let (app, _dir) = sample_app();

        let (status, json) = get(app.clone(), "/api/v1.0/2017-13-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "MALFORMED_DATE");

        let (status, _) = get(app, "/api/v1.0/2017-01-01/soon").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reversed_range_is_bad_request() {
        let (app, _dir) = sample_app();

        let (status, json) = get(app, "/api/v1.0/2017-02-01/2017-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_RANGE");
    }

    #[tokio::test]
    async fn test_empty_dataset() {
        let (app, _dir) = create_test_app(&[], &[]);

        let (status, json) = get(app.clone(), "/api/v1.0/precipitation").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "EMPTY_DATASET");

        let (status, json) = get(app, "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = sample_app();

        let (status, _) = get(app.clone(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(app.clone(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["stations"], 3);
        assert_eq!(json["measurements"], 7);
    }

    #[tokio::test]
    async fn test_ready_fails_when_database_removed() {
        let (app, dir) = sample_app();
        std::fs::remove_file(dir.path().join("climate.sqlite")).unwrap();

        let (status, _) = get(app.clone(), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, json) = get(app, "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "STORE_ERROR");
    }
}
