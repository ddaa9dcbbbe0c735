//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (database readable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 if a session can be opened and the station table read.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match database_counts(&state).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
///
/// Full health status with database details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, database, stations, measurements) = match database_counts(&state).await {
        Ok((stations, measurements)) => (
            "healthy",
            "ok".to_string(),
            Some(stations),
            Some(measurements),
        ),
        Err(e) => ("unhealthy", e.to_string(), None, None),
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        stations,
        measurements,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn database_counts(state: &AppState) -> crate::api::ApiResult<(u64, u64)> {
    state
        .with_session(|session| Ok((session.station_count()?, session.measurement_count()?)))
        .await
}
