//! Stations Route
//!
//! - GET /api/v1.0/stations - Every station identifier

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::ObservationQuery;
use crate::store::StationId;

/// GET /api/v1.0/stations
pub async fn stations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<StationId>>> {
    let ids = state
        .with_session(|session| ObservationQuery::new(session).all_station_ids())
        .await?;

    tracing::debug!(stations = ids.len(), "Served stations");

    Ok(Json(ids))
}
