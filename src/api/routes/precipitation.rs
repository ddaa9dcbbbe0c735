//! Precipitation Route
//!
//! - GET /api/v1.0/precipitation - Date → precipitation over the trailing
//!   twelve months ending at the latest recorded date

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{precipitation_response, PrecipitationResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::ObservationQuery;

/// GET /api/v1.0/precipitation
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PrecipitationResponse>> {
    let by_date = state
        .with_session(|session| {
            let query = ObservationQuery::new(session);
            let cutoff = query.trailing_year_cutoff()?;
            query.precipitation_since(cutoff)
        })
        .await?;

    tracing::debug!(dates = by_date.len(), "Served precipitation");

    Ok(Json(precipitation_response(by_date)))
}
