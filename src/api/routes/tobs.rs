//! Temperature Observations Route
//!
//! - GET /api/v1.0/tobs - Temperature values for the trailing twelve
//!   months, without dates

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::ObservationQuery;
use crate::store::Temperature;

/// GET /api/v1.0/tobs
pub async fn tobs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Temperature>>> {
    let values = state
        .with_session(|session| {
            let query = ObservationQuery::new(session);
            let cutoff = query.trailing_year_cutoff()?;
            query.temperatures_since(cutoff)
        })
        .await?;

    tracing::debug!(values = values.len(), "Served tobs");

    Ok(Json(values))
}
