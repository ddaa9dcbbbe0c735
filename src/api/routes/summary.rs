//! Temperature Summary Routes
//!
//! - GET /api/v1.0/:start - `[min, avg, max]` for readings on or after start
//! - GET /api/v1.0/:start/:end - `[min, avg, max]` for start <= date <= end
//!
//! Dates are parsed before any query runs; a malformed date is a 400.
//! A range with no readings is a 500 with code `NO_DATA`.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SummaryResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{aggregate, ObservationQuery};
use crate::store::ObservationDate;

/// GET /api/v1.0/:start
pub async fn summary_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<SummaryResponse>> {
    let start = ObservationDate::parse(&start)?;
    summarize(&state, start, None).await
}

/// GET /api/v1.0/:start/:end
pub async fn summary_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<SummaryResponse>> {
    let start = ObservationDate::parse(&start)?;
    let end = ObservationDate::parse(&end)?;
    summarize(&state, start, Some(end)).await
}

async fn summarize(
    state: &AppState,
    start: ObservationDate,
    end: Option<ObservationDate>,
) -> ApiResult<Json<SummaryResponse>> {
    let summary = state
        .with_session(move |session| {
            let values = ObservationQuery::new(session).temperatures_in_range(start, end)?;
            aggregate(&values)
        })
        .await?;

    tracing::debug!(
        start = %start,
        end = ?end.map(|d| d.to_string()),
        count = summary.count,
        "Served temperature summary"
    );

    Ok(Json(summary.into()))
}
