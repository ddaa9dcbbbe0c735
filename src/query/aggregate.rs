//! Temperature aggregation
//!
//! Reduces a sequence of temperature observations to its minimum,
//! arithmetic mean and maximum.

use crate::query::{QueryError, QueryResult};
use crate::store::Temperature;
use serde::Serialize;

/// Minimum, mean and maximum of a set of observations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    /// Number of observations reduced
    pub count: usize,
}

/// Compute min/avg/max.
///
/// Fails with [`QueryError::EmptyAggregation`] on empty input. The mean is
/// clamped into `[min, max]` so summation error never breaks
/// `min <= avg <= max`.
pub fn aggregate(values: &[Temperature]) -> QueryResult<TemperatureSummary> {
    if values.is_empty() {
        return Err(QueryError::EmptyAggregation);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / values.len() as f64;

    Ok(TemperatureSummary {
        min,
        avg: avg.clamp(min, max),
        max,
        count: values.len(),
    })
}
