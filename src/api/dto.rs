//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::query::{PrecipitationByDate, TemperatureSummary};

/// `{"2017-08-23": 0.45, "2017-01-01": null, ...}`
pub type PrecipitationResponse = BTreeMap<String, Option<f64>>;

pub fn precipitation_response(by_date: PrecipitationByDate) -> PrecipitationResponse {
    by_date
        .into_iter()
        .map(|(date, prcp)| (date.to_string(), prcp))
        .collect()
}

/// `[min, avg, max]`, average rounded to two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryResponse(pub f64, pub f64, pub f64);

impl From<TemperatureSummary> for SummaryResponse {
    fn from(summary: TemperatureSummary) -> Self {
        let avg = round2(summary.avg).clamp(summary.min, summary.max);
        SummaryResponse(summary.min, avg, summary.max)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// "ok" or the error message
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<u64>,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_as_array() {
        let summary = TemperatureSummary {
            min: 58.0,
            avg: 62.666_666_666,
            max: 70.0,
            count: 3,
        };
        let json = serde_json::to_string(&SummaryResponse::from(summary)).unwrap();
        assert_eq!(json, "[58.0,62.67,70.0]");
    }
}
