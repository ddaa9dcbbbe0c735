//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;
use crate::store::{MalformedDateError, StoreError};

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path parameter is not a `YYYY-MM-DD` date
    #[error("{0}")]
    MalformedDate(#[from] MalformedDateError),

    /// Query or aggregation failed
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Query(err.into())
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and stable error code
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MalformedDate(_) => (StatusCode::BAD_REQUEST, "MALFORMED_DATE"),
            ApiError::Query(QueryError::InvalidRange { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_RANGE")
            }
            ApiError::Query(QueryError::EmptyAggregation) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "NO_DATA")
            }
            ApiError::Query(QueryError::EmptyDataset) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_DATASET")
            }
            ApiError::Query(QueryError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
