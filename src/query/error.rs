//! Query error types
//!
//! Defines all error conditions that can occur while querying and
//! aggregating observations.

use crate::store::ObservationDate;
use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// The measurement table has no rows
    #[error("Dataset is empty: no measurements recorded")]
    EmptyDataset,

    /// No values matched the requested range
    #[error("No temperature observations match the requested range")]
    EmptyAggregation,

    /// End date lies before start date
    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange {
        start: ObservationDate,
        end: ObservationDate,
    },

    /// Data store error
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

impl From<rusqlite::Error> for QueryError {
    fn from(err: rusqlite::Error) -> Self {
        QueryError::Store(err.into())
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
