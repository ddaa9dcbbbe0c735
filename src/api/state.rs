//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::api::error::{ApiError, ApiResult};
use crate::config::ApiConfig;
use crate::query::QueryResult;
use crate::store::{Database, Session};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Climate database; each request opens its own session
    pub db: Arc<Database>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(db: Database, config: ApiConfig) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Run `work` against a fresh session on the blocking pool.
    ///
    /// The session is dropped when `work` returns, on success or error.
    pub async fn with_session<T, F>(&self, work: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Session) -> QueryResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);

        let result = tokio::task::spawn_blocking(move || -> QueryResult<T> {
            let session = db.connect()?;
            work(&session)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Query task failed: {}", e)))?;

        Ok(result?)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
