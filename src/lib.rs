//! # Climate API
//!
//! Read-only JSON API over a station climate-observation database:
//! date-stamped precipitation and temperature readings per weather
//! station, with min/avg/max temperature summaries over a date range.
//!
//! ## Modules
//!
//! - [`store`]: SQLite data store access, schema and CSV import
//! - [`query`]: observation queries and temperature aggregation
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use climate_api::query::{aggregate, ObservationQuery};
//! use climate_api::store::{Database, ObservationDate};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open("Resources/hawaii.sqlite", Duration::from_secs(5))?;
//!     let session = db.connect()?;
//!     let query = ObservationQuery::new(&session);
//!
//!     let start = ObservationDate::parse("2017-01-01")?;
//!     let summary = aggregate(&query.temperatures_in_range(start, None)?)?;
//!
//!     println!("min={} avg={:.2} max={}", summary.min, summary.avg, summary.max);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod query;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    Database, Measurement, MalformedDateError, ObservationDate, Session, Station, StoreError,
    StoreResult,
};

pub use query::{aggregate, ObservationQuery, QueryError, QueryResult, TemperatureSummary};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DatabaseConfig, LoggingConfig};
