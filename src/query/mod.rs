//! Query and Aggregation Layer
//!
//! - [`ObservationQuery`]: date-filtered reads over a store session
//! - [`aggregate`]: min/avg/max reduction over temperature values

pub mod aggregate;
pub mod error;
pub mod observations;

pub use aggregate::{aggregate, TemperatureSummary};
pub use error::{QueryError, QueryResult};
pub use observations::{ObservationQuery, PrecipitationByDate};
