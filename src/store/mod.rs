//! Climate Data Store
//!
//! Read access to the SQLite database holding the `station` and
//! `measurement` tables. The server never writes to the database; the
//! [`import`] and [`schema`] write helpers exist for the admin CLI.

pub mod database;
pub mod error;
pub mod import;
pub mod schema;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use database::{Database, Session};
pub use error::{StoreError, StoreResult};
pub use import::{import_csv, ImportSummary};
pub use types::{
    Measurement, MalformedDateError, ObservationDate, Precipitation, Station, StationId,
    Temperature, DATE_FORMAT,
};
