//! Read-only database handle
//!
//! [`Database`] holds only the location of the SQLite file. Each request
//! opens its own [`Session`] (a read-only connection) and drops it when
//! the request finishes, so no connection is shared between requests.

use crate::config::DatabaseConfig;
use crate::store::{schema, StoreError, StoreResult};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Handle to the climate database file
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Database {
    /// Open a database, verifying the file and schema exist
    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(StoreError::NotFound(path));
        }

        let db = Self { path, busy_timeout };
        let session = db.connect()?;
        schema::verify(session.conn())?;

        tracing::debug!(path = ?db.path, "Database verified");
        Ok(db)
    }

    /// Open the database described by the configuration
    pub fn from_config(config: &DatabaseConfig) -> StoreResult<Self> {
        Self::open(
            &config.path,
            Duration::from_millis(config.busy_timeout_ms),
        )
    }

    /// Open a new read-only session
    pub fn connect(&self) -> StoreResult<Session> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(self.busy_timeout)?;

        Ok(Session { conn })
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A single read-only connection, scoped to one unit of work
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Underlying SQLite connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Number of station rows
    pub fn station_count(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM station", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Number of measurement rows
    pub fn measurement_count(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM measurement", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::{hawaii_sample, seed_database};
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let err = Database::open(dir.path().join("nope.sqlite"), Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_open_without_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.sqlite");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE other (id INTEGER)")
            .unwrap();

        let err = Database::open(&path, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, StoreError::Schema(_)));
    }

    #[test]
    fn test_counts() {
        let (stations, measurements) = hawaii_sample();
        let (db, _dir) = seed_database(&stations, &measurements);

        let session = db.connect().unwrap();
        assert_eq!(session.station_count().unwrap(), stations.len() as u64);
        assert_eq!(
            session.measurement_count().unwrap(),
            measurements.len() as u64
        );
    }

    #[test]
    fn test_session_is_read_only() {
        let (db, _dir) = seed_database(&[], &[]);
        let session = db.connect().unwrap();

        let result = session
            .conn()
            .execute("INSERT INTO station (station) VALUES ('X')", []);
        assert!(result.is_err());
    }
}
