//! Database schema
//!
//! Table layout of the climate database. The server only verifies that
//! the schema is present; creating tables and inserting rows is reserved
//! for the import tooling and tests.

use crate::store::{Measurement, Station, StoreError, StoreResult};
use rusqlite::{params, Connection};

/// Tables the read path depends on
pub const REQUIRED_TABLES: [&str; 2] = ["station", "measurement"];

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS station (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        name TEXT,
        latitude REAL,
        longitude REAL,
        elevation REAL
    );

    CREATE TABLE IF NOT EXISTS measurement (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        date TEXT NOT NULL,
        prcp REAL,
        tobs REAL NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_measurement_date ON measurement(date);
";

/// Create the station and measurement tables
pub fn bootstrap(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(CREATE_TABLES)?;
    Ok(())
}

/// Check that every required table exists
pub fn verify(conn: &Connection) -> StoreResult<()> {
    let mut stmt =
        conn.prepare_cached("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")?;

    for table in REQUIRED_TABLES {
        let count: i64 = stmt.query_row([table], |row| row.get(0))?;
        if count == 0 {
            return Err(StoreError::Schema(format!("missing table '{}'", table)));
        }
    }

    Ok(())
}

/// Insert a station row
pub fn insert_station(conn: &Connection, station: &Station) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO station (station, name, latitude, longitude, elevation)
         VALUES (?, ?, ?, ?, ?)",
        params![
            station.station,
            station.name,
            station.latitude,
            station.longitude,
            station.elevation
        ],
    )?;
    Ok(())
}

/// Insert a measurement row
pub fn insert_measurement(conn: &Connection, measurement: &Measurement) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)",
        params![
            measurement.station,
            measurement.date.to_string(),
            measurement.precipitation,
            measurement.tobs
        ],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ObservationDate;

    #[test]
    fn test_bootstrap_then_verify() {
        let conn = Connection::open_in_memory().unwrap();
        bootstrap(&conn).unwrap();
        verify(&conn).unwrap();

        // idempotent
        bootstrap(&conn).unwrap();
    }

    #[test]
    fn test_verify_reports_missing_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT)")
            .unwrap();

        let err = verify(&conn).unwrap_err();
        assert!(matches!(err, StoreError::Schema(msg) if msg.contains("measurement")));
    }

    #[test]
    fn test_insert_rows() {
        let conn = Connection::open_in_memory().unwrap();
        bootstrap(&conn).unwrap();

        insert_station(&conn, &Station::new("USC00519397").name("WAIKIKI")).unwrap();
        let date = ObservationDate::parse("2010-01-01").unwrap();
        insert_measurement(&conn, &Measurement::new("USC00519397", date, None, 65.0)).unwrap();

        let (stored_date, prcp): (String, Option<f64>) = conn
            .query_row("SELECT date, prcp FROM measurement", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(stored_date, "2010-01-01");
        assert_eq!(prcp, None);
    }
}
