//! Fixtures for tests that need a populated database

use crate::store::{schema, Database, Measurement, ObservationDate, Station};
use rusqlite::Connection;
use std::time::Duration;
use tempfile::TempDir;

/// Write a database file containing the given rows
pub fn seed_database(stations: &[Station], measurements: &[Measurement]) -> (Database, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("climate.sqlite");

    let conn = Connection::open(&path).unwrap();
    schema::bootstrap(&conn).unwrap();
    for station in stations {
        schema::insert_station(&conn, station).unwrap();
    }
    for measurement in measurements {
        schema::insert_measurement(&conn, measurement).unwrap();
    }
    drop(conn);

    let db = Database::open(&path, Duration::from_secs(1)).unwrap();
    (db, dir)
}

pub fn date(s: &str) -> ObservationDate {
    ObservationDate::parse(s).unwrap()
}

/// Three stations and a small spread of readings ending on 2017-08-23
pub fn hawaii_sample() -> (Vec<Station>, Vec<Measurement>) {
    let stations = vec![
        Station::new("USC00519397").name("WAIKIKI 717.2, HI US"),
        Station::new("USC00513117").name("KANEOHE 838.1, HI US"),
        Station::new("USC00519281").name("WAIHEE 837.5, HI US"),
    ];

    let measurements = vec![
        Measurement::new("USC00519397", date("2010-01-01"), Some(0.08), 65.0),
        Measurement::new("USC00519397", date("2016-08-22"), Some(0.40), 80.0),
        Measurement::new("USC00519397", date("2016-08-23"), Some(0.00), 81.0),
        Measurement::new("USC00513117", date("2016-08-23"), Some(0.15), 76.0),
        Measurement::new("USC00519281", date("2017-01-01"), None, 62.0),
        Measurement::new("USC00519397", date("2017-08-22"), Some(0.00), 82.0),
        Measurement::new("USC00519281", date("2017-08-23"), Some(0.45), 77.0),
    ];

    (stations, measurements)
}
