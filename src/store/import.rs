//! CSV Import
//!
//! Builds a new climate database from a stations CSV and a measurements
//! CSV. Expected headers:
//!
//! - stations: `station,name,latitude,longitude,elevation`
//! - measurements: `station,date,prcp,tobs` (empty `prcp` is stored as NULL)

use crate::store::{schema, Measurement, ObservationDate, Station, StoreError, StoreResult};
use rusqlite::Connection;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Result of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub stations: usize,
    pub measurements: usize,
}

#[derive(Debug, Deserialize)]
struct MeasurementRecord {
    station: String,
    date: String,
    prcp: Option<f64>,
    tobs: f64,
}

/// Import CSV files into a new database at `output`
pub fn import_csv(
    stations_csv: &Path,
    measurements_csv: &Path,
    output: &Path,
) -> StoreResult<ImportSummary> {
    if output.exists() {
        return Err(StoreError::AlreadyExists(output.to_path_buf()));
    }
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let stations = std::fs::File::open(stations_csv)?;
    let measurements = std::fs::File::open(measurements_csv)?;

    let mut conn = Connection::open(output)?;
    let result = import_readers(&mut conn, stations, measurements);
    drop(conn);

    if result.is_err() {
        // leave no half-built database behind
        let _ = std::fs::remove_file(output);
    }
    result
}

/// Import from arbitrary readers into an open connection, in one transaction
pub fn import_readers<S: Read, M: Read>(
    conn: &mut Connection,
    stations: S,
    measurements: M,
) -> StoreResult<ImportSummary> {
    let tx = conn.transaction()?;
    schema::bootstrap(&tx)?;

    let mut summary = ImportSummary::default();

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(stations);
    for (idx, record) in reader.deserialize::<Station>().enumerate() {
        let station = record?;
        if station.station.is_empty() {
            return Err(StoreError::Import {
                file: "stations".to_string(),
                row: idx + 1,
                reason: "missing station id".to_string(),
            });
        }
        schema::insert_station(&tx, &station)?;
        summary.stations += 1;
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(measurements);
    for (idx, record) in reader.deserialize::<MeasurementRecord>().enumerate() {
        let record = record?;
        let date = ObservationDate::parse(&record.date).map_err(|e| StoreError::Import {
            file: "measurements".to_string(),
            row: idx + 1,
            reason: e.to_string(),
        })?;

        schema::insert_measurement(
            &tx,
            &Measurement::new(record.station, date, record.prcp, record.tobs),
        )?;
        summary.measurements += 1;
    }

    tx.commit()?;

    tracing::info!(
        stations = summary.stations,
        measurements = summary.measurements,
        "Import complete"
    );

    Ok(summary)
}
