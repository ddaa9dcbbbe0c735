//! Observation queries
//!
//! Translates logical requests (a cutoff date, a date range) into rows
//! read from a [`Session`]. Dates are compared as ISO strings, which
//! sort chronologically.

use crate::query::{QueryError, QueryResult};
use crate::store::{ObservationDate, Precipitation, Session, StationId, StoreError, Temperature};
use rusqlite::params;
use std::collections::BTreeMap;

/// Precipitation keyed by date
pub type PrecipitationByDate = BTreeMap<ObservationDate, Precipitation>;

/// Read-only queries over one session
pub struct ObservationQuery<'a> {
    session: &'a Session,
}

impl<'a> ObservationQuery<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Most recent measurement date
    pub fn latest_date(&self) -> QueryResult<ObservationDate> {
        let latest: Option<String> = self.session.conn().query_row(
            "SELECT MAX(date) FROM measurement",
            [],
            |row| row.get(0),
        )?;

        let latest = latest.ok_or(QueryError::EmptyDataset)?;
        parse_stored_date(latest)
    }

    /// Start of the trailing twelve months ending at the latest date
    pub fn trailing_year_cutoff(&self) -> QueryResult<ObservationDate> {
        Ok(self.latest_date()?.year_before())
    }

    /// Precipitation for every measurement on or after `cutoff`.
    ///
    /// Rows are read newest first, then by row id. When several stations
    /// report the same date, the row read last (highest id) wins.
    pub fn precipitation_since(&self, cutoff: ObservationDate) -> QueryResult<PrecipitationByDate> {
        let mut stmt = self.session.conn().prepare_cached(
            "SELECT date, prcp FROM measurement
             WHERE date >= ?
             ORDER BY date DESC, id ASC",
        )?;

        let rows = stmt.query_map(params![cutoff.to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<f64>>(1)?))
        })?;

        let mut by_date = PrecipitationByDate::new();
        for row in rows {
            let (date, prcp) = row?;
            by_date.insert(parse_stored_date(date)?, prcp);
        }

        Ok(by_date)
    }

    /// Every station identifier, one per station row
    pub fn all_station_ids(&self) -> QueryResult<Vec<StationId>> {
        let mut stmt = self
            .session
            .conn()
            .prepare_cached("SELECT station FROM station")?;

        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    /// Temperature observations on or after `cutoff`
    pub fn temperatures_since(&self, cutoff: ObservationDate) -> QueryResult<Vec<Temperature>> {
        self.temperatures_in_range(cutoff, None)
    }

    /// Temperature observations with `start <= date` and, when given,
    /// `date <= end`
    pub fn temperatures_in_range(
        &self,
        start: ObservationDate,
        end: Option<ObservationDate>,
    ) -> QueryResult<Vec<Temperature>> {
        if let Some(end) = end {
            if end < start {
                return Err(QueryError::InvalidRange { start, end });
            }
        }

        let mut stmt = self.session.conn().prepare_cached(
            "SELECT tobs FROM measurement
             WHERE date >= ?1
               AND (?2 IS NULL OR date <= ?2)
               AND tobs IS NOT NULL
             ORDER BY date DESC, id ASC",
        )?;

        let values = stmt
            .query_map(
                params![start.to_string(), end.map(|d| d.to_string())],
                |row| row.get::<_, f64>(0),
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(values)
    }
}

fn parse_stored_date(value: String) -> QueryResult<ObservationDate> {
    ObservationDate::parse(&value).map_err(|_| StoreError::CorruptDate { value }.into())
}
