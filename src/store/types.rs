//! Core data types for the climate data store
//!
//! - [`ObservationDate`]: calendar date stored as `YYYY-MM-DD`
//! - [`Station`]: a weather-observation site
//! - [`Measurement`]: one dated observation recorded by a station

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Storage and wire format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returned when a string is not a valid `YYYY-MM-DD` date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed date {input:?}: expected YYYY-MM-DD")]
pub struct MalformedDateError {
    pub input: String,
}

/// A calendar date as recorded in the measurement table.
///
/// Dates are stored as ISO 8601 text, so the lexicographic order of the
/// stored form matches chronological order. Parsing is strict: exactly
/// ten characters, zero-padded month and day, and a real calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    /// Build from a year, month and day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a strict `YYYY-MM-DD` string
    pub fn parse(input: &str) -> Result<Self, MalformedDateError> {
        let malformed = || MalformedDateError {
            input: input.to_string(),
        };

        let well_shaped = input.len() == 10
            && input.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_shaped {
            return Err(malformed());
        }

        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| malformed())
    }

    /// Same calendar day one year earlier.
    ///
    /// February 29th maps to February 28th of the previous year.
    pub fn year_before(&self) -> Self {
        self.0
            .checked_sub_months(Months::new(12))
            .map(Self)
            .unwrap_or(*self)
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ObservationDate {
    type Err = MalformedDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for ObservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Station identifier, e.g. `USC00519397`
pub type StationId = String;

/// Precipitation reading; `None` when the station did not report one
pub type Precipitation = Option<f64>;

/// Temperature observation (`tobs`), degrees Fahrenheit
pub type Temperature = f64;

/// A weather-observation site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station identifier
    pub station: StationId,
    /// Human-readable name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl Station {
    /// Create a station with only an identifier
    pub fn new(station: impl Into<StationId>) -> Self {
        Self {
            station: station.into(),
            name: None,
            latitude: None,
            longitude: None,
            elevation: None,
        }
    }

    /// Set the station name (builder pattern)
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the station coordinates (builder pattern)
    pub fn location(mut self, latitude: f64, longitude: f64, elevation: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self.elevation = Some(elevation);
        self
    }
}

/// One dated observation from a station
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub station: StationId,
    pub date: ObservationDate,
    pub precipitation: Precipitation,
    pub tobs: Temperature,
}

impl Measurement {
    pub fn new(
        station: impl Into<StationId>,
        date: ObservationDate,
        precipitation: Precipitation,
        tobs: Temperature,
    ) -> Self {
        Self {
            station: station.into(),
            date,
            precipitation,
            tobs,
        }
    }
}
