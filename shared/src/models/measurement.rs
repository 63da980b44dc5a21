//! Measurement records and their API projections

use serde::{Deserialize, Serialize};

/// One row of the `measurement` table: a daily observation at one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    /// Stored as `YYYY-MM-DD` text
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

impl Measurement {
    pub fn precipitation(&self) -> PrecipitationEntry {
        PrecipitationEntry {
            date: self.date.clone(),
            prcp: self.prcp,
        }
    }

    pub fn observation(&self) -> TemperatureObservation {
        TemperatureObservation {
            date: self.date.clone(),
            tobs: self.tobs,
        }
    }
}

/// Precipitation reading for a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationEntry {
    pub date: String,
    pub prcp: Option<f64>,
}

impl From<(String, Option<f64>)> for PrecipitationEntry {
    fn from((date, prcp): (String, Option<f64>)) -> Self {
        Self { date, prcp }
    }
}

/// Temperature observation (tobs) for a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

impl From<(String, f64)> for TemperatureObservation {
    fn from((date, tobs): (String, f64)) -> Self {
        Self { date, tobs }
    }
}
