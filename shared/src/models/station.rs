//! Monitoring station reference data

use serde::{Deserialize, Serialize};

/// One row of the `station` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    /// Station code, e.g. `USC00519397`
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Column tuple as selected from the `station` table
pub type StationColumns = (i64, String, String, f64, f64, f64);

impl From<StationColumns> for Station {
    fn from((id, station, name, latitude, longitude, elevation): StationColumns) -> Self {
        Self {
            id,
            station,
            name,
            latitude,
            longitude,
            elevation,
        }
    }
}
