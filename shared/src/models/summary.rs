//! Temperature aggregates

use serde::{Deserialize, Serialize};

/// MIN/AVG/MAX of temperature observations over a date range.
///
/// Serialized with keys in `min`, `avg`, `max` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl TemperatureSummary {
    /// Build a summary from nullable SQL aggregates.
    ///
    /// SQL returns NULL for every aggregate when no row matched, which maps to `None`.
    pub fn from_aggregates(
        min: Option<f64>,
        avg: Option<f64>,
        max: Option<f64>,
    ) -> Option<Self> {
        Some(Self {
            min: min?,
            avg: avg?,
            max: max?,
        })
    }
}
