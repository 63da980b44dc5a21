//! Common types used across the API

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of the "last year of data" window, in days
pub const YEAR_WINDOW_DAYS: i64 = 365;

/// Inclusive date range for aggregate queries; an absent end is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn starting_at(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Whether a date falls inside the range, both bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}

/// Start of the one-year window ending at `reference`.
///
/// `reference` is the latest date present in the dataset, not today's date.
pub fn year_window_start(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(YEAR_WINDOW_DAYS)
}

/// Format a date the way it is stored in the measurement table
pub fn to_storage_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
