//! Date validation for user supplied path segments
//!
//! Accepted formats, tried in order (month names are case-insensitive and
//! may be full or abbreviated):
//!
//! | Format       | Example           |
//! |--------------|-------------------|
//! | `%Y-%m-%d`   | `2016-08-23`      |
//! | `%Y/%m/%d`   | `2016/08/23`      |
//! | `%m/%d/%Y`   | `08/23/2016`      |
//! | `%m-%d-%Y`   | `08-23-2016`      |
//! | `%B %d, %Y`  | `August 23, 2016` |
//! | `%B %d %Y`   | `Aug 23 2016`     |
//! | `%d %B %Y`   | `23 August 2016`  |
//!
//! The year must fall in `1000..=9999`, so short years (`10/11/12`) and
//! signed or extended years (`+12345-01-01`) are rejected. Anything else,
//! including bare numbers such as `99999`, is rejected too.

use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

/// Formats accepted by [`parse_date`]
pub const ACCEPTED_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Years that format as exactly four digits in storage form
pub const ACCEPTED_YEARS: RangeInclusive<i32> = 1000..=9999;

/// Parse a date-like string into a calendar date
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|format| {
            NaiveDate::parse_from_str(trimmed, format)
                .ok()
                .filter(|date| ACCEPTED_YEARS.contains(&date.year()))
        })
}

/// Check whether a string denotes a calendar date in one of the accepted formats
pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_some()
}
