//! Shared types and models for the Hawaii Climate API
//!
//! This crate holds the pure parts of the service: typed records for the
//! measurement and station tables, date validation, and the date range
//! arithmetic used by the aggregation endpoints.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
