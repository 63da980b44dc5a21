//! Data models for the Hawaii Climate API
//!
//! Re-exports the typed records from the shared crate

pub use shared::models::*;
