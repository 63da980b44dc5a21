//! Route definitions for the Hawaii Climate API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes, mounted under `/api/v1.0`.
///
/// Static segments win over the `:start` capture, so `/tobs` never reaches
/// the temperature summary handler.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/precipitation", get(handlers::list_precipitation))
        .route("/stations", get(handlers::list_stations))
        .route("/tobs", get(handlers::list_temperature_observations))
        // Temperature summaries for a start date or an inclusive range
        .route("/:start", get(handlers::temperature_summary_from))
        .route("/:start/:end", get(handlers::temperature_summary_between))
}
