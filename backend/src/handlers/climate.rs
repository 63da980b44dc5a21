//! HTTP handlers for the climate data endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{parse_date, DateRange};

use crate::error::{AppError, AppResult};
use crate::models::{PrecipitationEntry, Station, TemperatureObservation, TemperatureSummary};
use crate::services::ClimateService;
use crate::AppState;

/// List precipitation for every measurement
pub async fn list_precipitation(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PrecipitationEntry>>> {
    let service = ClimateService::new(state.db);
    let entries = service.list_precipitation().await?;
    Ok(Json(entries))
}

/// List all stations
pub async fn list_stations(State(state): State<AppState>) -> AppResult<Json<Vec<Station>>> {
    let service = ClimateService::new(state.db);
    let stations = service.list_stations().await?;
    Ok(Json(stations))
}

/// Temperature observations for the last year of data
pub async fn list_temperature_observations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TemperatureObservation>>> {
    let service = ClimateService::new(state.db);
    let observations = service.list_last_year_observations().await?;
    Ok(Json(observations))
}

/// MIN/AVG/MAX temperature for all dates on or after `start`
pub async fn temperature_summary_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> AppResult<Json<Vec<TemperatureSummary>>> {
    temperature_summary(state, &start, None).await
}

/// MIN/AVG/MAX temperature between `start` and `end`, both inclusive
pub async fn temperature_summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> AppResult<Json<Vec<TemperatureSummary>>> {
    temperature_summary(state, &start, Some(end.as_str())).await
}

async fn temperature_summary(
    state: AppState,
    start: &str,
    end: Option<&str>,
) -> AppResult<Json<Vec<TemperatureSummary>>> {
    let range = parse_range(start, end)?;
    tracing::debug!(?range, "Computing temperature summary");

    let service = ClimateService::new(state.db);
    let summary = service.temperature_summary(&range).await?;
    Ok(Json(summary))
}

/// Validate the path segments; the start date is checked first
fn parse_range(start: &str, end: Option<&str>) -> AppResult<DateRange> {
    let start = parse_date(start).ok_or(AppError::InvalidStartDate)?;
    let end = end
        .map(|end| parse_date(end).ok_or(AppError::InvalidEndDate))
        .transpose()?;

    Ok(DateRange::new(start, end))
}
