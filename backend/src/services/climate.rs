//! Climate service: read-only queries over the measurement and station tables

use chrono::NaiveDate;
use shared::{to_storage_date, year_window_start, DateRange};
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{
    PrecipitationEntry, Station, StationColumns, TemperatureObservation, TemperatureSummary,
};

/// Climate service for querying measurements and stations
#[derive(Clone)]
pub struct ClimateService {
    db: SqlitePool,
}

impl ClimateService {
    /// Create a new ClimateService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List every precipitation reading, unfiltered
    pub async fn list_precipitation(&self) -> AppResult<Vec<PrecipitationEntry>> {
        let rows = sqlx::query_as::<_, (String, Option<f64>)>(
            "SELECT date, prcp FROM measurement",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(PrecipitationEntry::from).collect())
    }

    /// List every monitoring station
    pub async fn list_stations(&self) -> AppResult<Vec<Station>> {
        let rows = sqlx::query_as::<_, StationColumns>(
            r#"
            SELECT id, station, name, latitude, longitude, elevation
            FROM station
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }

    /// Latest measurement date in the dataset (the reference date)
    pub async fn max_date(&self) -> AppResult<String> {
        let max_date: Option<String> =
            sqlx::query_scalar("SELECT MAX(date) FROM measurement")
                .fetch_one(&self.db)
                .await?;

        max_date.ok_or(AppError::NoData)
    }

    /// First day of the one-year window that ends at the reference date
    pub async fn year_window_start(&self) -> AppResult<NaiveDate> {
        let max_date = self.max_date().await?;
        tracing::debug!("The last date entry in the data table {}", max_date);

        let reference = NaiveDate::parse_from_str(&max_date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidStoredDate(max_date.clone()))?;

        Ok(year_window_start(reference))
    }

    /// Temperature observations from the last year of data, newest first
    pub async fn list_last_year_observations(&self) -> AppResult<Vec<TemperatureObservation>> {
        let window_start = match self.year_window_start().await {
            Ok(start) => start,
            Err(AppError::NoData) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let rows = sqlx::query_as::<_, (String, f64)>(
            r#"
            SELECT date, tobs
            FROM measurement
            WHERE date >= ?
            ORDER BY date DESC
            "#,
        )
        .bind(to_storage_date(window_start))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(TemperatureObservation::from).collect())
    }

    /// MIN/AVG/MAX temperature over an inclusive date range.
    ///
    /// Returns an empty list when no measurement falls inside the range.
    pub async fn temperature_summary(
        &self,
        range: &DateRange,
    ) -> AppResult<Vec<TemperatureSummary>> {
        let start = to_storage_date(range.start);

        let (min, avg, max) = match range.end {
            Some(end) => {
                sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
                    r#"
                    SELECT MIN(tobs), AVG(tobs), MAX(tobs)
                    FROM measurement
                    WHERE date >= ? AND date <= ?
                    "#,
                )
                .bind(start)
                .bind(to_storage_date(end))
                .fetch_one(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
                    r#"
                    SELECT MIN(tobs), AVG(tobs), MAX(tobs)
                    FROM measurement
                    WHERE date >= ?
                    "#,
                )
                .bind(start)
                .fetch_one(&self.db)
                .await?
            }
        };

        Ok(TemperatureSummary::from_aggregates(min, avg, max)
            .into_iter()
            .collect())
    }

    /// Check that the dataset is reachable
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.db).await.is_ok()
    }
}
