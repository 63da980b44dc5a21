//! Shared fixtures for backend integration tests
#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use climate_backend::{create_app, AppState, Config};
use shared::{Measurement, Station};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

const MEASUREMENT_TABLE: &str = r#"
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )
"#;

const STATION_TABLE: &str = r#"
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )
"#;

/// In-memory database with the measurement and station tables, no rows
pub async fn empty_pool() -> SqlitePool {
    // A single long-lived connection keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(MEASUREMENT_TABLE).execute(&pool).await.unwrap();
    sqlx::query(STATION_TABLE).execute(&pool).await.unwrap();
    pool
}

pub async fn seeded_pool(measurements: &[Measurement], stations: &[Station]) -> SqlitePool {
    let pool = empty_pool().await;

    for m in measurements {
        sqlx::query("INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?, ?, ?, ?, ?)")
            .bind(m.id)
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    for s in stations {
        sqlx::query(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(s.id)
        .bind(&s.station)
        .bind(&s.name)
        .bind(s.latitude)
        .bind(s.longitude)
        .bind(s.elevation)
        .execute(&pool)
        .await
        .unwrap();
    }

    pool
}

pub fn measurement(id: i64, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        id,
        station: "USC00519397".to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}

/// Three observations spanning one year, plus an older row outside the window
pub fn scenario_measurements() -> Vec<Measurement> {
    vec![
        measurement(1, "2010-01-01", Some(0.08), 65.0),
        measurement(2, "2016-08-23", Some(0.0), 70.0),
        measurement(3, "2017-08-22", None, 80.0),
        measurement(4, "2017-08-23", Some(0.45), 75.0),
    ]
}

pub fn scenario_stations() -> Vec<Station> {
    vec![
        Station {
            id: 1,
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        },
        Station {
            id: 2,
            station: "USC00513117".to_string(),
            name: "KANEOHE 838.1, HI US".to_string(),
            latitude: 21.4234,
            longitude: -157.8015,
            elevation: 14.6,
        },
    ]
}

pub fn app(pool: SqlitePool) -> Router {
    let config = Config {
        environment: "test".to_string(),
        ..Config::default()
    };
    create_app(AppState::new(pool, config))
}

/// Issue a GET request and return the status and raw body
pub async fn get(app: Router, uri: &str) -> (axum::http::StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
