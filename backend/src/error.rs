//! Error handling for the Hawaii Climate API
//!
//! Every error is rendered as `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors, served as 404
    #[error("Please specify start date.")]
    InvalidStartDate,

    #[error("Please specify end date.")]
    InvalidEndDate,

    // Data state errors
    #[error("No measurement data available.")]
    NoData,

    #[error("Stored measurement date is malformed: {0}")]
    InvalidStoredDate(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidStartDate | AppError::InvalidEndDate | AppError::NoData => {
                StatusCode::NOT_FOUND
            }
            AppError::InvalidStoredDate(_) | AppError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to clients; server-side details stay in the logs
    fn public_message(&self) -> String {
        match self {
            AppError::InvalidStoredDate(_) => "Stored measurement date is malformed.".to_string(),
            AppError::DatabaseError(_) => "A database error occurred.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
