//! Error types for Bookline server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes surfaced to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    NoSuchData = 3,
    BadValue = 4,
    Duplicate = 5,
    DateUnavailable = 6,
    SlotNotOffered = 7,
    SlotTaken = 8,
    InvalidSchedule = 9,
    InvalidTransition = 10,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Requested date is closed, blocked or in the past
    #[error("Date unavailable: {0}")]
    DateUnavailable(String),

    /// Requested time is not on the provider's slot grid for that date
    #[error("Slot not offered: {0}")]
    SlotNotOffered(String),

    /// Requested interval overlaps an existing pending/accepted appointment
    #[error("Slot conflict: {0}")]
    SlotConflict(String),

    /// A weekly rule write with open_time >= close_time
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Appointment status transition not allowed by the state machine
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
            AppError::DateUnavailable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::DateUnavailable, msg.clone())
            }
            AppError::SlotNotOffered(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::SlotNotOffered, msg.clone())
            }
            AppError::SlotConflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::SlotTaken, msg.clone())
            }
            AppError::InvalidSchedule(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidSchedule, msg.clone())
            }
            AppError::InvalidTransition(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::InvalidTransition, msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
