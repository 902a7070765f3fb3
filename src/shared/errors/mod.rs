//! Error Types
//!
//! Application errors pairing an HTTP status code with a domain error kind,
//! and their mapping to HTTP responses.

pub mod catalog;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Domain error tagged with the HTTP status code it is reported with
///
/// Displays as the underlying error's message. The underlying error is
/// reachable through [`AppError::inner`] and through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{err}")]
pub struct AppError {
    status_code: StatusCode,
    #[source]
    err: DomainError,
}

impl AppError {
    /// Pair a status code with an underlying error
    ///
    /// No validation is applied to the pairing.
    #[must_use]
    pub const fn new(status_code: StatusCode, err: DomainError) -> Self {
        Self { status_code, err }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// The wrapped error, for comparing against known kinds
    #[must_use]
    pub const fn inner(&self) -> DomainError {
        self.err
    }

    /// Machine-readable code of the underlying error
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        self.err.code()
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        err.inner()
    }
}

/// Errors surfaced by HTTP handlers
///
/// Infrastructure failures are classified here, at the HTTP boundary, rather
/// than where they occur.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Database unavailable: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.into(),
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.error_code(), self.to_string());
        (self.status_code, Json(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::App(err) => err.into_response(),
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Database unavailable");
                let body = ErrorResponse::new("DATABASE_UNAVAILABLE", "Database is unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
            }
        }
    }
}
