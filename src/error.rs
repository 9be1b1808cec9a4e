//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error code.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Invalid or missing bearer tokens
/// - **Resource Errors**: The caller has no bank account
/// - **Business Logic Errors**: Operations that violate ledger rules
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Bearer token is missing or does not match any user.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid token")]
    InvalidToken,

    /// The authenticated user has no bank account.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("No account found for user")]
    NoAccountFound,

    /// Account has insufficient balance for the requested withdrawal.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// Stable machine-readable code placed in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "internal_error",
            AppError::InvalidToken => "invalid_token",
            AppError::NoAccountFound => "no_account_found",
            AppError::InsufficientBalance => "insufficient_balance",
            AppError::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::NoAccountFound => StatusCode::NOT_FOUND,
            AppError::InsufficientBalance => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// Database errors are logged and replaced by a generic message so driver
/// details never reach the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "database operation failed");
                "An internal error occurred".to_string()
            }
            AppError::InvalidRequest(msg) => msg.clone(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}
