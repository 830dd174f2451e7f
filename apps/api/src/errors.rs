use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A worksheet configuration the engine refuses to run with.
///
/// Generators and the paginator assume well-formed input; these checks run first so
/// degenerate settings fail fast instead of producing garbage pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("count must be at least 1")]
    ZeroCount,

    #[error("count {count} exceeds the maximum of {max}")]
    CountTooLarge { count: usize, max: usize },

    #[error("value range is empty: min {min} > max {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("at least one operator must be allowed")]
    NoOperators,

    #[error("{field} must be between 1 and {max}, got {digits}")]
    DigitsOutOfRange {
        field: &'static str,
        digits: u32,
        max: u32,
    },

    #[error("max_factor must be at least 1")]
    ZeroFactor,

    #[error("problems per page must be at least 1")]
    ZeroCapacity,

    #[error("columns must be at least 1")]
    ZeroColumns,

    #[error("divisor must be at least 1")]
    ZeroDivisor,
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
