use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid year format")]
    InvalidYear,
    #[error("no record for that team and year")]
    NotFound,
    #[error("season lookup failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored season is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidYear => (
                StatusCode::BAD_REQUEST,
                "Invalid year format".to_string(),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "Resource not found".to_string(),
            ),
            // Store faults surface as 404 just like a miss; the fault text
            // goes to the error log, never into the body.
            ApiError::Database(err) => {
                tracing::error!("season lookup failed: {}", err);
                (StatusCode::NOT_FOUND, "Resource not found".to_string())
            }
            ApiError::Corrupt(err) => {
                tracing::error!("stored season is malformed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
