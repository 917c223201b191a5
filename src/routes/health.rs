use axum::{http::StatusCode, response::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
}

/// GET /health - Liveness probe
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
