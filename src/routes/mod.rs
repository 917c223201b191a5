pub mod health;
pub mod seasons;


use axum::{
    routing::{any, get},
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use crate::logging::RequestLogLayer;

/// Build the application router. The caller injects the store handle via
/// `.with_state`.
pub fn router() -> Router<SqlitePool> {
    // Permissive CORS; the API is read-only public data
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", any(|| async { "Welcome to the NBA Data API!" }))
        .route("/health", get(health::health_check))
        .route("/v1/nba/{team}/{year}", get(seasons::get_team_season))
        .route("/v1/nba/{team}/{year}/roster", get(seasons::get_roster_link))
        .route(
            "/v1/nba/{team}/{year}/schedule",
            get(seasons::get_schedule_link),
        )
        .layer(cors)
        .layer(RequestLogLayer::new())
}
