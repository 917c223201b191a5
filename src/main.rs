use std::net::{Ipv4Addr, SocketAddr};

use sqlx::sqlite::SqlitePool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod db;
mod error;
mod logging;
mod models;
mod routes;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    // The store connection string is the one required setting
    let db_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set in .env");

    let pool = SqlitePool::connect(&db_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connection established.");

    let host: Ipv4Addr = match std::env::var("HOST") {
        Ok(raw) => raw.parse().expect("HOST is not in the correct format"),
        Err(_) => Ipv4Addr::UNSPECIFIED,
    };

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse().expect("PORT is not in the correct format"),
        Err(_) => 8080,
    };

    let addr = SocketAddr::from((host, port));

    let app = routes::router().with_state(pool);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
