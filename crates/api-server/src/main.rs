//! API Server for the flatfile task tracker
//!
//! Serves the task CRUD REST API backed by a single tasks.json file.

mod routes;
mod state;

use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine data directory and store policy
    let data_dir = std::env::var("TASKS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".tasks-data"));
    let seed_file = std::env::var("TASKS_SEED_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir.join("tasks.template.json"));
    let strict_numeric_ids = std::env::var("TASKS_STRICT_NUMERIC_IDS")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(5050);

    tracing::info!("Using data directory: {:?}", data_dir);

    let app_state = AppState::new(data_dir, seed_file, strict_numeric_ids);

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::task::router())
        .with_state(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind REST API port");
    axum::serve(listener, app)
        .await
        .expect("REST API server failed");
}
