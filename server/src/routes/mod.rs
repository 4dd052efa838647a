//! Router assembly.
//!
//! Binds the generation API and serves the built client bundle as static
//! files under `/`. Everything else about the editor lives in the browser;
//! the server's whole surface is one POST route plus a health check.

pub mod generate;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Uploaded portraits arrive base64-inflated inside a JSON body; allow well
/// past typical phone-camera sizes.
const MAX_BODY_BYTES: usize = 24 * 1024 * 1024;

pub fn app(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/generate", post(generate::generate))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
}

async fn healthz() -> &'static str {
    "ok"
}
