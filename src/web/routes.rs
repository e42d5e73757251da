//! Router assembly.

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the console router.
///
/// `/` and `/health` are handlers; `/static` serves the client bundle
/// verbatim from `static_dir` (missing files get ServeDir's 404).
pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::console))
        .route("/health", get(handlers::health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(handlers::not_found)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum::middleware::from_fn(logging_middleware))
}
