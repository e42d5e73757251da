//! 真人荷官视讯 admin console server
//!
//! Serves the login/shell document at `/`, the client bundle under
//! `/static`, and a liveness endpoint at `/health`.
//!
//! Usage:
//!   cargo run
//!
//! Environment:
//!   ADMIN_HOST        - Listen host (default: 0.0.0.0)
//!   PORT / ADMIN_PORT - Listen port (default: 8080)
//!   ADMIN_STATIC_DIR  - Client bundle directory (default: static)
//!   DATABASE_URL      - Postgres connection string
//!   RUST_LOG          - Log filter (default: info)

use std::sync::Arc;
use studio_admin::{create_router, AppConfig, AppState, Database};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::default();

    // Declared binding; connects on first query, which no route issues yet
    let db = Database::connect_lazy(&config.database_url)?;

    let state = Arc::new(AppState::new(db));
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr()?;

    info!("真人荷官视讯 admin console starting on http://{}", addr);
    info!("Serving client bundle from {}", config.static_dir.display());
    info!("");
    info!("Endpoints:");
    info!("  GET  /          - Console shell (login + admin frame)");
    info!("  GET  /static/*  - Client bundle (css/js)");
    info!("  GET  /health    - Liveness check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Admin console shutdown complete");

    Ok(())
}
