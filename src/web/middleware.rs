//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info};

/// Logs method, path, status and latency for every request.
///
/// Asset requests log at debug so a page load (one document, many css/js
/// fetches) produces a single info line.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let is_asset = uri.path().starts_with("/static/");

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if is_asset {
        debug!(method = %method, uri = %uri, status, latency_ms, "Asset served");
    } else {
        info!(method = %method, uri = %uri, status, latency_ms, "Request completed");
    }

    response
}
