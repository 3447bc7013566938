//! Request metrics middleware.
//!
//! Installed with `route_layer`, so only matched routes are recorded and the
//! route label is the route template, never the raw path.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::request::request_id;
use crate::observability::metrics;

pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let id = request_id(&request).to_string();

    let response = next.run(request).await;
    let status = response.status();

    tracing::debug!(
        request_id = %id,
        method = %method,
        route = %route,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request handled"
    );
    metrics::record_request(&method, status.as_u16(), &route, start);

    response
}
