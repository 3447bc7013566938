//! Metrics collection and exposition.
//!
//! # Metrics
//! - `groupie_requests_total` (counter): requests by method, route, status
//! - `groupie_request_duration_seconds` (histogram): request latency
//! - `groupie_upstream_requests_total` (counter): upstream calls by resource, outcome
//! - `groupie_upstream_duration_seconds` (histogram): upstream latency by resource

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::upstream::Resource;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();
    let route = route.to_string();

    counter!(
        "groupie_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "groupie_request_duration_seconds",
        "method" => method,
        "route" => route,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call.
pub fn record_upstream(resource: Resource, outcome: &'static str, start: Instant) {
    counter!(
        "groupie_upstream_requests_total",
        "resource" => resource.as_str(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!(
        "groupie_upstream_duration_seconds",
        "resource" => resource.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}
