//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): requests by method, status, dispatch
//! - `relay_request_duration_seconds` (histogram): time to response headers
//! - `relay_backend_errors_total` (counter): backend failures by kind
//!
//! Recording is a no-op until a recorder is installed, so tests and
//! deployments with metrics disabled pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, dispatch: &'static str, start: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "dispatch" => dispatch
    )
    .increment(1);

    metrics::histogram!("relay_request_duration_seconds", "dispatch" => dispatch)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_backend_error(kind: &'static str) {
    metrics::counter!("relay_backend_errors_total", "kind" => kind).increment(1);
}
