//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_page_requests_total` (counter): dispatched pages by route,
//!   status, and method
//! - `gateway_page_duration_seconds` (histogram): dispatch latency
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Labels for route, status code, method
//! - Static and mounted-subsystem traffic is not recorded here; those
//!   namespaces own their own accounting

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one dispatched page request.
pub fn record_page_request(method: &str, status: u16, route: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("route", route.to_string()),
    ];
    metrics::counter!("gateway_page_requests_total", &labels).increment(1);
    metrics::histogram!("gateway_page_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
