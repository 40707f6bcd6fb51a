//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proverbs_http_requests_total` (counter): requests by method, status
//! - `proverbs_http_request_duration_seconds` (histogram): latency by method
//! - `proverbs_store_entries` (gauge): current number of stored proverbs

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed HTTP request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "proverbs_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "proverbs_http_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the current store size.
pub fn record_store_size(entries: usize) {
    gauge!("proverbs_store_entries").set(entries as f64);
}
