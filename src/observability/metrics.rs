//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_batches_total` (counter): finished batches by outcome
//!   (ok, rejected, failed, cancelled)
//! - `gateway_batch_duration_seconds` (histogram): batch latency by outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished batch.
pub fn record_batch(outcome: &'static str, started: Instant) {
    metrics::counter!("gateway_batches_total", "outcome" => outcome).increment(1);
    metrics::histogram!("gateway_batch_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
