//! Prometheus-compatible metrics endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parking_lot::RwLock;
use sbv_vtt_lib::Conversion;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::state::AppState;

/// Metrics collector
#[derive(Debug)]
pub struct Metrics {
    /// Server start time
    start_time: Instant,
    /// Total requests processed
    request_count: RwLock<u64>,
    /// Requests by endpoint
    requests_by_endpoint: RwLock<HashMap<String, u64>>,
    /// Successful conversions
    conversions: RwLock<u64>,
    /// Cues written across all conversions
    cues_emitted: RwLock<u64>,
    /// Malformed time lines dropped across all conversions
    skipped_time_lines: RwLock<u64>,
    /// Request body bytes accepted for conversion
    bytes_received: RwLock<u64>,
    /// VTT bytes served
    bytes_served: RwLock<u64>,
    /// Errors by type
    errors_by_type: RwLock<HashMap<String, u64>>,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub requests: u64,
    pub conversions: u64,
    pub cues_emitted: u64,
    pub skipped_time_lines: u64,
    pub bytes_received: u64,
    pub bytes_served: u64,
    pub errors: u64,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            request_count: RwLock::new(0),
            requests_by_endpoint: RwLock::new(HashMap::new()),
            conversions: RwLock::new(0),
            cues_emitted: RwLock::new(0),
            skipped_time_lines: RwLock::new(0),
            bytes_received: RwLock::new(0),
            bytes_served: RwLock::new(0),
            errors_by_type: RwLock::new(HashMap::new()),
        }
    }

    /// Record a request
    pub fn record_request(&self, endpoint: &str) {
        *self.request_count.write() += 1;
        *self
            .requests_by_endpoint
            .write()
            .entry(endpoint.to_string())
            .or_insert(0) += 1;
    }

    /// Record a successful conversion
    pub fn record_conversion(&self, conversion: &Conversion, request_bytes: usize) {
        *self.conversions.write() += 1;
        *self.cues_emitted.write() += conversion.cue_count as u64;
        *self.skipped_time_lines.write() += conversion.skipped_time_lines as u64;
        *self.bytes_received.write() += request_bytes as u64;
        *self.bytes_served.write() += conversion.vtt.len() as u64;
    }

    /// Record error
    pub fn record_error(&self, error_type: &str) {
        *self
            .errors_by_type
            .write()
            .entry(error_type.to_string())
            .or_insert(0) += 1;
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_secs: self.uptime_secs(),
            requests: *self.request_count.read(),
            conversions: *self.conversions.read(),
            cues_emitted: *self.cues_emitted.read(),
            skipped_time_lines: *self.skipped_time_lines.read(),
            bytes_received: *self.bytes_received.read(),
            bytes_served: *self.bytes_served.read(),
            errors: self.errors_by_type.read().values().sum(),
        }
    }

    /// Export metrics in Prometheus format
    pub fn export_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        let mut output = String::new();

        push_metric(
            &mut output,
            "sbv_vtt_uptime_seconds",
            "Server uptime in seconds",
            "counter",
            snapshot.uptime_secs,
        );
        push_metric(
            &mut output,
            "sbv_vtt_requests_total",
            "Total number of HTTP requests",
            "counter",
            snapshot.requests,
        );

        output.push_str("\n# HELP sbv_vtt_requests_by_endpoint Requests by endpoint\n");
        output.push_str("# TYPE sbv_vtt_requests_by_endpoint counter\n");
        for (endpoint, count) in self.requests_by_endpoint.read().iter() {
            output.push_str(&format!(
                "sbv_vtt_requests_by_endpoint{{endpoint=\"{}\"}} {}\n",
                endpoint, count
            ));
        }

        push_metric(
            &mut output,
            "sbv_vtt_conversions_total",
            "Total successful conversions",
            "counter",
            snapshot.conversions,
        );
        push_metric(
            &mut output,
            "sbv_vtt_cues_emitted_total",
            "Total cues written",
            "counter",
            snapshot.cues_emitted,
        );
        push_metric(
            &mut output,
            "sbv_vtt_skipped_time_lines_total",
            "Total malformed time lines dropped",
            "counter",
            snapshot.skipped_time_lines,
        );
        push_metric(
            &mut output,
            "sbv_vtt_bytes_received_total",
            "Total request bytes converted",
            "counter",
            snapshot.bytes_received,
        );
        push_metric(
            &mut output,
            "sbv_vtt_bytes_served_total",
            "Total VTT bytes served",
            "counter",
            snapshot.bytes_served,
        );

        output.push_str("\n# HELP sbv_vtt_errors_total Total errors by type\n");
        output.push_str("# TYPE sbv_vtt_errors_total counter\n");
        for (error_type, count) in self.errors_by_type.read().iter() {
            output.push_str(&format!(
                "sbv_vtt_errors_total{{type=\"{}\"}} {}\n",
                error_type, count
            ));
        }

        output
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

fn push_metric(output: &mut String, name: &str, help: &str, kind: &str, value: u64) {
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(&format!("# HELP {} {}\n", name, help));
    output.push_str(&format!("# TYPE {} {}\n", name, kind));
    output.push_str(&format!("{} {}\n", name, value));
}

/// Metrics endpoint handler
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let prometheus_output = state.metrics.export_prometheus();

    (
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4")],
        prometheus_output,
    )
        .into_response()
}
