//! Request metrics.

use metrics::{counter, histogram};
use std::time::Instant;

/// Record one handled request.
pub fn record_request(route: &'static str, status: u16, started: Instant) {
    counter!("dashboard_requests_total", "route" => route, "status" => status.to_string())
        .increment(1);
    histogram!("dashboard_request_duration_ms", "route" => route)
        .record(started.elapsed().as_secs_f64() * 1000.0);
}

/// Record the size of a selection.
pub fn record_selection(route: &'static str, rows: usize) {
    histogram!("dashboard_selection_rows", "route" => route).record(rows as f64);
}

pub fn record_no_update(route: &'static str) {
    counter!("dashboard_no_update_total", "route" => route).increment(1);
}
