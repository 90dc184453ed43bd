//! Process-lifetime relay counters.
//!
//! One [`RelayMetrics`] is constructed at startup, wrapped in an `Arc`, and
//! handed to both the relay (which records) and the stats endpoint (which
//! reads). Counters start at zero on every process start and only grow while
//! the process lives; there is no persistence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Additive counters shared across concurrent requests.
///
/// Atomic adds keep the counters lost-update-free without a lock; readers see
/// a pair that may be one request apart, which is fine for display.
#[derive(Debug, Default)]
pub struct RelayMetrics {
    total_requests: AtomicU64,
    total_latency_us: AtomicU64,
}

/// A point-in-time view of the counters, shaped for the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Relay calls completed since process start.
    pub total_requests: u64,
    /// Mean relay latency in seconds, rounded to 2 decimals.
    pub average_response_time: f64,
}

impl RelayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed relay call.
    pub fn record(&self, latency: Duration) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.total_latency_us
            .fetch_add(latency.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// Current counters; the average guards against division by zero before
    /// the first request.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let total = self.total_requests.load(Ordering::Relaxed);
        let cumulative_us = self.total_latency_us.load(Ordering::Relaxed);
        let avg_secs = cumulative_us as f64 / 1_000_000.0 / total.max(1) as f64;
        MetricsSnapshot {
            total_requests: total,
            average_response_time: (avg_secs * 100.0).round() / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let m = RelayMetrics::new();
        let snap = m.snapshot();
        assert_eq!(snap.total_requests, 0);
        assert_eq!(snap.average_response_time, 0.0);
    }

    #[test]
    fn records_count_and_average() {
        let m = RelayMetrics::new();
        m.record(Duration::from_millis(1000));
        m.record(Duration::from_millis(2000));
        let snap = m.snapshot();
        assert_eq!(snap.total_requests, 2);
        assert_eq!(snap.average_response_time, 1.5);
    }

    #[test]
    fn counters_are_monotonic() {
        let m = RelayMetrics::new();
        let mut last = 0;
        for _ in 0..5 {
            m.record(Duration::from_millis(10));
            let now = m.total_requests();
            assert!(now > last);
            last = now;
        }
        assert_eq!(last, 5);
    }
}
