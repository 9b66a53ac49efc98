//! Metrics collection module
//!
//! Tracks how often the remote relevance service answers and how often the
//! local ranking engine has to take over.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Search controller counters
#[derive(Debug, Default)]
pub struct Metrics {
    total_searches: AtomicU64,
    cache_hits: AtomicU64,
    remote_successes: AtomicU64,
    remote_failures: AtomicU64,
    remote_empty: AtomicU64,
    fallbacks: AtomicU64,
}

impl Metrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_search(&self) {
        self.total_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_success(&self) {
        self.remote_successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Remote error or timeout
    pub fn record_remote_failure(&self) {
        self.remote_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Remote answered but nothing mapped onto the catalog
    pub fn record_remote_empty(&self) {
        self.remote_empty.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_searches: self.total_searches.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            remote_successes: self.remote_successes.load(Ordering::Relaxed),
            remote_failures: self.remote_failures.load(Ordering::Relaxed),
            remote_empty: self.remote_empty.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
        }
    }
}

/// Plain counter values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub total_searches: u64,
    pub cache_hits: u64,
    pub remote_successes: u64,
    pub remote_failures: u64,
    pub remote_empty: u64,
    pub fallbacks: u64,
}

impl MetricsSnapshot {
    /// Share of searches answered by the local engine, in percent
    pub fn fallback_rate(&self) -> f64 {
        if self.total_searches == 0 {
            0.0
        } else {
            (self.fallbacks as f64 / self.total_searches as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = Metrics::new();

        metrics.inc_search();
        metrics.record_remote_success();
        metrics.inc_search();
        metrics.record_remote_failure();
        metrics.record_fallback();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_searches, 2);
        assert_eq!(snapshot.remote_successes, 1);
        assert_eq!(snapshot.remote_failures, 1);
        assert_eq!(snapshot.fallbacks, 1);
        assert_eq!(snapshot.fallback_rate(), 50.0);
    }

    #[test]
    fn test_empty_rate() {
        assert_eq!(MetricsSnapshot::default().fallback_rate(), 0.0);
    }
}
