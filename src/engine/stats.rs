use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Relaxed atomics keep queries `&self` so a finished engine can be shared
/// across threads without locks.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    queries: AtomicU64,
    literal_hits: AtomicU64,
    glob_checks: AtomicU64,
    lines_compiled: AtomicU64,
    lines_skipped: AtomicU64,
}

impl EngineMetrics {
    #[inline]
    pub fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_literal_hit(&self) {
        self.literal_hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_glob_check(&self) {
        self.glob_checks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_compiled(&self) {
        self.lines_compiled.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_skipped(&self) {
        self.lines_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            literal_hits: self.literal_hits.load(Ordering::Relaxed),
            glob_checks: self.glob_checks.load(Ordering::Relaxed),
            lines_compiled: self.lines_compiled.load(Ordering::Relaxed),
            lines_skipped: self.lines_skipped.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub queries: u64,
    pub literal_hits: u64,
    pub glob_checks: u64,
    pub lines_compiled: u64,
    pub lines_skipped: u64,
}
