//! Listing counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub listings_served: AtomicU64,
    pub records_returned: AtomicU64,
    pub storage_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            listings_served: AtomicU64::new(0),
            records_returned: AtomicU64::new(0),
            storage_failures: AtomicU64::new(0),
        }
    }

    pub fn record_listing(&self, count: usize) {
        self.listings_served.fetch_add(1, Ordering::Relaxed);
        self.records_returned.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_storage_failure(&self) {
        self.storage_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            listings_served: self.listings_served.load(Ordering::Relaxed),
            records_returned: self.records_returned.load(Ordering::Relaxed),
            storage_failures: self.storage_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub listings_served: u64,
    pub records_returned: u64,
    pub storage_failures: u64,
}
